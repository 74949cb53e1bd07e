//! Hitboxes and collision passes
//!
//! Every object is an axis-aligned rectangle anchored at its top-left corner.
//! Player bullets, enemy bullets, enemies and the player each have a fixed
//! hitbox size from `consts`.

use glam::Vec2;

use super::state::{Enemy, Entity};
use crate::consts::*;
use crate::rects_overlap;

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        rects_overlap(self.pos, self.size, other.pos, other.size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

pub const PLAYER_SIZE: Vec2 = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
pub const ENEMY_SIZE: Vec2 = Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT);
pub const PLAYER_BULLET_SIZE: Vec2 = Vec2::new(PLAYER_BULLET_WIDTH, PLAYER_BULLET_HEIGHT);
pub const ENEMY_BULLET_SIZE: Vec2 = Vec2::new(ENEMY_BULLET_WIDTH, ENEMY_BULLET_HEIGHT);

pub fn player_box(player: &Entity) -> Aabb {
    Aabb::new(player.pos, PLAYER_SIZE)
}

pub fn enemy_box(enemy: &Enemy) -> Aabb {
    Aabb::new(enemy.pos, ENEMY_SIZE)
}

pub fn player_bullet_box(bullet: &Entity) -> Aabb {
    Aabb::new(bullet.pos, PLAYER_BULLET_SIZE)
}

pub fn enemy_bullet_box(bullet: &Entity) -> Aabb {
    Aabb::new(bullet.pos, ENEMY_BULLET_SIZE)
}

/// A player bullet that destroyed an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub bullet_id: u32,
    pub enemy_id: u32,
}

/// Pair player bullets with the enemies they overlap
///
/// Bullets are visited in the given order and enemies in ascending id order.
/// A bullet takes the first unclaimed enemy it overlaps; each bullet and each
/// enemy appears in at most one hit.
pub fn bullet_enemy_hits(bullets: &[Entity], enemies: &[Enemy]) -> Vec<Hit> {
    let mut by_id: Vec<&Enemy> = enemies.iter().collect();
    by_id.sort_by_key(|e| e.id);

    let mut claimed = vec![false; by_id.len()];
    let mut hits = Vec::new();

    for bullet in bullets {
        let bullet_box = player_bullet_box(bullet);
        let target = by_id
            .iter()
            .enumerate()
            .find(|(i, enemy)| !claimed[*i] && bullet_box.overlaps(&enemy_box(enemy)));

        if let Some((i, enemy)) = target {
            claimed[i] = true;
            hits.push(Hit {
                bullet_id: bullet.id,
                enemy_id: enemy.id,
            });
        }
    }

    hits
}

/// Any enemy bullet overlapping the player
pub fn player_shot(player: &Entity, enemy_bullets: &[Entity]) -> bool {
    let ship = player_box(player);
    enemy_bullets
        .iter()
        .any(|b| enemy_bullet_box(b).overlaps(&ship))
}

/// Any enemy past the bottom edge or overlapping the player
pub fn formation_breached(player: &Entity, enemies: &[Enemy]) -> bool {
    let ship = player_box(player);
    enemies.iter().any(|e| {
        let b = enemy_box(e);
        b.bottom() > GAME_HEIGHT || b.overlaps(&ship)
    })
}
