//! Simulation state and entity types
//!
//! Everything the per-frame step reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A positioned object with an identifier (player, player bullet, enemy bullet)
///
/// `pos` is the top-left corner of the object's hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub pos: Vec2,
}

impl Entity {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
        }
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Default,
}

/// A formation member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub kind: EnemyKind,
}

/// Horizontal sweep direction shared by the whole formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Right,
    Left,
}

impl SweepDirection {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            SweepDirection::Right => 1.0,
            SweepDirection::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SweepDirection::Right => SweepDirection::Left,
            SweepDirection::Left => SweepDirection::Right,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Player ship (y never changes)
    pub player: Entity,
    /// Player bullets in firing order
    pub player_bullets: Vec<Entity>,
    /// Formation members (sorted by id for deterministic iteration)
    pub enemies: Vec<Enemy>,
    /// Enemy bullets in firing order
    pub enemy_bullets: Vec<Entity>,
    pub enemy_direction: SweepDirection,
    pub score: u32,
    /// Latched; cleared only by `reset`
    pub game_over: bool,
    /// Next entity ID
    next_id: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// Fresh game: centred player, full formation, no bullets, score 0
    pub fn new() -> Self {
        let mut state = Self {
            player: Entity::new(0, PLAYER_START_X, PLAYER_Y),
            player_bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            enemy_direction: SweepDirection::Right,
            score: 0,
            game_over: false,
            next_id: 1,
        };
        state.spawn_formation();
        state
    }

    /// Reinitialise in place
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the enemy set with a full `ENEMY_ROWS x ENEMY_COLS` grid
    pub fn spawn_formation(&mut self) {
        self.enemies.clear();
        self.enemies.reserve(ENEMY_ROWS * ENEMY_COLS);
        for row in 0..ENEMY_ROWS {
            for col in 0..ENEMY_COLS {
                let id = self.next_entity_id();
                self.enemies.push(Enemy {
                    id,
                    pos: formation_slot(row, col),
                    kind: EnemyKind::Default,
                });
            }
        }
    }

    /// Ensure enemies are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
    }
}

/// Player x at game start (centred)
pub const PLAYER_START_X: f32 = GAME_WIDTH / 2.0 - PLAYER_WIDTH / 2.0;
/// Fixed player y
pub const PLAYER_Y: f32 = GAME_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN;

/// Top-left corner of the enemy at `(row, col)` in a freshly spawned formation
pub fn formation_slot(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        col as f32 * (ENEMY_WIDTH + ENEMY_GAP) + ENEMY_GAP,
        row as f32 * (ENEMY_HEIGHT + ENEMY_GAP) + FORMATION_TOP,
    )
}
