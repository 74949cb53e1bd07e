//! Scene assembly: simulation snapshot to triangles

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::SimulationState;
use crate::sim::collision::{ENEMY_BULLET_SIZE, ENEMY_SIZE, PLAYER_BULLET_SIZE, PLAYER_SIZE};

/// Board-space vertices for one frame
///
/// Draw order is enemies, enemy bullets, player bullets, then the ship on top.
pub fn build_scene(state: &SimulationState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.enemies.len() * 30
            + (state.enemy_bullets.len() + state.player_bullets.len()) * 6
            + 15,
    );

    for enemy in &state.enemies {
        // Legs flip every 10 board units of travel
        let frame = (enemy.pos.x / 10.0).floor() as i32 % 2 == 0;
        vertices.extend(shapes::invader(
            enemy.pos,
            ENEMY_SIZE,
            colors::ENEMY,
            colors::ENEMY_EYES,
            frame,
        ));
    }

    for bullet in &state.enemy_bullets {
        shapes::push_rect(&mut vertices, bullet.pos, ENEMY_BULLET_SIZE, colors::ENEMY_BULLET);
    }
    for bullet in &state.player_bullets {
        shapes::push_rect(&mut vertices, bullet.pos, PLAYER_BULLET_SIZE, colors::PLAYER_BULLET);
    }

    vertices.extend(shapes::ship(
        state.player.pos,
        PLAYER_SIZE,
        colors::PLAYER,
        colors::PLAYER_COCKPIT,
    ));

    vertices
}
