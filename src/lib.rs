//! Space Defender - a grid-invader arcade shooter
//!
//! Core modules:
//! - `sim`: Per-frame simulation (movement, formation, collisions, score)
//! - `platform`: Browser input plumbing (held keys, fire edge)
//! - `renderer`: WebGPU rendering of a simulation snapshot

pub mod platform;
pub mod renderer;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
///
/// Board coordinates have their origin at the top-left corner with y growing
/// downward, matching the canvas.
pub mod consts {
    /// Board dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Gap between the ship's bottom edge and the board's bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Bullets travel this far per frame in both directions
    pub const BULLET_SPEED: f32 = 15.0;
    pub const MAX_PLAYER_BULLETS: usize = 24;
    /// Bullets spawned by one press of the fire key
    pub const VOLLEY_SIZE: usize = 3;

    /// Hitboxes
    pub const PLAYER_BULLET_WIDTH: f32 = 6.0;
    pub const PLAYER_BULLET_HEIGHT: f32 = 15.0;
    pub const ENEMY_BULLET_WIDTH: f32 = 4.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 10.0;

    /// Enemy formation
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_ROWS: usize = 4;
    pub const ENEMY_COLS: usize = 10;
    pub const ENEMY_GAP: f32 = 20.0;
    /// y of the top formation row
    pub const FORMATION_TOP: f32 = 50.0;
    pub const ENEMY_SPEED: f32 = 0.05;
    pub const ENEMY_VERTICAL_SPEED: f32 = 0.5;
    /// Per-enemy, per-frame probability of firing
    pub const ENEMY_FIRE_RATE: f32 = 0.00008;

    /// Scoring
    pub const ENEMY_KILL_POINTS: u32 = 10;
    pub const LEVEL_CLEAR_BONUS: u32 = 100;

    // Misconfiguration is a build error, not a runtime condition.
    const _: () = assert!(PLAYER_SPEED > 0.0 && BULLET_SPEED > 0.0);
    const _: () = assert!(ENEMY_SPEED > 0.0 && ENEMY_VERTICAL_SPEED >= 0.0);
    const _: () = assert!(ENEMY_FIRE_RATE >= 0.0 && ENEMY_FIRE_RATE <= 1.0);
    const _: () = assert!(PLAYER_WIDTH < GAME_WIDTH && PLAYER_HEIGHT < GAME_HEIGHT);
    const _: () = assert!(MAX_PLAYER_BULLETS >= VOLLEY_SIZE);
    const _: () = assert!(
        ENEMY_COLS as f32 * (ENEMY_WIDTH + ENEMY_GAP) + ENEMY_GAP <= GAME_WIDTH,
        "formation wider than the board"
    );
}

/// Axis-aligned rectangle overlap on `(position, size)` pairs
///
/// Edges that merely touch do not overlap.
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}
