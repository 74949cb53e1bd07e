//! Per-frame simulation step
//!
//! Advances the state by exactly one rendered frame.

use super::collision::{bullet_enemy_hits, formation_breached, player_shot};
use super::formation;
use super::rng::RandomSource;
use super::state::{Entity, SimulationState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A move-left key is held
    pub left: bool,
    /// A move-right key is held
    pub right: bool,
    /// The fire key went down since the last frame (one-shot)
    pub fire: bool,
}

/// What happened during one step, for logging and presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub volley: usize,
    pub enemies_destroyed: usize,
    pub enemy_shots: usize,
    pub wall_bounce: bool,
    pub level_cleared: bool,
    pub game_over: bool,
}

/// Spawn a three-bullet volley at the player, if there is capacity
///
/// Bullets leave from the ship's left edge, centre and right edge. Returns
/// the number of bullets added (all or nothing).
pub fn fire_volley(state: &mut SimulationState) -> usize {
    if state.game_over {
        return 0;
    }
    if state.player_bullets.len() > MAX_PLAYER_BULLETS - VOLLEY_SIZE {
        log::debug!("Volley gated ({} bullets live)", state.player_bullets.len());
        return 0;
    }

    let origin = state.player.pos;
    let offsets = [
        0.0,
        PLAYER_WIDTH / 2.0 - PLAYER_BULLET_WIDTH / 2.0,
        PLAYER_WIDTH - PLAYER_BULLET_WIDTH,
    ];
    let volley: Vec<Entity> = offsets
        .iter()
        .map(|dx| {
            let id = state.next_entity_id();
            Entity::new(id, origin.x + dx, origin.y)
        })
        .collect();
    state.player_bullets.extend(volley);
    VOLLEY_SIZE
}

/// Advance the simulation by one frame
///
/// No-op once `game_over` is set. Otherwise: fire edge, player movement,
/// bullet movement, formation movement and fire, bullet/enemy collisions
/// against the start-of-frame positions, player-hit checks, level clear.
pub fn step(
    state: &mut SimulationState,
    input: &TickInput,
    rng: &mut impl RandomSource,
) -> StepReport {
    let mut report = StepReport::default();
    if state.game_over {
        report.game_over = true;
        return report;
    }
    state.normalize_order();

    if input.fire {
        report.volley = fire_volley(state);
    }

    // Collisions below resolve against where things were when the frame began
    let bullets_before = state.player_bullets.clone();
    let enemies_before = state.enemies.clone();

    // Player movement (both keys may apply in one frame)
    let mut x = state.player.pos.x;
    if input.left {
        x -= PLAYER_SPEED;
    }
    if input.right {
        x += PLAYER_SPEED;
    }
    state.player.pos.x = x.clamp(0.0, GAME_WIDTH - PLAYER_WIDTH);

    // Bullets
    for bullet in &mut state.player_bullets {
        bullet.pos.y -= BULLET_SPEED;
    }
    state.player_bullets.retain(|b| b.pos.y > 0.0);

    for bullet in &mut state.enemy_bullets {
        bullet.pos.y += BULLET_SPEED;
    }
    state.enemy_bullets.retain(|b| b.pos.y < GAME_HEIGHT);

    // Formation
    if !state.enemies.is_empty() {
        report.wall_bounce = formation::advance(state);
        report.enemy_shots = formation::fire(state, rng);
    }

    // Player bullets vs enemies
    let hits = bullet_enemy_hits(&bullets_before, &enemies_before);
    if !hits.is_empty() {
        state
            .player_bullets
            .retain(|b| !hits.iter().any(|h| h.bullet_id == b.id));
        state
            .enemies
            .retain(|e| !hits.iter().any(|h| h.enemy_id == e.id));
        state.score += ENEMY_KILL_POINTS * hits.len() as u32;
        report.enemies_destroyed = hits.len();
    }

    // Player hit by a bullet, rammed, or the formation landed
    if player_shot(&state.player, &state.enemy_bullets)
        || formation_breached(&state.player, &state.enemies)
    {
        state.game_over = true;
        report.game_over = true;
        log::info!("Game over - final score {}", state.score);
        return report;
    }

    if state.enemies.is_empty() {
        state.spawn_formation();
        state.score += LEVEL_CLEAR_BONUS;
        report.level_cleared = true;
        log::info!("Level cleared - score {}", state.score);
    }

    report
}
