//! Enemy formation movement and fire
//!
//! The formation moves as one body: a shared sweep direction, and a
//! synchronized descent whenever a member reaches the wall it is sweeping
//! toward.

use super::collision::enemy_box;
use super::rng::RandomSource;
use super::state::{Enemy, Entity, SimulationState, SweepDirection};
use crate::consts::*;

/// True if a member's leading edge has reached the wall in the sweep direction
pub fn wall_hit(enemies: &[Enemy], direction: SweepDirection) -> bool {
    match direction {
        SweepDirection::Right => enemies.iter().any(|e| enemy_box(e).right() >= GAME_WIDTH),
        SweepDirection::Left => enemies.iter().any(|e| e.pos.x <= 0.0),
    }
}

/// Move the formation one frame: bounce-and-descend on a wall hit, then sweep
///
/// Returns true if the direction flipped this frame.
pub fn advance(state: &mut SimulationState) -> bool {
    if state.enemies.is_empty() {
        return false;
    }

    let flipped = wall_hit(&state.enemies, state.enemy_direction);
    if flipped {
        state.enemy_direction = state.enemy_direction.flipped();
        for enemy in &mut state.enemies {
            enemy.pos.y += ENEMY_VERTICAL_SPEED;
        }
    }

    let dx = ENEMY_SPEED * state.enemy_direction.sign();
    for enemy in &mut state.enemies {
        enemy.pos.x += dx;
    }

    flipped
}

/// Where a bullet fired by `enemy` appears: centred under its bottom edge
pub fn muzzle(enemy: &Enemy) -> (f32, f32) {
    (
        enemy.pos.x + ENEMY_WIDTH / 2.0 - ENEMY_BULLET_WIDTH / 2.0,
        enemy.pos.y + ENEMY_HEIGHT,
    )
}

/// Let each enemy fire with probability `ENEMY_FIRE_RATE`
///
/// One draw per enemy, in id order. Returns the number of bullets spawned.
pub fn fire(state: &mut SimulationState, rng: &mut impl RandomSource) -> usize {
    let mut spawned = 0;
    for i in 0..state.enemies.len() {
        if rng.next_unit() < ENEMY_FIRE_RATE {
            let (x, y) = muzzle(&state.enemies[i]);
            let id = state.next_entity_id();
            state.enemy_bullets.push(Entity::new(id, x, y));
            spawned += 1;
        }
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedRoll;
    use crate::sim::state::EnemyKind;
    use glam::Vec2;

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            pos: Vec2::new(x, y),
            kind: EnemyKind::Default,
        }
    }

    fn state_with(enemies: Vec<Enemy>, direction: SweepDirection) -> SimulationState {
        let mut state = SimulationState::new();
        state.enemies = enemies;
        state.enemy_direction = direction;
        state
    }

    #[test]
    fn test_wall_hit_respects_direction() {
        let at_right = [enemy(1, GAME_WIDTH - ENEMY_WIDTH, 50.0)];
        let at_left = [enemy(1, 0.0, 50.0)];

        assert!(wall_hit(&at_right, SweepDirection::Right));
        assert!(!wall_hit(&at_right, SweepDirection::Left));
        assert!(wall_hit(&at_left, SweepDirection::Left));
        assert!(!wall_hit(&at_left, SweepDirection::Right));
        assert!(!wall_hit(&[], SweepDirection::Right));
    }

    #[test]
    fn test_advance_sweeps() {
        let mut state = state_with(vec![enemy(1, 100.0, 50.0)], SweepDirection::Right);
        assert!(!advance(&mut state));
        assert!((state.enemies[0].pos.x - (100.0 + ENEMY_SPEED)).abs() < 1e-4);
        assert_eq!(state.enemies[0].pos.y, 50.0);
    }

    #[test]
    fn test_advance_bounces_and_descends() {
        let mut state = state_with(
            vec![enemy(1, GAME_WIDTH - ENEMY_WIDTH, 50.0), enemy(2, 300.0, 80.0)],
            SweepDirection::Right,
        );
        assert!(advance(&mut state));
        assert_eq!(state.enemy_direction, SweepDirection::Left);
        // Every member descends once and moves with the new direction
        assert_eq!(state.enemies[0].pos.y, 50.0 + ENEMY_VERTICAL_SPEED);
        assert_eq!(state.enemies[1].pos.y, 80.0 + ENEMY_VERTICAL_SPEED);
        assert!(state.enemies[0].pos.x < GAME_WIDTH - ENEMY_WIDTH);
        assert!((state.enemies[1].pos.x - (300.0 - ENEMY_SPEED)).abs() < 1e-4);

        // Next frame: no contact in the new direction, no second flip
        assert!(!advance(&mut state));
        assert_eq!(state.enemy_direction, SweepDirection::Left);
        assert_eq!(state.enemies[1].pos.y, 80.0 + ENEMY_VERTICAL_SPEED);
    }

    #[test]
    fn test_advance_empty_formation() {
        let mut state = state_with(Vec::new(), SweepDirection::Left);
        assert!(!advance(&mut state));
        assert_eq!(state.enemy_direction, SweepDirection::Left);
    }

    #[test]
    fn test_fire_always() {
        let mut state = state_with(
            vec![enemy(1, 100.0, 50.0), enemy(2, 200.0, 50.0)],
            SweepDirection::Right,
        );
        let spawned = fire(&mut state, &mut FixedRoll::ALWAYS);
        assert_eq!(spawned, 2);
        assert_eq!(state.enemy_bullets.len(), 2);
        assert_eq!(state.enemy_bullets[0].pos, Vec2::new(118.0, 80.0));
        assert_ne!(state.enemy_bullets[0].id, state.enemy_bullets[1].id);
    }

    #[test]
    fn test_fire_never() {
        let mut state = SimulationState::new();
        assert_eq!(fire(&mut state, &mut FixedRoll::NEVER), 0);
        assert!(state.enemy_bullets.is_empty());
    }

    #[test]
    fn test_fire_rate_threshold() {
        let mut state = state_with(vec![enemy(1, 100.0, 50.0)], SweepDirection::Right);
        // A draw exactly at the rate does not fire
        assert_eq!(fire(&mut state, &mut FixedRoll(ENEMY_FIRE_RATE)), 0);
        assert_eq!(fire(&mut state, &mut FixedRoll(ENEMY_FIRE_RATE / 2.0)), 1);
    }
}
