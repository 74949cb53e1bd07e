//! Game session: which screen is showing and the state behind it

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::SimulationState;
use super::tick::{StepReport, TickInput, step};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// A session owns the simulation state and gates stepping on the phase
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    pub state: SimulationState,
    /// Completed levels in this run
    pub levels_cleared: u32,
    /// Frames stepped in this run
    pub frames: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a run from a fresh state
    pub fn start(&mut self) {
        self.state.reset();
        self.levels_cleared = 0;
        self.frames = 0;
        self.phase = GamePhase::Playing;
        log::info!("Run started");
    }

    /// Advance one frame; does nothing outside `Playing`
    pub fn tick(&mut self, input: &TickInput, rng: &mut impl RandomSource) -> Option<StepReport> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        let report = step(&mut self.state, input, rng);
        self.frames += 1;
        if report.level_cleared {
            self.levels_cleared += 1;
        }
        if self.state.game_over {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Run ended after {} frames, {} levels, score {}",
                self.frames,
                self.levels_cleared,
                self.state.score
            );
        }
        Some(report)
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedRoll;
    use crate::sim::state::Entity;

    #[test]
    fn test_title_does_not_step() {
        let mut session = Session::new();
        assert_eq!(session.phase, GamePhase::Title);
        let before = session.state.clone();

        let input = TickInput {
            left: true,
            ..Default::default()
        };
        assert!(session.tick(&input, &mut FixedRoll::ALWAYS).is_none());
        assert_eq!(session.state, before);
        assert_eq!(session.frames, 0);
    }

    #[test]
    fn test_start_then_play() {
        let mut session = Session::new();
        session.start();
        assert_eq!(session.phase, GamePhase::Playing);

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        let report = session.tick(&input, &mut FixedRoll::NEVER).unwrap();
        assert_eq!(report.volley, 3);
        assert_eq!(session.frames, 1);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut session = Session::new();
        session.start();
        let id = session.state.next_entity_id();
        session.state.enemy_bullets.push(Entity::new(id, 390.0, 550.0));

        session.tick(&TickInput::default(), &mut FixedRoll::NEVER);
        assert_eq!(session.phase, GamePhase::GameOver);
        assert!(session.tick(&TickInput::default(), &mut FixedRoll::NEVER).is_none());

        session.start();
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(!session.state.game_over);
        assert_eq!(session.score(), 0);
        assert!(session.state.enemy_bullets.is_empty());
    }

    #[test]
    fn test_counts_cleared_levels() {
        use crate::sim::state::{Enemy, EnemyKind};
        use glam::Vec2;

        let mut session = Session::new();
        session.start();
        session.state.enemies = vec![Enemy {
            id: 10_000,
            pos: Vec2::new(300.0, 300.0),
            kind: EnemyKind::Default,
        }];
        let id = session.state.next_entity_id();
        session.state.player_bullets.push(Entity::new(id, 300.0, 300.0));

        session.tick(&TickInput::default(), &mut FixedRoll::NEVER);
        assert_eq!(session.levels_cleared, 1);
        assert_eq!(session.score(), 110);
    }
}
