//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the
//! browser or the GPU:
//! - One `step` per rendered frame
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (by entity ID)

pub mod collision;
pub mod formation;
pub mod rng;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Hit, bullet_enemy_hits};
pub use rng::{FixedRoll, RandomSource};
pub use session::{GamePhase, Session};
pub use state::{Enemy, EnemyKind, Entity, PLAYER_START_X, PLAYER_Y, SimulationState, SweepDirection};
pub use tick::{StepReport, TickInput, fire_volley, step};
