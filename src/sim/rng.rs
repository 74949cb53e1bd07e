//! Random draws used by the simulation
//!
//! Enemy fire is the only non-deterministic part of a step. It goes through
//! [`RandomSource`] so callers pick the source: a seeded PRNG in the game,
//! a constant in tests.

use rand::{Rng, RngCore};

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// A source that returns the same value on every draw
///
/// `FixedRoll(0.0)` makes every enemy fire every frame, `FixedRoll(1.0)`
/// silences the formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(pub f32);

impl FixedRoll {
    pub const ALWAYS: FixedRoll = FixedRoll(0.0);
    pub const NEVER: FixedRoll = FixedRoll(1.0);
}

impl RandomSource for FixedRoll {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}
