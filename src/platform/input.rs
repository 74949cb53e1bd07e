//! Keyboard state tracking
//!
//! Keys are identified by the DOM `KeyboardEvent.key` string. The tracker
//! keeps which keys are held and remembers a fire press until the next frame
//! consumes it.

use std::collections::HashMap;

use crate::sim::TickInput;

const LEFT_KEYS: &[&str] = &["ArrowLeft", "a", "A"];
const RIGHT_KEYS: &[&str] = &["ArrowRight", "d", "D"];
const FIRE_KEY: &str = " ";

/// Held keys plus a pending fire press
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<String, bool>,
    fire_pending: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down; returns true if the key was not already held
    ///
    /// Auto-repeat key-downs return false and never queue another volley.
    pub fn press(&mut self, key: &str) -> bool {
        let was_held = self.is_held(key);
        self.held.insert(key.to_owned(), true);
        if !was_held && key == FIRE_KEY {
            self.fire_pending = true;
        }
        !was_held
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_owned(), false);
    }

    /// Forget everything (e.g. the window lost focus and key-ups were missed)
    pub fn clear(&mut self) {
        self.held.clear();
        self.fire_pending = false;
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    pub fn left(&self) -> bool {
        LEFT_KEYS.iter().any(|k| self.is_held(k))
    }

    pub fn right(&self) -> bool {
        RIGHT_KEYS.iter().any(|k| self.is_held(k))
    }

    /// Snapshot for one frame; consumes the pending fire press
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            left: self.left(),
            right: self.right(),
            fire: std::mem::take(&mut self.fire_pending),
        }
    }

    /// Whether `key` is one the game reacts to (used to suppress page scrolling)
    pub fn is_game_key(key: &str) -> bool {
        key == FIRE_KEY || LEFT_KEYS.contains(&key) || RIGHT_KEYS.contains(&key)
    }
}
