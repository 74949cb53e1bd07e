//! Platform layer
//!
//! Browser-facing plumbing that is still plain Rust:
//! - Keyboard state (held movement keys, fire press edge)

pub mod input;

pub use input::KeyState;
