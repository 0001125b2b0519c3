//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key types. It maps key events into [`crate::types::GameAction`]
//! and tracks held controls (move left/right, fast drop) as flags that the
//! frame loop samples once per frame.

pub mod handler;
pub mod map;

pub use pig_tetris_types as types;

pub use handler::{HeldControl, InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, should_quit};
