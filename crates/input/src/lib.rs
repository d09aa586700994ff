//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key events.
//! It maps key presses into [`crate::types::GameAction`]s; the session decides
//! what they do.

pub mod map;

pub use tui_2048_types as types;

pub use map::{direction_for, handle_key_event, should_quit};
