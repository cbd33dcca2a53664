//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]; the runner forwards turns to the
//! engine's direction intake and handles pause/restart itself.

pub mod map;

pub use grid_snake_types as types;

pub use map::{handle_key_event, should_quit};
