//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. Snapshots are drawn into a
//! framebuffer of board glyphs (grid, food, body, head, text) which is then
//! flushed to the terminal one changed row span at a time.
//!
//! - The core stays deterministic and testable; this crate only reads snapshots
//! - Board cells are 2 columns wide by default to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use grid_snake_core as core;
pub use grid_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Ink, Rgb, Tone};
pub use game_view::{status_text, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
