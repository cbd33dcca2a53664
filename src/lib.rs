//! Grid Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `grid_snake::{core,input,term,types}` so
//! the runner, the integration tests and the benches share one import path.

pub use grid_snake_core as core;
pub use grid_snake_input as input;
pub use grid_snake_term as term;
pub use grid_snake_types as types;
