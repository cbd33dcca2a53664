//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every rule of the snake game: state representation,
//! direction intake, per-tick movement, collisions, food placement, scoring and
//! win/loss detection. It has **no dependencies** on rendering, input capture
//! or timers, which makes it:
//!
//! - **Deterministic**: the same inputs and randomness produce identical games
//! - **Immutable**: every operation returns a new [`GameState`]
//! - **Clock-free**: the driver decides when a tick happens
//!
//! # Module Structure
//!
//! - [`board`]: row-major occupancy grid used for collisions and free cells
//! - [`food`]: food placement over the free cells
//! - [`game_state`]: the state value and its transitions
//! - [`rng`]: injected randomness ([`RandomSource`])
//! - [`snapshot`]: serializable dump of a state
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its intended direction
//! - A request opposite to the current heading is ignored
//! - Leaving the board or hitting the body ends the game; the tail cell being
//!   vacated does not count as body
//! - Eating grows the snake by one and scores one point
//! - Filling the whole board wins
//!
//! # Example
//!
//! ```
//! use grid_snake_core::GameState;
//! use grid_snake_core::types::{BoardConfig, Coord, Direction, Mode};
//!
//! let board = BoardConfig::new(8, 8).unwrap();
//! let mut rng = || 0.0;
//!
//! let game = GameState::initialize(board, &mut rng).unwrap();
//! assert_eq!(game.mode(), Mode::Idle);
//!
//! // Reversing is rejected, turning starts the game.
//! let game = game.request_direction(Some(Direction::Left));
//! assert_eq!(game.mode(), Mode::Idle);
//! let game = game.request_direction(Some(Direction::Right));
//! assert_eq!(game.mode(), Mode::Running);
//!
//! let game = game.advance_tick(board, &mut rng);
//! assert_eq!(game.head(), Some(Coord::new(5, 4)));
//! ```

pub mod board;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use grid_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Occupancy;
pub use food::{place_food, place_food_in};
pub use game_state::{ticks_for_elapsed, GameState};
pub use rng::{RandomSource, SessionRng, SimpleRng};
pub use snapshot::{BoardSize, GameSnapshot, COORDINATE_SYSTEM};
