//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, making them usable in any context
//! (rules engine, terminal rendering, debug dumps).
//!
//! # Coordinate System
//!
//! - **Origin**: (0, 0) is the top-left cell
//! - **x** grows to the right, **y** grows downward
//! - A board spans `x` in `[0, cols)` and `y` in `[0, rows)`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLS` | 16 | Board width of the terminal runner |
//! | `DEFAULT_ROWS` | 16 | Board height of the terminal runner |
//! | `TICK_MS` | 140 | Interval between ticks |
//! | `INITIAL_LENGTH` | 3 | Snake length at creation |
//!
//! # Examples
//!
//! ```
//! use grid_snake_types::{BoardConfig, Coord, Direction};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_opposite(Direction::Down));
//!
//! // Step a coordinate
//! assert_eq!(Coord::new(4, 4).offset(dir), Coord::new(4, 3));
//!
//! // Validate a board
//! let board = BoardConfig::new(8, 8).unwrap();
//! assert_eq!(board.center(), Coord::new(4, 4));
//! assert!(BoardConfig::new(0, 8).is_err());
//! assert!(!BoardConfig::new(1, 1).unwrap().fits_initial_snake());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board width in cells
pub const DEFAULT_COLS: u16 = 16;

/// Default board height in cells
pub const DEFAULT_ROWS: u16 = 16;

/// Default interval between ticks in milliseconds
pub const TICK_MS: u64 = 140;

/// Snake length at creation
pub const INITIAL_LENGTH: usize = 3;

/// Smallest width that hosts the initial snake (head at `cols / 2`, tail at `cols / 2 - 2`)
pub const MIN_COLS: u16 = 4;

/// Smallest height that hosts the initial snake
pub const MIN_ROWS: u16 = 1;

/// Board configuration rejected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: board dimensions must be positive (got {cols}x{rows})")]
    ZeroDimension { cols: u16, rows: u16 },
    #[error(
        "invalid configuration: {cols}x{rows} board cannot host the initial snake \
         (need at least {}x{})",
        MIN_COLS,
        MIN_ROWS
    )]
    BoardTooSmall { cols: u16, rows: u16 },
}

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four unit movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)` with +y pointing down
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Two directions are opposite iff their vectors sum to zero
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_snake_types::Direction;
    ///
    /// assert!(Direction::Left.is_opposite(Direction::Right));
    /// assert!(!Direction::Left.is_opposite(Direction::Up));
    /// assert!(!Direction::Left.is_opposite(Direction::Left));
    /// ```
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (ax, ay) = self.vector();
        let (bx, by) = other.vector();
        ax + bx == 0 && ay + by == 0
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or WASD letters. Anything else is `None`, which the
    /// engine treats as an absent request.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("W"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Coarse lifecycle phase of a game
///
/// `Idle -> Running -> (Paused <-> Running) -> {GameOver, Won}`.
/// `GameOver` and `Won` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Idle,
    Running,
    Paused,
    GameOver,
    Won,
}

impl Mode {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Mode::GameOver | Mode::Won)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Running => "running",
            Mode::Paused => "paused",
            Mode::GameOver => "gameover",
            Mode::Won => "won",
        }
    }
}

/// Board dimensions, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardConfig {
    cols: u16,
    rows: u16,
}

impl BoardConfig {
    /// Validate dimensions; both must be positive
    ///
    /// Whether the board can host the initial snake is checked when a game
    /// is initialized on it, see [`BoardConfig::fits_initial_snake`].
    pub fn new(cols: u16, rows: u16) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::ZeroDimension { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    pub fn fits_initial_snake(&self) -> bool {
        self.cols >= MIN_COLS && self.rows >= MIN_ROWS
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Check if a coordinate lies inside `[0, cols) x [0, rows)`
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.cols as i32 && c.y < self.rows as i32
    }

    /// Spawn cell of the snake head
    pub fn center(&self) -> Coord {
        Coord::new((self.cols / 2) as i32, (self.rows / 2) as i32)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// Driver-level actions applied to a game state
///
/// These actions are produced by human input and dispatched through the
/// engine's `apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a fresh game on the same board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(dir) => dir.as_str(),
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_vectors_are_unit() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = dir.vector();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn board_config_rejects_small_boards() {
        assert_eq!(
            BoardConfig::new(0, 5),
            Err(ConfigError::ZeroDimension { cols: 0, rows: 5 })
        );
        assert!(!BoardConfig::new(1, 1).unwrap().fits_initial_snake());
        assert!(!BoardConfig::new(3, 10).unwrap().fits_initial_snake());
        assert!(BoardConfig::new(4, 1).unwrap().fits_initial_snake());
    }

    #[test]
    fn board_contains_respects_half_open_bounds() {
        let board = BoardConfig::new(8, 6).unwrap();
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(7, 5)));
        assert!(!board.contains(Coord::new(8, 0)));
        assert!(!board.contains(Coord::new(0, 6)));
        assert!(!board.contains(Coord::new(-1, 0)));
        assert_eq!(board.cell_count(), 48);
    }

    #[test]
    fn config_error_message_mentions_invalid_configuration() {
        let err = BoardConfig::new(0, 0).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
        let err = ConfigError::BoardTooSmall { cols: 1, rows: 1 };
        assert!(err.to_string().contains("1x1 board"));
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(Mode::GameOver.as_str(), "gameover");
        assert!(Mode::Won.is_terminal());
        assert!(!Mode::Paused.is_terminal());
    }
}
