//! Game state module - the rules engine
//!
//! A [`GameState`] is an immutable value. Every operation borrows the current
//! state and returns a fresh one, so earlier values stay valid snapshots and a
//! driver can keep or drop them freely.
//!
//! The engine has no clock. A driver calls [`GameState::advance_tick`] on its
//! own cadence and [`GameState::request_direction`] whenever input arrives;
//! advancing N ticks back to back is the same as advancing them in real time
//! given the same randomness.

use tracing::{debug, trace};

use crate::board::Occupancy;
use crate::food::{place_food, place_food_in};
use crate::rng::RandomSource;
use crate::snapshot::{BoardSize, GameSnapshot};
use crate::types::*;

/// Why a tick ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    Wall,
    Body,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Head first, tail last.
    snake: Vec<Coord>,
    /// Direction applied on the last committed tick.
    direction: Direction,
    /// Direction that will be applied on the next tick.
    next_direction: Direction,
    food: Option<Coord>,
    score: u32,
    mode: Mode,
}

impl GameState {
    /// Start a new game centered on `board`
    ///
    /// The snake spawns with its head on the board center and two segments
    /// trailing to the left, heading right, in mode [`Mode::Idle`].
    /// Boards too small for that snake are rejected.
    pub fn initialize<R>(board: BoardConfig, rng: &mut R) -> Result<Self, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        if !board.fits_initial_snake() {
            return Err(ConfigError::BoardTooSmall {
                cols: board.cols(),
                rows: board.rows(),
            });
        }

        let head = board.center();
        let snake: Vec<Coord> = (0..INITIAL_LENGTH as i32)
            .map(|i| Coord::new(head.x - i, head.y))
            .collect();
        let food = place_food(&snake, board, rng);

        debug!(
            cols = board.cols(),
            rows = board.rows(),
            ?head,
            ?food,
            "game initialized"
        );

        Ok(Self {
            snake,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food,
            score: 0,
            mode: Mode::Idle,
        })
    }

    /// Build a state from raw parts
    ///
    /// Intended for harnesses that need a specific mid-game position. The
    /// caller is responsible for the body/food invariants.
    pub fn from_parts(
        snake: Vec<Coord>,
        direction: Direction,
        next_direction: Direction,
        food: Option<Coord>,
        score: u32,
        mode: Mode,
    ) -> Self {
        Self {
            snake,
            direction,
            next_direction,
            food,
            score,
            mode,
        }
    }

    pub fn snake(&self) -> &[Coord] {
        &self.snake
    }

    pub fn head(&self) -> Option<Coord> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn food(&self) -> Option<Coord> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Buffer a heading for the next tick
    ///
    /// Rejected (state returned unchanged) when the request is absent, when the
    /// game has ended, or when it is the exact opposite of the *current*
    /// direction. An accepted request in [`Mode::Idle`] starts the game; in any
    /// other mode the mode is kept.
    pub fn request_direction(&self, direction: Option<Direction>) -> Self {
        let Some(direction) = direction else {
            trace!("direction request without a direction ignored");
            return self.clone();
        };

        if self.mode.is_terminal() {
            trace!(mode = self.mode.as_str(), "direction request after game end ignored");
            return self.clone();
        }

        if self.direction.is_opposite(direction) {
            trace!(
                current = self.direction.as_str(),
                requested = direction.as_str(),
                "reverse direction rejected"
            );
            return self.clone();
        }

        let mode = if self.mode == Mode::Idle {
            debug!(direction = direction.as_str(), "game started");
            Mode::Running
        } else {
            self.mode
        };

        Self {
            next_direction: direction,
            mode,
            ..self.clone()
        }
    }

    /// Toggle between running and paused
    ///
    /// Idle games cannot be paused and ended games stay ended.
    pub fn toggle_pause(&self) -> Self {
        let mode = match self.mode {
            Mode::Running => Mode::Paused,
            Mode::Paused => Mode::Running,
            _ => return self.clone(),
        };
        debug!(from = self.mode.as_str(), to = mode.as_str(), "pause toggled");
        Self {
            mode,
            ..self.clone()
        }
    }

    /// Advance the game by one cell
    ///
    /// No-op unless the mode is [`Mode::Running`]. A move off the board or into
    /// the body (the current tail cell excluded, since it vacates this tick)
    /// ends the game with everything but the mode left as it was. Eating grows
    /// the body by one, scores one point and respawns food, drawing once from
    /// `rng`; a full board wins the game.
    pub fn advance_tick<R>(&self, board: BoardConfig, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        if self.mode != Mode::Running {
            return self.clone();
        }
        let Some(head) = self.head() else {
            return self.clone();
        };

        let direction = self.next_direction;
        let next_head = head.offset(direction);

        if !board.contains(next_head) {
            return self.collide(Collision::Wall, next_head);
        }

        let tail_index = self.snake.len() - 1;
        let body = Occupancy::from_segments(board, &self.snake[..tail_index]);
        if body.contains(next_head) {
            return self.collide(Collision::Body, next_head);
        }

        let will_eat = self.food == Some(next_head);

        let mut snake = Vec::with_capacity(self.snake.len() + 1);
        snake.push(next_head);
        snake.extend_from_slice(&self.snake[..tail_index]);

        let mut score = self.score;
        let mut food = self.food;
        if will_eat {
            snake.push(self.snake[tail_index]);
            score += 1;

            let mut occupied = body;
            occupied.insert(next_head);
            occupied.insert(self.snake[tail_index]);
            food = place_food_in(&occupied, rng);
            debug!(score, len = snake.len(), ?food, "food eaten");
        }

        let mode = if food.is_some() {
            Mode::Running
        } else {
            debug!(score, len = snake.len(), "board filled, game won");
            Mode::Won
        };

        Self {
            snake,
            direction,
            next_direction: direction,
            food,
            score,
            mode,
        }
    }

    /// Advance up to `ticks` ticks back to back
    ///
    /// At least one tick is attempted even for `ticks == 0`. Stops early as
    /// soon as a tick leaves [`Mode::Running`], so the result is the first
    /// game-over or won state reached; ticks after that are never applied and
    /// draw no randomness. Non-running states are returned unchanged.
    pub fn advance_ticks<R>(&self, board: BoardConfig, ticks: u32, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        if self.mode != Mode::Running {
            return self.clone();
        }

        let mut state = self.clone();
        for _ in 0..ticks.max(1) {
            state = state.advance_tick(board, rng);
            if state.mode != Mode::Running {
                break;
            }
        }
        trace!(ticks, mode = state.mode.as_str(), "fast-forwarded");
        state
    }

    /// Dispatch a driver action
    ///
    /// `Restart` starts a fresh game on `board`, which is the only way this
    /// can fail.
    pub fn apply_action<R>(
        &self,
        action: GameAction,
        board: BoardConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        match action {
            GameAction::Turn(dir) => Ok(self.request_direction(Some(dir))),
            GameAction::Pause => Ok(self.toggle_pause()),
            GameAction::Restart => Self::initialize(board, rng),
        }
    }

    /// Serializable view of the whole state
    pub fn snapshot(&self, board: BoardConfig) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(board, &mut s);
        s
    }

    /// Write the state into an existing snapshot, reusing its body buffer
    pub fn snapshot_into(&self, board: BoardConfig, out: &mut GameSnapshot) {
        out.board = BoardSize {
            cols: board.cols(),
            rows: board.rows(),
        };
        out.mode = self.mode;
        out.direction = self.direction;
        out.next_direction = self.next_direction;
        out.snake.clear();
        out.snake.extend_from_slice(&self.snake);
        out.food = self.food;
        out.score = self.score;
        out.length = self.snake.len();
        out.playable = self.mode == Mode::Running;
    }

    fn collide(&self, cause: Collision, at: Coord) -> Self {
        debug!(?cause, ?at, score = self.score, "game over");
        Self {
            mode: Mode::GameOver,
            ..self.clone()
        }
    }
}

/// Number of ticks covered by `elapsed_ms` at `tick_ms` per tick, never less
/// than one
///
/// ```
/// use grid_snake_core::game_state::ticks_for_elapsed;
///
/// assert_eq!(ticks_for_elapsed(0, 140), 1);
/// assert_eq!(ticks_for_elapsed(700, 140), 5);
/// assert_eq!(ticks_for_elapsed(839, 140), 5);
/// ```
pub fn ticks_for_elapsed(elapsed_ms: u64, tick_ms: u64) -> u32 {
    let steps = elapsed_ms / tick_ms.max(1);
    u32::try_from(steps).unwrap_or(u32::MAX).max(1)
}
