use serde::{Deserialize, Serialize};

use crate::types::{Coord, Direction, Mode};

/// Coordinate convention stamped into every snapshot
pub const COORDINATE_SYSTEM: &str = "origin=(0,0) top-left, +x right, +y down";

/// Board dimensions as they appear in the dump (`"board": {"cols", "rows"}`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub cols: u16,
    pub rows: u16,
}

/// Full observable state of a game, for harnesses and renderers
///
/// Keys serialize in camelCase (`coordinateSystem`, `nextDirection`) with the
/// dimensions nested under `board`, so text harnesses can read this dump and
/// a browser build's `render_game_to_text` output the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub coordinate_system: String,
    pub board: BoardSize,
    pub mode: Mode,
    pub direction: Direction,
    pub next_direction: Direction,
    /// Head first.
    pub snake: Vec<Coord>,
    pub food: Option<Coord>,
    pub score: u32,
    pub length: usize,
    pub playable: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.coordinate_system.clear();
        self.coordinate_system.push_str(COORDINATE_SYSTEM);
        self.board = BoardSize::default();
        self.mode = Mode::Idle;
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.snake.clear();
        self.food = None;
        self.score = 0;
        self.length = 0;
        self.playable = false;
    }

    pub fn head(&self) -> Option<Coord> {
        self.snake.first().copied()
    }

    /// Check if `c` is covered by a body segment
    pub fn is_snake(&self, c: Coord) -> bool {
        self.snake.contains(&c)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            coordinate_system: String::new(),
            board: BoardSize::default(),
            mode: Mode::Idle,
            direction: Direction::Right,
            next_direction: Direction::Right,
            snake: Vec::new(),
            food: None,
            score: 0,
            length: 0,
            playable: false,
        };
        s.clear();
        s
    }
}
