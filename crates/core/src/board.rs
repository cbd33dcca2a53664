//! Board module - occupancy grid over a fixed-size board
//!
//! The grid is a flat row-major array of flags (`y * cols + x`), one per cell.
//! Membership is a constant-time index lookup and free-cell enumeration walks
//! the array in row-major order, so results never depend on hash ordering.
//! Coordinates: (x, y) where x ranges `0..cols` (left to right), y ranges
//! `0..rows` (top to bottom).

use crate::types::{BoardConfig, Coord};

/// Cells covered by the snake's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    board: BoardConfig,
    /// Flat array of flags, row-major order (y * cols + x)
    cells: Vec<bool>,
    filled: usize,
}

impl Occupancy {
    /// Create an empty grid for `board`
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            cells: vec![false; board.cell_count()],
            filled: 0,
        }
    }

    /// Build a grid from a list of segments
    ///
    /// Segments outside the board are ignored.
    pub fn from_segments<'a>(
        board: BoardConfig,
        segments: impl IntoIterator<Item = &'a Coord>,
    ) -> Self {
        let mut occ = Self::new(board);
        for &c in segments {
            occ.insert(c);
        }
        occ
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.board.contains(c) {
            return None;
        }
        Some((c.y as usize) * (self.board.cols() as usize) + (c.x as usize))
    }

    pub fn board(&self) -> BoardConfig {
        self.board
    }

    /// Mark a cell as occupied
    /// Returns false if out of bounds
    pub fn insert(&mut self, c: Coord) -> bool {
        match self.index(c) {
            Some(idx) => {
                if !self.cells[idx] {
                    self.cells[idx] = true;
                    self.filled += 1;
                }
                true
            }
            None => false,
        }
    }

    /// Check if a cell is occupied (out-of-bounds cells never are)
    pub fn contains(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|idx| self.cells[idx])
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Number of free cells
    pub fn free_count(&self) -> usize {
        self.cells.len() - self.filled
    }

    /// Check if every cell of the board is occupied
    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }

    /// Free cells in row-major order (y outer, x inner, both ascending)
    pub fn free_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.board.cols() as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| !occupied)
            .map(move |(idx, _)| Coord::new((idx % cols) as i32, (idx / cols) as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cols: u16, rows: u16) -> BoardConfig {
        BoardConfig::new(cols, rows).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let occ = Occupancy::new(board(4, 3));
        assert!(occ.is_empty());
        assert_eq!(occ.free_count(), 12);
        assert!(!occ.contains(Coord::new(0, 0)));
    }

    #[test]
    fn test_insert_ignores_out_of_bounds() {
        let mut occ = Occupancy::new(board(4, 3));
        assert!(!occ.insert(Coord::new(-1, 0)));
        assert!(!occ.insert(Coord::new(4, 0)));
        assert!(!occ.insert(Coord::new(0, 3)));
        assert!(occ.is_empty());
        assert!(!occ.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn test_duplicate_insert_counts_once() {
        let mut occ = Occupancy::new(board(4, 3));
        assert!(occ.insert(Coord::new(1, 1)));
        assert!(occ.insert(Coord::new(1, 1)));
        assert_eq!(occ.len(), 1);
        assert_eq!(occ.free_count(), 11);
    }

    #[test]
    fn test_free_cells_row_major() {
        let occ = Occupancy::from_segments(
            board(4, 2),
            &[Coord::new(0, 0), Coord::new(2, 0), Coord::new(1, 1)],
        );
        let free: Vec<Coord> = occ.free_cells().collect();
        assert_eq!(
            free,
            vec![
                Coord::new(1, 0),
                Coord::new(3, 0),
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_is_full() {
        let b = board(4, 1);
        let cells: Vec<Coord> = (0..4).map(|x| Coord::new(x, 0)).collect();
        let occ = Occupancy::from_segments(b, &cells);
        assert!(occ.is_full());
        assert_eq!(occ.free_cells().count(), 0);
    }
}
