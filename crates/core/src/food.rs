//! Food placement
//!
//! Free cells are enumerated in row-major order and one of them is chosen with
//! a single draw from the injected [`RandomSource`]. With a fixed source and a
//! fixed body the result is reproducible.

use crate::board::Occupancy;
use crate::rng::{unit_to_index, RandomSource};
use crate::types::{BoardConfig, Coord};

/// Pick a free cell for the next food item
///
/// Returns `None` when the body covers every cell; randomness is not consumed
/// in that case. Otherwise exactly one value is drawn from `rng`.
///
/// # Examples
///
/// ```
/// use grid_snake_core::place_food;
/// use grid_snake_core::types::{BoardConfig, Coord};
///
/// let board = BoardConfig::new(4, 4).unwrap();
/// let snake = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
///
/// // First free cell in row-major order.
/// assert_eq!(place_food(&snake, board, &mut || 0.0), Some(Coord::new(3, 0)));
/// ```
pub fn place_food<R>(snake: &[Coord], board: BoardConfig, rng: &mut R) -> Option<Coord>
where
    R: RandomSource + ?Sized,
{
    let occupied = Occupancy::from_segments(board, snake);
    place_food_in(&occupied, rng)
}

/// Same as [`place_food`] over a prebuilt occupancy grid
pub fn place_food_in<R>(occupied: &Occupancy, rng: &mut R) -> Option<Coord>
where
    R: RandomSource + ?Sized,
{
    let free = occupied.free_count();
    if free == 0 {
        return None;
    }

    let idx = unit_to_index(rng.next_unit(), free);
    occupied.free_cells().nth(idx)
}
