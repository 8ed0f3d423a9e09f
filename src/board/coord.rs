//! Grid coordinates and hexagonal adjacency.
//!
//! The board is stored as a plain rectangle. Hex adjacency is overlaid by
//! treating one diagonal as connected: each cell touches its four
//! orthogonal neighbours plus the up-right and down-left cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A (row, col) position. Signed so that off-grid positions produced by
/// stepping past an edge, or supplied by a caller, are representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// The six hex directions as (d_row, d_col) steps.
pub const HEX_DIRECTIONS: [(i32, i32); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, 1), (1, -1)];

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells in direction `(d_row, d_col)`.
    #[inline]
    #[must_use]
    pub fn offset(self, (d_row, d_col): (i32, i32), distance: i32) -> Self {
        Self::new(self.row + d_row * distance, self.col + d_col * distance)
    }

    /// The six positions adjacent to this one, in `HEX_DIRECTIONS` order.
    /// Positions may lie off the grid.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Coord; 6]> {
        HEX_DIRECTIONS.iter().map(|&dir| self.offset(dir, 1)).collect()
    }

    /// Manhattan distance on the underlying rectangle.
    #[must_use]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_follow_direction_order() {
        let n = Coord::new(2, 5).neighbors();
        assert_eq!(
            n.as_slice(),
            &[
                Coord::new(1, 5),
                Coord::new(3, 5),
                Coord::new(2, 4),
                Coord::new(2, 6),
                Coord::new(1, 6),
                Coord::new(3, 4),
            ]
        );
    }

    #[test]
    fn test_offset_scales_by_distance() {
        let c = Coord::new(2, 2);
        assert_eq!(c.offset((-1, 1), 2), Coord::new(0, 4));
        assert_eq!(c.offset((0, -1), 3), Coord::new(2, -1));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 4)), 7);
        assert_eq!(Coord::new(4, 1).manhattan(Coord::new(1, 3)), 5);
    }
}
