//! Connectivity analysis.
//!
//! Partitions occupied cells into maximal hex-connected components
//! ("islands"). The engine clears islands that lost contact with every
//! neutral piece; this module only reports the partition.

use super::coord::Coord;
use super::grid::Board;

/// One connected component of occupied cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Island {
    /// Member cells in discovery order. The first entry is the
    /// row-major-first cell of the island.
    pub cells: Vec<Coord>,
}

impl Island {
    /// True if any member stack carries a neutral piece.
    #[must_use]
    pub fn has_neutral(&self, board: &Board) -> bool {
        self.cells
            .iter()
            .any(|&c| board.get(c).is_some_and(|cell| cell.neutral))
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partition every occupied cell into islands.
///
/// Islands are returned in row-major order of their first cell; each
/// occupied cell appears in exactly one island. Empty, out-of-bounds and
/// off-grid cells are ignored.
#[must_use]
pub fn find_islands(board: &Board) -> Vec<Island> {
    let mut visited = vec![false; board.rows() * board.cols()];
    let visit_idx = |c: Coord| c.row as usize * board.cols() + c.col as usize;
    let mut islands = Vec::new();

    for start in board.coords() {
        if !board.is_occupied(start) || visited[visit_idx(start)] {
            continue;
        }

        let mut cells = Vec::new();
        let mut stack = vec![start];
        visited[visit_idx(start)] = true;

        while let Some(coord) = stack.pop() {
            cells.push(coord);
            for n in coord.neighbors() {
                if board.is_occupied(n) && !visited[visit_idx(n)] {
                    visited[visit_idx(n)] = true;
                    stack.push(n);
                }
            }
        }

        islands.push(Island { cells });
    }

    islands
}
