//! The board grid.
//!
//! A flat `Vec<Cell>` in row-major order. Cloning is a plain deep copy, so
//! a cloned board never aliases the original.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::{Cell, Occupant};
use super::coord::Coord;
use crate::core::{GameConfig, PlayerId, PlayerMap};

/// Why a board built from outside data was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("A {rows}x{cols} board needs {expected} cells, got {actual}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cell {at} belongs to unknown {player}")]
    UnknownPlayer { at: Coord, player: PlayerId },

    #[error("Cell {0} has a height that does not match its occupant")]
    BadHeight(Coord),
}

/// Fixed-size rectangular grid with hex adjacency.
///
/// Deserialization goes through [`Board::validate`], so a decoded board
/// always has one cell per grid position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Board {
            rows: repr.rows,
            cols: repr.cols,
            cells: repr.cells,
        };
        board.validate(GameConfig::PLAYER_COUNT)?;
        Ok(board)
    }
}

impl Board {
    /// Create an empty board with the config's out-of-bounds cells marked.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut board = Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![Cell::EMPTY; config.rows * config.cols],
        };
        for &coord in &config.out_of_bounds {
            if let Some(cell) = board.get_mut(coord) {
                *cell = Cell::OUT_OF_BOUNDS;
            }
        }
        board
    }

    /// Check the shape and every cell of a board that did not come from
    /// [`Board::new`].
    pub fn validate(&self, player_count: usize) -> Result<(), BoardError> {
        let expected = self.rows.checked_mul(self.cols).filter(|&n| n <= i32::MAX as usize);
        if expected != Some(self.cells.len()) {
            return Err(BoardError::CellCount {
                rows: self.rows,
                cols: self.cols,
                expected: expected.unwrap_or(usize::MAX),
                actual: self.cells.len(),
            });
        }

        for (at, cell) in self.iter() {
            if let Occupant::Player(player) = cell.occupant {
                if player.index() >= player_count {
                    return Err(BoardError::UnknownPlayer { at, player });
                }
            }
            if cell.is_occupied() == (cell.height == 0) {
                return Err(BoardError::BadHeight(at));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `coord` lies on the rectangle (out-of-bounds cells included).
    #[inline]
    #[must_use]
    pub fn in_grid(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.col >= 0 && (coord.row as usize) < self.rows && (coord.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_grid(coord)
            .then(|| coord.row as usize * self.cols + coord.col as usize)
    }

    /// Cell at `coord`, or `None` if off the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// True if `coord` is on the grid and holds a stack.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_occupied)
    }

    /// Every grid position in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Coord::new((i / cols) as i32, (i % cols) as i32))
    }

    /// (position, cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.coords().zip(self.cells.iter())
    }

    /// Positions of all out-of-bounds cells.
    #[must_use]
    pub fn out_of_bounds(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_out_of_bounds())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Sum of stack heights controlled by each player.
    #[must_use]
    pub fn stack_totals(&self, player_count: usize) -> PlayerMap<u32> {
        let mut totals = PlayerMap::with_value(player_count, 0);
        for cell in &self.cells {
            if let Some(owner) = cell.owner() {
                totals[owner] += cell.height;
            }
        }
        totals
    }

    /// Positions of cells controlled by `player`.
    pub fn stacks_of(&self, player: PlayerId) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(move |(_, cell)| cell.owner() == Some(player))
            .map(|(coord, _)| coord)
    }

    /// True if all six neighbours are on the grid and occupied.
    #[must_use]
    pub fn is_surrounded(&self, coord: Coord) -> bool {
        coord.neighbors().iter().all(|&n| self.is_occupied(n))
    }
}
