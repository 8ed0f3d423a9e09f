//! Per-cell content.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Who controls a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Playable and unoccupied.
    Empty,
    /// Clipped corner. Never playable.
    OutOfBounds,
    /// Stack controlled by a player (its top piece).
    Player(PlayerId),
    /// A lone neutral (Dvonn) piece that no player controls yet.
    Neutral,
}

/// One board cell.
///
/// Invariant: `height == 0` iff `occupant` is `Empty` or `OutOfBounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub occupant: Occupant,
    pub height: u32,
    /// True if a neutral piece is somewhere in this stack.
    pub neutral: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        occupant: Occupant::Empty,
        height: 0,
        neutral: false,
    };

    pub const OUT_OF_BOUNDS: Cell = Cell {
        occupant: Occupant::OutOfBounds,
        height: 0,
        neutral: false,
    };

    /// A freshly placed neutral piece.
    pub const NEUTRAL: Cell = Cell {
        occupant: Occupant::Neutral,
        height: 1,
        neutral: true,
    };

    /// A freshly placed single piece for `player`.
    #[must_use]
    pub const fn piece(player: PlayerId) -> Self {
        Self {
            occupant: Occupant::Player(player),
            height: 1,
            neutral: false,
        }
    }

    /// Holds a player stack or a neutral piece.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self.occupant, Occupant::Player(_) | Occupant::Neutral)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant == Occupant::Empty
    }

    #[inline]
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.occupant == Occupant::OutOfBounds
    }

    /// The controlling player, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self.occupant {
            Occupant::Player(p) => Some(p),
            _ => None,
        }
    }
}
