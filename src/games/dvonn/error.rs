//! Reasons an action is rejected.

use thiserror::Error;

use super::action::Action;
use super::state::Phase;
use crate::board::{BoardError, Coord};
use crate::core::PlayerId;

/// Why `DvonnState::try_apply_action` refused an action. The state is
/// unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Game is over")]
    GameOver,

    #[error("A {kind} action is not allowed during {phase:?}")]
    WrongPhase { phase: Phase, kind: &'static str },

    #[error("Coordinate {0} is off the board")]
    OutOfGrid(Coord),

    #[error("Cell {0} is not empty")]
    CellNotEmpty(Coord),

    #[error("Action {0} is not legal")]
    NotLegal(Action),
}

/// Why a position built by `DvonnState::from_board` or decoded from a
/// snapshot was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("{0} is not a seat in a two-player game")]
    UnknownPlayer(PlayerId),

    #[error("Expected {expected} entries in {field}, got {actual}")]
    PlayerCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Neutral positions do not match the board at {0}")]
    NeutralMismatch(Coord),
}
