//! Legal-action generation.
//!
//! Pure functions of the board. `DvonnState` calls these after every
//! mutation and caches the result.

use super::action::Action;
use super::state::Phase;
use crate::board::{Board, Coord, HEX_DIRECTIONS};
use crate::core::PlayerId;

/// Every empty cell, row-major. Used by both placement phases.
#[must_use]
pub fn placement_actions(board: &Board) -> Vec<Action> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(coord, _)| Action::place(coord))
        .collect()
}

/// Moves for the stack at `from`, ignoring whose stack it is.
///
/// A stack of height `h` jumps exactly `h` cells in one of the six hex
/// directions and must land on an occupied cell.
#[must_use]
pub fn moves_from(board: &Board, from: Coord) -> Vec<Action> {
    let height = match board.get(from) {
        Some(cell) if cell.is_occupied() => cell.height as i32,
        _ => return Vec::new(),
    };

    HEX_DIRECTIONS
        .iter()
        .map(|&dir| from.offset(dir, height))
        .filter(|&to| board.is_occupied(to))
        .map(|to| Action::movement(from, to))
        .collect()
}

/// All moves for `player`. Stacks with six occupied neighbours cannot move.
#[must_use]
pub fn movement_actions(board: &Board, player: PlayerId) -> Vec<Action> {
    let mut actions = Vec::new();
    for from in board.stacks_of(player) {
        if board.is_surrounded(from) {
            continue;
        }
        actions.extend(moves_from(board, from));
    }
    actions
}

/// Legal actions for `player` in `phase`.
#[must_use]
pub fn legal_actions(board: &Board, phase: Phase, player: PlayerId) -> Vec<Action> {
    match phase {
        Phase::PlaceNeutralPieces | Phase::PlacePieces => placement_actions(board),
        Phase::MovePieces => movement_actions(board, player),
        Phase::GameOver => Vec::new(),
    }
}
