//! A tiny game for exercising the searchers in unit tests.

use super::{GameResult, SearchState};
use crate::core::PlayerId;

/// Single-pile Nim: take 1 to 3 stones, whoever takes the last stone wins.
/// Positions with a multiple of 4 stones are lost for the player to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nim {
    pub stones: u32,
    pub to_move: PlayerId,
    pub last_mover: Option<PlayerId>,
}

impl Nim {
    pub fn new(stones: u32) -> Self {
        Self {
            stones,
            to_move: PlayerId::new(0),
            last_mover: None,
        }
    }
}

impl SearchState for Nim {
    type Action = u32;

    fn player_count(&self) -> usize {
        2
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn is_terminal(&self) -> bool {
        self.stones == 0
    }

    fn result(&self) -> Option<GameResult> {
        if self.stones == 0 {
            self.last_mover.map(GameResult::Winner)
        } else {
            None
        }
    }

    fn legal_actions(&self) -> Vec<u32> {
        (1..=self.stones.min(3)).collect()
    }

    fn apply_action(&mut self, take: &u32) {
        if *take == 0 || *take > self.stones.min(3) {
            return;
        }
        self.stones -= take;
        self.last_mover = Some(self.to_move);
        self.to_move = self.to_move.next(2);
    }
}
