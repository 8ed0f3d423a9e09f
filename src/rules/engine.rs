//! The search capability trait.
//!
//! Games implement `SearchState` on their state type; the minimax and
//! MCTS searchers are written once against this trait and know nothing
//! about hex grids, phases, or captures.

use std::fmt::Debug;

use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Per-player value: 1 to the winner, 0 to everyone else, or an even
    /// split of 1 on a draw (0.5 each in a two-player game).
    #[must_use]
    pub fn values(&self, player_count: usize) -> PlayerMap<f64> {
        PlayerMap::new(player_count, |player| match self {
            GameResult::Winner(winner) => {
                if *winner == player {
                    1.0
                } else {
                    0.0
                }
            }
            GameResult::Draw => 1.0 / player_count as f64,
        })
    }
}

/// State of a deterministic, perfect-information, constant-sum game.
///
/// `Clone` must produce a fully independent copy: the searchers mutate
/// clones freely and rely on the original being untouched.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: must be deterministic; actions not in
///   `legal_actions` must leave the state unchanged
/// - `result`: `None` while the game continues
pub trait SearchState: Clone {
    /// Move type.
    type Action: Clone + PartialEq + Debug;

    /// Number of seats.
    fn player_count(&self) -> usize;

    /// Player to act.
    fn current_player(&self) -> PlayerId;

    /// True once the game has ended.
    fn is_terminal(&self) -> bool;

    /// Outcome once terminal, `None` otherwise.
    fn result(&self) -> Option<GameResult>;

    /// Legal actions for the player to act, in a stable order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply `action` in place.
    fn apply_action(&mut self, action: &Self::Action);

    // === Convenience Methods ===

    /// Per-player value vector: the result's values when terminal, all
    /// zeros while the game is running.
    fn values(&self) -> PlayerMap<f64> {
        match self.result() {
            Some(result) if self.is_terminal() => result.values(self.player_count()),
            _ => PlayerMap::with_value(self.player_count(), 0.0),
        }
    }

    /// Winner once terminal. `None` for a running game or a draw.
    fn winner(&self) -> Option<PlayerId> {
        match self.result() {
            Some(GameResult::Winner(p)) => Some(p),
            _ => None,
        }
    }
}
