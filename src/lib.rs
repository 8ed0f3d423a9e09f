//! # rust-dvonn
//!
//! A Dvonn rules engine plus two game-agnostic search bots.
//!
//! ## Design Principles
//!
//! 1. **Search knows nothing about Dvonn**: minimax and MCTS are written
//!    once against the [`SearchState`] trait. Any deterministic,
//!    perfect-information game that implements it can use them.
//!
//! 2. **Value-type state**: `DvonnState::clone()` is a deep copy. Bots
//!    search on clones and never mutate the caller's game.
//!
//! 3. **Explicit randomness**: every random choice draws from a seeded
//!    [`GameRng`], so tests replay exactly.
//!
//! ## Modules
//!
//! - `core`: players, RNG, board configuration
//! - `board`: coordinates, cells, the grid and its connectivity analysis
//! - `rules`: the `SearchState` trait and game results
//! - `games`: the Dvonn state machine and move generation
//! - `mcts`: Monte Carlo Tree Search
//! - `minimax`: fixed-depth minimax with pluggable evaluation
//! - `bots`: one-call entry points for both bots
//!
//! ## Example
//!
//! ```rust
//! use rust_dvonn::{run_minimax_bot_seeded, DvonnState};
//!
//! let mut state = DvonnState::new();
//! let action = run_minimax_bot_seeded(&state, 0, 1).unwrap();
//! state.try_apply_action(&action).unwrap();
//! assert_eq!(state.last_action(), Some(action));
//! ```

pub mod board;
pub mod bots;
pub mod core;
pub mod games;
pub mod mcts;
pub mod minimax;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};

pub use crate::board::{find_islands, Board, BoardError, Cell, Coord, Island, Occupant};

pub use crate::rules::{GameResult, SearchError, SearchState};

pub use crate::games::dvonn::{Action, ActionError, DvonnState, Phase, StateError};

pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::minimax::{DvonnEvaluator, Evaluator, MinimaxBot};

pub use crate::bots::{
    run_minimax_bot, run_minimax_bot_seeded, run_monte_carlo_bot, run_monte_carlo_bot_seeded,
};
