//! Depth-limited minimax with a pluggable evaluator.
//!
//! ```rust
//! use rust_dvonn::games::dvonn::DvonnState;
//! use rust_dvonn::minimax::{DvonnEvaluator, MinimaxBot};
//!
//! let state = DvonnState::new();
//! let mut bot = MinimaxBot::new(DvonnEvaluator::new(), 0).with_seed(3);
//! let action = bot.choose_action(&state).unwrap();
//! assert!(state.is_legal(&action));
//! ```

pub mod bot;
pub mod eval;

pub use bot::MinimaxBot;
pub use eval::{average_neutral_distance, DvonnEvaluator, Evaluator};
