//! The seam between games and searchers.
//!
//! Games implement `SearchState` to expose:
//! - Whose turn it is and which actions are legal
//! - How actions modify state
//! - Win/loss/draw at the end
//!
//! The searchers call into `SearchState` but never interpret
//! game-specific concepts directly.

pub mod engine;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;

pub use engine::{GameResult, SearchState};
pub use error::SearchError;
