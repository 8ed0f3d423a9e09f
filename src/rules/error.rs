//! Errors shared by the searchers.

use thiserror::Error;

/// Errors that can occur when asking a bot for a move.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Invalid time budget: {0} seconds")]
    InvalidBudget(f64),
}
