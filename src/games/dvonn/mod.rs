//! Dvonn: place neutral pieces, place your own, then stack and capture.
//!
//! Two players share a 49-cell hexagonal board. Stacks move exactly as
//! far as they are tall and must land on another stack; anything cut off
//! from the neutral pieces is removed. When nobody can move, the player
//! controlling the most pieces wins.

mod action;
mod error;
pub mod movegen;
mod setup;
mod state;

pub use action::Action;
pub use error::{ActionError, StateError};
pub use state::{DvonnState, Phase};
