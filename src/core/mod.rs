//! Core engine types: players, RNG, configuration.
//!
//! Nothing in here knows about Dvonn's rules; the search code and the game
//! both build on these.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
