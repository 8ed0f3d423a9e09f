//! Monte Carlo Tree Search over any [`SearchState`](crate::rules::SearchState).
//!
//! ## Overview
//!
//! Each call to [`MCTSSearch::search`] builds a fresh arena tree rooted at
//! a clone of the given state, then repeats four steps until the time
//! budget runs out:
//!
//! 1. **Selection**: descend by UCB1, scored for the player acting at
//!    each parent, until a node with untried actions or a terminal node
//! 2. **Expansion**: clone the node's state and apply one untried action
//! 3. **Simulation**: play uniformly random actions to the end
//! 4. **Backpropagation**: add the per-player values along the path
//!
//! The most visited root child wins. The tree is dropped on return.
//!
//! ## Usage
//!
//! ```rust
//! use rust_dvonn::games::dvonn::DvonnState;
//! use rust_dvonn::mcts::{MCTSConfig, MCTSSearch};
//!
//! let state = DvonnState::new();
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(7));
//!
//! let action = search.search_iterations(&state, 200).unwrap();
//! assert!(state.is_legal(&action));
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
