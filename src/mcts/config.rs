//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Maximum nodes to allocate in the tree.
    /// Once reached, iterations keep simulating from the selected leaf
    /// without growing the tree.
    pub max_nodes: usize,

    /// Random seed for expansion order and rollouts.
    /// Every search restarts the stream from this seed.
    pub seed: u64,

    /// Wall-clock budget per search, in seconds.
    pub time_budget: f64,

    /// Optional hard cap on iterations per search.
    pub max_iterations: Option<u32>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            max_nodes: 100_000,
            seed: 42,
            time_budget: 1.0,
            max_iterations: None,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom time budget in seconds.
    pub fn with_time_budget(mut self, seconds: f64) -> Self {
        self.time_budget = seconds;
        self
    }

    /// Create a new config that stops after `iterations`.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Create a new config with a custom node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}
