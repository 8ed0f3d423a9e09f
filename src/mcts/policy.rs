//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to choose which child to descend into (UCB1)
//! - `SimulationPolicy`: How to run rollouts (uniform random)

use crate::core::{GameRng, PlayerMap};
use crate::rules::SearchState;

use super::config::MCTSConfig;
use super::node::NodeId;
use super::tree::MCTSTree;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to descend into.
pub trait SelectionPolicy<S: SearchState> {
    /// Select a child of `node`. Returns `None` if it has no children.
    fn select(&self, tree: &MCTSTree<S>, node: NodeId, config: &MCTSConfig) -> Option<NodeId>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high value) with exploration (low visits).
/// Formula: Q(a) + c * sqrt(ln(N) / n(a)), where Q is the child's mean
/// value for the player acting at the parent.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl<S: SearchState> SelectionPolicy<S> for UCB1 {
    fn select(&self, tree: &MCTSTree<S>, node: NodeId, config: &MCTSConfig) -> Option<NodeId> {
        let parent = tree.get(node);
        let player = parent.to_move;
        let ln_parent = (parent.visits.max(1) as f64).ln();

        parent
            .children
            .iter()
            .map(|&id| {
                let child = tree.get(id);
                let score = if child.visits == 0 {
                    f64::INFINITY
                } else {
                    child.mean_value(player)
                        + config.exploration_constant
                            * (ln_parent / child.visits as f64).sqrt()
                };
                (id, score)
            })
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf state.
pub trait SimulationPolicy<S: SearchState> {
    /// Play `state` out and return the per-player values at the end.
    fn simulate(&self, state: S, rng: &mut GameRng) -> PlayerMap<f64>;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions until the game is over.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl<S: SearchState> SimulationPolicy<S> for RandomSimulation {
    fn simulate(&self, mut state: S, rng: &mut GameRng) -> PlayerMap<f64> {
        let player_count = state.player_count();

        loop {
            if state.is_terminal() {
                return state.values();
            }

            let actions = state.legal_actions();
            let Some(action) = rng.choose(&actions) else {
                // Stuck without being over; score it as a draw.
                return PlayerMap::with_value(player_count, 1.0 / player_count as f64);
            };
            state.apply_action(action);
        }
    }
}
