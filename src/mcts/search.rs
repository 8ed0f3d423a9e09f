//! Core MCTS search algorithm.
//!
//! Plain UCT over a fully observed game: every node owns a cloned state,
//! each iteration expands at most one child and plays one random rollout.
//! The tree lives only for the duration of one call.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::GameRng;
use crate::rules::{SearchError, SearchState};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::{MCTSTree, TreeStats};

/// Main MCTS search context.
///
/// Generic over the searched state type. Owns the configuration and
/// policies; the tree itself is rebuilt on every call and only its
/// statistics survive for inspection.
pub struct MCTSSearch<S: SearchState> {
    /// Search configuration.
    config: MCTSConfig,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy<S>>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy<S>>,

    /// Statistics from the last search.
    stats: SearchStats,

    /// Shape of the last search tree.
    tree_stats: TreeStats,

    /// Root action visit counts from the last search.
    action_visits: Vec<(S::Action, u32)>,
}

impl<S: SearchState + 'static> MCTSSearch<S> {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            config,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
            tree_stats: TreeStats::default(),
            action_visits: Vec::new(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<P: SelectionPolicy<S> + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<P: SimulationPolicy<S> + 'static>(mut self, simulation: P) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run a time-boxed search using `config.time_budget`.
    ///
    /// The clock is checked between iterations only, and at least one
    /// iteration always runs, so a zero budget still yields a legal action.
    /// `config.max_iterations`, if set, stops the search earlier.
    pub fn search(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let budget = Duration::try_from_secs_f64(self.config.time_budget)
            .map_err(|_| SearchError::InvalidBudget(self.config.time_budget))?;
        let cap = self.config.max_iterations;
        self.run(state, Some(budget), cap)
    }

    /// Run exactly `iterations` iterations (at least one), ignoring the
    /// clock. With a fixed seed the result is fully reproducible.
    pub fn search_iterations(&mut self, state: &S, iterations: u32) -> Result<S::Action, SearchError> {
        self.run(state, None, Some(iterations.max(1)))
    }

    fn run(
        &mut self,
        state: &S,
        budget: Option<Duration>,
        cap: Option<u32>,
    ) -> Result<S::Action, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.tree_stats = TreeStats::default();
        self.action_visits.clear();

        if state.is_terminal() {
            return Err(SearchError::NoLegalActions);
        }
        let mut actions = state.legal_actions();
        match actions.len() {
            0 => return Err(SearchError::NoLegalActions),
            1 => {
                let action = actions.swap_remove(0);
                self.action_visits.push((action.clone(), 0));
                return Ok(action);
            }
            _ => {}
        }

        let mut rng = GameRng::new(self.config.seed);
        let mut tree = MCTSTree::with_capacity(state.clone(), self.config.max_nodes.min(4096));

        loop {
            self.iteration(&mut tree, &mut rng);
            self.stats.iterations += 1;

            if cap.is_some_and(|n| self.stats.iterations >= n) {
                break;
            }
            if budget.is_some_and(|b| start.elapsed() >= b) {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.tree_stats = tree.stats();
        self.action_visits = tree.root_visits();

        let best = tree
            .most_visited_child(tree.root())
            .and_then(|id| tree.get(id).action.clone())
            .ok_or(SearchError::NoLegalActions)?;

        debug!(
            iterations = self.stats.iterations,
            simulations = self.stats.simulations,
            nodes = self.tree_stats.node_count,
            elapsed_us = self.stats.time_us,
            action = ?best,
            "mcts search finished"
        );

        Ok(best)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut MCTSTree<S>, rng: &mut GameRng) {
        // === SELECTION ===
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if node.is_terminal() || !node.is_fully_expanded() {
                break;
            }
            match self.selection.select(tree, current, &self.config) {
                Some(child) => current = child,
                None => break,
            }
        }

        // === EXPANSION ===
        // The root may always grow so there is a child to return.
        let can_grow = current == tree.root() || tree.len() < self.config.max_nodes;
        let leaf = if can_grow && !tree.get(current).is_fully_expanded() {
            self.expand(tree, current, rng)
        } else {
            current
        };

        // === SIMULATION ===
        let mut sim_rng = rng.fork();
        let values = self
            .simulation
            .simulate(tree.get(leaf).state.clone(), &mut sim_rng);
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        tree.backpropagate(leaf, &values);
    }

    /// Expand one random untried action of `parent`.
    fn expand(&mut self, tree: &mut MCTSTree<S>, parent: NodeId, rng: &mut GameRng) -> NodeId {
        let node = tree.get_mut(parent);
        let idx = rng.gen_range_usize(0..node.untried.len());
        let action = node.untried.swap_remove(idx);
        let mut state = node.state.clone();
        state.apply_action(&action);

        let child = tree.add_child(parent, action, state);
        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
        child
    }

    /// Get statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the shape of the last search tree.
    #[must_use]
    pub fn tree_stats(&self) -> &TreeStats {
        &self.tree_stats
    }

    /// Root action visit counts from the last search.
    pub fn action_visits(&self) -> &[(S::Action, u32)] {
        &self.action_visits
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
