//! Fixed-depth, full-width minimax.

use tracing::debug;

use super::eval::Evaluator;
use crate::core::{GameRng, PlayerId};
use crate::rules::{SearchError, SearchState};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Minimax player over any [`SearchState`].
///
/// Every root action is applied to a clone and scored by a minimax
/// recursion of `depth` further plies, so `depth = 0` is a greedy
/// one-ply bot. Nodes where the evaluating player acts maximize, all
/// others minimize. No pruning.
///
/// Ties between equally scored root actions are broken by a coin flip
/// each time a tie is met, not by taking the first one.
#[derive(Clone, Debug)]
pub struct MinimaxBot<E> {
    evaluator: E,
    depth: u32,
    rng: GameRng,
    evaluations: u64,
}

impl<E> MinimaxBot<E> {
    pub fn new(evaluator: E, depth: u32) -> Self {
        Self {
            evaluator,
            depth,
            rng: GameRng::new(DEFAULT_SEED),
            evaluations: 0,
        }
    }

    /// Reseed the tie-break stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// Use an existing stream for tie-breaks.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Static evaluations performed by the last `choose_action`.
    #[must_use]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Pick an action for the player to move in `state`.
    ///
    /// `state` is never mutated; every line is explored on a clone.
    pub fn choose_action<S>(&mut self, state: &S) -> Result<S::Action, SearchError>
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        self.evaluations = 0;
        if state.is_terminal() {
            return Err(SearchError::NoLegalActions);
        }

        let player = state.current_player();
        let actions = state.legal_actions();
        let root_count = actions.len();
        let mut best: Option<(S::Action, f64)> = None;

        for action in actions {
            let mut child = state.clone();
            child.apply_action(&action);
            let score = self.minimax(&child, player, self.depth);

            let replace = match &best {
                None => true,
                Some((_, best_score)) => {
                    score > *best_score || (score == *best_score && self.rng.gen_bool(0.5))
                }
            };
            if replace {
                best = Some((action, score));
            }
        }

        let (action, score) = best.ok_or(SearchError::NoLegalActions)?;
        debug!(
            depth = self.depth,
            root_actions = root_count,
            evaluations = self.evaluations,
            score,
            action = ?action,
            "minimax decision"
        );
        Ok(action)
    }

    fn minimax<S>(&mut self, state: &S, player: PlayerId, depth: u32) -> f64
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        let actions = if depth == 0 || state.is_terminal() {
            Vec::new()
        } else {
            state.legal_actions()
        };
        if actions.is_empty() {
            self.evaluations += 1;
            return self.evaluator.evaluate(state, player);
        }

        let maximize = state.current_player() == player;
        let mut best = if maximize {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in &actions {
            let mut child = state.clone();
            child.apply_action(action);
            let score = self.minimax(&child, player, depth - 1);
            best = if maximize {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
