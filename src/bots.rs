//! One-call bot entry points for Dvonn.
//!
//! Both take the caller's state by reference and search on clones, so the
//! game being played is never touched. The unseeded variants draw a fresh
//! seed from the OS.

use crate::core::GameRng;
use crate::games::dvonn::{Action, DvonnState};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::minimax::{DvonnEvaluator, MinimaxBot};
use crate::rules::SearchError;

/// Minimax with the Dvonn heuristic, `depth` plies below each root action.
pub fn run_minimax_bot(state: &DvonnState, depth: u32) -> Result<Action, SearchError> {
    MinimaxBot::new(DvonnEvaluator::new(), depth)
        .with_rng(GameRng::from_entropy())
        .choose_action(state)
}

/// [`run_minimax_bot`] with a fixed tie-break seed.
pub fn run_minimax_bot_seeded(
    state: &DvonnState,
    depth: u32,
    seed: u64,
) -> Result<Action, SearchError> {
    MinimaxBot::new(DvonnEvaluator::new(), depth)
        .with_seed(seed)
        .choose_action(state)
}

/// Monte Carlo tree search for `budget_seconds` of wall-clock time.
pub fn run_monte_carlo_bot(state: &DvonnState, budget_seconds: f64) -> Result<Action, SearchError> {
    run_monte_carlo_bot_seeded(state, budget_seconds, GameRng::from_entropy().seed())
}

/// [`run_monte_carlo_bot`] with a fixed seed. Timing still decides how many
/// iterations run, so only the per-iteration choices are reproducible.
pub fn run_monte_carlo_bot_seeded(
    state: &DvonnState,
    budget_seconds: f64,
    seed: u64,
) -> Result<Action, SearchError> {
    let config = MCTSConfig::default()
        .with_time_budget(budget_seconds)
        .with_seed(seed);
    MCTSSearch::new(config).search(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn midgame() -> DvonnState {
        DvonnState::random_setup(&GameConfig::default(), &mut GameRng::new(5))
    }

    #[test]
    fn test_minimax_bot_returns_legal_action() {
        let state = DvonnState::new();
        let action = run_minimax_bot(&state, 0).unwrap();
        assert!(state.is_legal(&action));
    }

    #[test]
    fn test_minimax_bot_seeded_is_reproducible() {
        let state = midgame();
        let a = run_minimax_bot_seeded(&state, 1, 11).unwrap();
        let b = run_minimax_bot_seeded(&state, 1, 11).unwrap();
        assert_eq!(a, b);
        assert!(state.is_legal(&a));
    }

    #[test]
    fn test_monte_carlo_bot_minimal_budget() {
        let state = midgame();
        let before = state.clone();

        let action = run_monte_carlo_bot(&state, 0.0).unwrap();
        assert!(state.is_legal(&action));
        assert_eq!(state, before);
    }

    #[test]
    fn test_monte_carlo_bot_rejects_bad_budget() {
        let state = midgame();
        assert_eq!(
            run_monte_carlo_bot_seeded(&state, -0.5, 1),
            Err(SearchError::InvalidBudget(-0.5))
        );
    }

    #[test]
    fn test_bots_on_finished_game() {
        let mut state = midgame();
        let mut rng = GameRng::new(3);
        while !state.is_game_over() {
            let action = rng.choose(state.legal_actions()).cloned().unwrap();
            state.apply_action(&action);
        }

        assert_eq!(run_minimax_bot(&state, 1), Err(SearchError::NoLegalActions));
        assert_eq!(run_monte_carlo_bot(&state, 0.01), Err(SearchError::NoLegalActions));
    }
}
