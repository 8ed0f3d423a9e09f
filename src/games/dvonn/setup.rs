//! Random setups.
//!
//! Plays uniformly random placements until the movement phase is reached,
//! giving a ready-to-play middle-game position.

use tracing::debug;

use super::state::DvonnState;
use crate::core::{GameConfig, GameRng};

impl DvonnState {
    /// A game whose placement phases were filled in at random.
    #[must_use]
    pub fn random_setup(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut state = Self::with_config(config);
        let mut placed = 0u32;

        while state.phase().is_placement() {
            let Some(&action) = rng.choose(state.legal_actions()) else {
                break;
            };
            state.apply_action(&action);
            placed += 1;
        }

        debug!(placed, phase = ?state.phase(), "random setup complete");
        state
    }
}
