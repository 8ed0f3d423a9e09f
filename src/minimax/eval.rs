//! Static position evaluation.

use crate::core::{PlayerId, PlayerMap};
use crate::games::dvonn::DvonnState;

/// Scores a position from one player's point of view. Higher is better.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

/// Heuristic for Dvonn.
///
/// While pieces are being placed it rewards staying close to the neutral
/// pieces, since far-away pieces are the first to get cut off later.
/// Once stacks move it is simply the difference in controlled height.
#[derive(Clone, Debug)]
pub struct DvonnEvaluator {
    /// Weight of the neutral-distance term during placement.
    pub distance_weight: f64,
}

impl Default for DvonnEvaluator {
    fn default() -> Self {
        Self { distance_weight: 1.0 }
    }
}

impl DvonnEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_weight(mut self, weight: f64) -> Self {
        self.distance_weight = weight;
        self
    }
}

impl Evaluator<DvonnState> for DvonnEvaluator {
    fn evaluate(&self, state: &DvonnState, player: PlayerId) -> f64 {
        let opponent = player.next(DvonnState::PLAYER_COUNT);

        if state.phase().is_placement() {
            if state.neutral_positions().is_empty() {
                return 0.0;
            }
            let distances = average_neutral_distance(state);
            self.distance_weight * (distances[opponent] - distances[player])
        } else {
            f64::from(state.score(player)) - f64::from(state.score(opponent))
        }
    }
}

/// Average Manhattan distance from each player's pieces to the nearest
/// neutral piece. A player with no pieces (or a board without neutral
/// pieces) averages 0.
#[must_use]
pub fn average_neutral_distance(state: &DvonnState) -> PlayerMap<f64> {
    let mut totals = PlayerMap::with_value(DvonnState::PLAYER_COUNT, 0u32);
    let mut counts = PlayerMap::with_value(DvonnState::PLAYER_COUNT, 0u32);
    let neutrals = state.neutral_positions();

    for (coord, cell) in state.board().iter() {
        let Some(owner) = cell.owner() else { continue };
        let Some(nearest) = neutrals.iter().map(|&n| coord.manhattan(n)).min() else {
            continue;
        };
        totals[owner] += nearest;
        counts[owner] += 1;
    }

    PlayerMap::new(DvonnState::PLAYER_COUNT, |p| {
        if counts[p] == 0 {
            0.0
        } else {
            f64::from(totals[p]) / f64::from(counts[p])
        }
    })
}
