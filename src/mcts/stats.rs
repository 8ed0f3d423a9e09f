//! Per-search counters for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Nodes added to the tree.
    pub nodes_expanded: u32,

    /// Rollouts played.
    pub simulations: u32,

    /// Deepest node created.
    pub max_depth: u16,

    /// Wall-clock time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second of wall-clock time.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        Self::rate(self.iterations, self.time_us)
    }

    /// Rollouts per second of wall-clock time.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        Self::rate(self.simulations, self.time_us)
    }

    /// Fraction of iterations that grew the tree.
    #[must_use]
    pub fn expansion_rate(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.iterations as f64
        }
    }

    fn rate(count: u32, time_us: u64) -> f64 {
        if time_us == 0 {
            0.0
        } else {
            count as f64 / (time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.simulations, 0);
        assert_eq!(stats.iterations_per_second(), 0.0);
        assert_eq!(stats.expansion_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = SearchStats {
            iterations: 1000,
            simulations: 500,
            nodes_expanded: 250,
            time_us: 500_000,
            ..SearchStats::default()
        };

        assert_eq!(stats.iterations_per_second(), 2000.0);
        assert_eq!(stats.simulations_per_second(), 1000.0);
        assert_eq!(stats.expansion_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.max_depth = 7;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.iterations = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
