//! Game configuration.
//!
//! A `GameConfig` fixes the board geometry and the piece supply. The
//! default is the standard Dvonn setup: a 5x11 grid with six clipped
//! corners, 3 neutral (Dvonn) pieces and 23 pieces per player.

use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// Board geometry and piece counts for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows.
    pub rows: usize,

    /// Number of grid columns.
    pub cols: usize,

    /// Cells clipped from the rectangle to give the hexagonal outline.
    /// Marked out-of-bounds at construction and never touched again.
    pub out_of_bounds: Vec<Coord>,

    /// Neutral pieces placed in the first phase.
    pub neutral_pieces: u32,

    /// Pieces each player places in the second phase.
    pub pieces_per_player: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 11,
            out_of_bounds: vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(3, 10),
                Coord::new(4, 9),
                Coord::new(4, 10),
            ],
            neutral_pieces: 3,
            pieces_per_player: 23,
        }
    }
}

impl GameConfig {
    /// Number of players. Dvonn is always a two-player game.
    pub const PLAYER_COUNT: usize = 2;

    /// Create a config with custom grid dimensions and no clipped cells.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.out_of_bounds.clear();
        self
    }

    /// Replace the out-of-bounds cell list.
    #[must_use]
    pub fn with_out_of_bounds(mut self, cells: Vec<Coord>) -> Self {
        self.out_of_bounds = cells;
        self
    }

    #[must_use]
    pub fn with_neutral_pieces(mut self, count: u32) -> Self {
        self.neutral_pieces = count;
        self
    }

    #[must_use]
    pub fn with_pieces_per_player(mut self, count: u32) -> Self {
        self.pieces_per_player = count;
        self
    }

    /// Number of playable (in-bounds) cells.
    #[must_use]
    pub fn playable_cells(&self) -> usize {
        let clipped = self
            .out_of_bounds
            .iter()
            .filter(|c| c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols)
            .count();
        self.rows * self.cols - clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_fills_board_exactly() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 11);
        assert_eq!(config.out_of_bounds.len(), 6);
        assert_eq!(config.playable_cells(), 49);
        assert_eq!(
            config.neutral_pieces + 2 * config.pieces_per_player,
            config.playable_cells() as u32
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_size(3, 4)
            .with_neutral_pieces(1)
            .with_pieces_per_player(2);

        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 4);
        assert!(config.out_of_bounds.is_empty());
        assert_eq!(config.playable_cells(), 12);
        assert_eq!(config.neutral_pieces, 1);
        assert_eq!(config.pieces_per_player, 2);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
