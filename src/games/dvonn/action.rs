//! Dvonn actions.
//!
//! Serialized in the shape the UI layer exchanges:
//!
//! ```
//! use rust_dvonn::board::Coord;
//! use rust_dvonn::games::dvonn::Action;
//!
//! let json = serde_json::to_string(&Action::place(Coord::new(2, 3))).unwrap();
//! assert_eq!(json, r#"{"kind":"place","row":2,"col":3}"#);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// A placement or a stack move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// Drop a piece on an empty cell (placement phases only).
    Place { row: i32, col: i32 },
    /// Move the stack at `from` onto the stack at `to` (movement phase only).
    Move { from: Coord, to: Coord },
}

impl Action {
    #[must_use]
    pub const fn place(at: Coord) -> Self {
        Action::Place {
            row: at.row,
            col: at.col,
        }
    }

    #[must_use]
    pub const fn movement(from: Coord, to: Coord) -> Self {
        Action::Move { from, to }
    }

    /// Short tag matching the serialized `kind` field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Place { .. } => "place",
            Action::Move { .. } => "move",
        }
    }

    /// The cell a piece lands on: the placement cell or the move target.
    #[must_use]
    pub fn target(&self) -> Coord {
        match *self {
            Action::Place { row, col } => Coord::new(row, col),
            Action::Move { to, .. } => to,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { row, col } => write!(f, "place ({row}, {col})"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_json_shape() {
        let action = Action::movement(Coord::new(1, 2), Coord::new(1, 4));
        let json = serde_json::to_value(action).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "move",
                "from": { "row": 1, "col": 2 },
                "to": { "row": 1, "col": 4 },
            })
        );
    }

    #[test]
    fn test_parse_place_from_ui() {
        let action: Action = serde_json::from_str(r#"{"kind":"place","row":4,"col":0}"#).unwrap();
        assert_eq!(action, Action::place(Coord::new(4, 0)));
        assert_eq!(action.kind(), "place");
        assert_eq!(action.target(), Coord::new(4, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::place(Coord::new(0, 3)).to_string(), "place (0, 3)");
        assert_eq!(
            Action::movement(Coord::new(0, 3), Coord::new(1, 3)).to_string(),
            "move (0, 3) -> (1, 3)"
        );
    }
}
