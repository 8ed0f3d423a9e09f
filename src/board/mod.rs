//! Board model: coordinates, cells, the grid, and island detection.
//!
//! Pure data plus the connectivity analyzer. Rules live in
//! `games::dvonn`.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod islands;

pub use cell::{Cell, Occupant};
pub use coord::{Coord, HEX_DIRECTIONS};
pub use grid::{Board, BoardError};
pub use islands::{find_islands, Island};
