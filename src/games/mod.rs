//! Game implementations.

pub mod dvonn;
