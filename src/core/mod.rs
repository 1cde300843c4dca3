//! Core domain types for the word search
//!
//! Coordinates, placements and the finished letter grid. Everything here is
//! pure and deterministic; randomness only enters through the generator.

mod coord;
mod grid;
mod placement;

pub use coord::Coord;
pub use grid::{Grid, is_grid_letter};
pub use placement::{Orientation, Placement};
