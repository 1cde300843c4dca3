//! Word-search grid generation
//!
//! Places target words horizontally or vertically and pads the rest of the
//! grid with random filler letters.

mod engine;

pub use engine::{GeneratedGrid, GridGenerator};

/// Letters used to pad cells that no word occupies
pub const FILLER_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
