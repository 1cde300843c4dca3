//! Error types for grid construction, word placement and session play
//!
//! Gameplay notifications (non-adjacent taps, duplicate finds, lost rounds)
//! are *not* errors: they are reported through
//! [`SelectionResult`](crate::session::SelectionResult) and
//! [`SubmitOutcome`](crate::session::SubmitOutcome). The types here cover
//! configuration problems and misuse of the session API.

use crate::core::Coord;
use crate::session::RoundState;
use std::io;
use std::path::PathBuf;

/// A word could not be written into the grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cannot place an empty word")]
    EmptyWord,

    #[error("word \"{word}\" has {len} letters but the grid is only {size} cells wide")]
    WordTooLong { word: String, len: usize, size: usize },

    #[error(
        "no room for \"{word}\" on a {size}x{size} grid after {attempts} random attempts and a full scan"
    )]
    Saturated {
        word: String,
        size: usize,
        attempts: usize,
    },
}

/// A fixed grid failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell {coord} holds '{found}', expected an uppercase letter")]
    InvalidCell { coord: Coord, found: char },
}

/// The word pool is unusable for a round
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("\"{word}\" is not an alphabetic word")]
    InvalidWord { word: String },

    #[error("\"{word}\" has {len} letters, longer than the {max} allowed")]
    WordTooLong { word: String, len: usize, max: usize },

    #[error("requested {requested} distinct words but the vocabulary only has {available}")]
    InsufficientWords { requested: usize, available: usize },

    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by [`PuzzleSession`](crate::session::PuzzleSession)
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("grid generation failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("word selection failed: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("grid is {found}x{found} but the session is configured for {expected}x{expected}")]
    GridSizeMismatch { expected: usize, found: usize },

    #[error("a round needs at least one target word")]
    NoTargets,

    #[error("target \"{word}\" is listed more than once")]
    DuplicateTarget { word: String },

    #[error("target \"{word}\" does not appear in the grid")]
    TargetNotInGrid { word: String },

    #[error("no round in play (session is {0})")]
    NotPlaying(RoundState),
}
