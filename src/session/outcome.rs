//! Results reported back to the presentation layer

use std::fmt;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round generated yet
    Idle,
    Playing,
    /// Every target word was found
    Won,
    /// Attempts ran out; a fresh round replaces this state immediately
    Exhausted,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Result of tapping a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionResult {
    Added,
    /// The cell was already selected and has been toggled off
    Removed,
    /// The cell does not touch the last selected cell
    NotAdjacent,
    OutOfBounds,
}

impl SelectionResult {
    /// Whether the selection changed
    #[must_use]
    pub const fn accepted(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }

    /// Machine-readable note for anything other than a plain append
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Self::Added => None,
            Self::Removed => Some("already-selected-removed"),
            Self::NotAdjacent => Some("not-adjacent"),
            Self::OutOfBounds => Some("out-of-bounds"),
        }
    }
}

/// Result of submitting the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
    /// A target word found for the first time
    CorrectNew,
    /// A target word that was already found
    CorrectDuplicate,
    /// Not a target word; one attempt spent
    Incorrect,
    /// The last missing word was found
    RoundWon,
    /// The last attempt was spent; a new round has been generated
    RoundLost,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CorrectNew => "correct-new",
            Self::CorrectDuplicate => "correct-duplicate",
            Self::Incorrect => "incorrect",
            Self::RoundWon => "round-won",
            Self::RoundLost => "round-lost",
        }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
