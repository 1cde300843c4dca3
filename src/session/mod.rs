//! Interactive puzzle state
//!
//! A session moves through `Idle → Playing → (Won | Exhausted) → Playing`.
//! Presenters drive it with [`PuzzleSession::select_cell`],
//! [`PuzzleSession::submit`] and [`PuzzleSession::new_round`], then render
//! [`PuzzleSession::round`] or a [`SessionSnapshot`].

mod outcome;
mod puzzle;
mod selection;
mod stats;

pub use outcome::{RoundState, SelectionResult, SubmitOutcome};
pub use puzzle::{PuzzleSession, Round, SessionSnapshot};
pub use selection::Selection;
pub use stats::Statistics;
