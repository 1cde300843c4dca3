//! Word Hunt
//!
//! A word-search puzzle: target words are hidden horizontally or vertically in
//! a letter grid, and the player chains adjacent cells to spell them out
//! before running out of attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_hunt::config::GameConfig;
//! use word_hunt::session::{PuzzleSession, SubmitOutcome};
//! use word_hunt::wordlists::Vocabulary;
//!
//! let config = GameConfig::default();
//! let vocabulary = Vocabulary::embedded(config.grid_size).unwrap();
//! let mut session = PuzzleSession::start(config, vocabulary, StdRng::seed_from_u64(7)).unwrap();
//!
//! // Spell the first target word by walking its placement
//! let round = session.round().unwrap();
//! let placement = round.grid().find_word(&round.targets()[0]).unwrap();
//! let cells: Vec<_> = placement.cells().collect();
//! for cell in cells {
//!     session.select_cell(cell.row, cell.col).unwrap();
//! }
//! assert_eq!(session.submit().unwrap(), SubmitOutcome::CorrectNew);
//! ```

// Core domain types
pub mod core;

// Fixed game parameters
pub mod config;

// Error types
pub mod error;

// Grid generation
pub mod generator;

// Game state machine
pub mod session;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup for the binary
pub mod logging;
