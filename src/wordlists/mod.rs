//! Word pools for puzzle rounds
//!
//! Provides the embedded default pool and loading of custom lists.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};
pub use vocabulary::Vocabulary;
