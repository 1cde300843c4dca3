//! Word list loading utilities
//!
//! Reads custom vocabularies from disk or from an in-memory string.

use super::Vocabulary;
use crate::error::VocabularyError;
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file, one word per line
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `VocabularyError::Io` if the file cannot be read, or a validation
/// error if a word is not alphabetic or longer than `max_len`.
///
/// # Examples
/// ```no_run
/// use word_hunt::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/vocabulary.txt", 10).unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    max_len: usize,
) -> Result<Vocabulary, VocabularyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary = words_from_str(&content, max_len)?;
    log::debug!("Loaded {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parse a newline-separated word list
///
/// # Errors
///
/// Returns a validation error if a word is not alphabetic or too long.
pub fn words_from_str(content: &str, max_len: usize) -> Result<Vocabulary, VocabularyError> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    Vocabulary::new(words, max_len)
}
