//! Validated word pool for drawing round targets

use super::VOCABULARY;
use crate::core::is_grid_letter;
use crate::error::VocabularyError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A de-duplicated list of uppercase words that fit the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary, normalising every entry to uppercase
    ///
    /// Blank entries are skipped and repeated words are kept once, in first
    /// occurrence order.
    ///
    /// # Errors
    /// Returns `VocabularyError` if a word contains non-letters or is longer
    /// than `max_len` characters.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["cat", "Dog", "CAT"], 4).unwrap();
    /// assert_eq!(vocabulary.words(), ["CAT", "DOG"]);
    ///
    /// assert!(Vocabulary::new(["elephant"], 4).is_err());
    /// ```
    pub fn new<I, S>(words: I, max_len: usize) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised: Vec<String> = Vec::new();

        for raw in words {
            let word = raw.as_ref().trim().to_uppercase();
            if word.is_empty() {
                continue;
            }

            if !word.chars().all(is_grid_letter) {
                return Err(VocabularyError::InvalidWord { word });
            }

            let len = word.chars().count();
            if len > max_len {
                return Err(VocabularyError::WordTooLong {
                    word,
                    len,
                    max: max_len,
                });
            }

            if !normalised.contains(&word) {
                normalised.push(word);
            }
        }

        Ok(Self { words: normalised })
    }

    /// The word pool compiled into the binary
    ///
    /// # Errors
    /// Returns `VocabularyError::WordTooLong` if an embedded word does not
    /// fit a grid of width `max_len`.
    pub fn embedded(max_len: usize) -> Result<Self, VocabularyError> {
        Self::new(VOCABULARY.iter().copied(), max_len)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw `count` distinct words by rejection sampling
    ///
    /// Words come back in draw order.
    ///
    /// # Errors
    /// Returns `VocabularyError::InsufficientWords` if fewer than `count`
    /// words are available.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, VocabularyError> {
        if count > self.words.len() {
            return Err(VocabularyError::InsufficientWords {
                requested: count,
                available: self.words.len(),
            });
        }

        let mut picked: Vec<String> = Vec::with_capacity(count);
        while picked.len() < count {
            if let Some(word) = self.words.choose(rng)
                && !picked.contains(word)
            {
                picked.push(word.clone());
            }
        }
        Ok(picked)
    }
}
