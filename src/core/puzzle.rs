//! Hidden word and hint pair

use std::fmt;
use thiserror::Error;

/// Error type for invalid puzzle words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle word must not be empty")]
    EmptyWord,
    #[error("puzzle word must contain only lowercase Latin letters, got '{0}'")]
    InvalidCharacters(String),
}

/// An immutable (word, hint) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleContent {
    word: String,
    hint: String,
}

impl PuzzleContent {
    /// Create a new puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if the word is empty or holds anything other than
    /// lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::PuzzleContent;
    ///
    /// let puzzle = PuzzleContent::new("lion", "A king without a crown.").unwrap();
    /// assert_eq!(puzzle.word(), "lion");
    ///
    /// assert!(PuzzleContent::new("", "nothing").is_err());
    /// assert!(PuzzleContent::new("Lion", "capitalised").is_err());
    /// ```
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Result<Self, PuzzleError> {
        let word = word.into();

        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(PuzzleError::InvalidCharacters(word));
        }

        Ok(Self {
            word,
            hint: hint.into(),
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(letter)
    }
}

impl fmt::Display for PuzzleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_accessors() {
        let puzzle = PuzzleContent::new("apple", "A fruit").unwrap();
        assert_eq!(puzzle.word(), "apple");
        assert_eq!(puzzle.hint(), "A fruit");
        assert_eq!(puzzle.len(), 5);
        assert!(!puzzle.is_empty());
        assert_eq!(format!("{puzzle}"), "apple");
    }

    #[test]
    fn puzzle_contains_letter() {
        let puzzle = PuzzleContent::new("apple", "A fruit").unwrap();
        assert!(puzzle.contains('p'));
        assert!(!puzzle.contains('z'));
    }

    #[test]
    fn puzzle_rejects_bad_words() {
        assert_eq!(PuzzleContent::new("", "x"), Err(PuzzleError::EmptyWord));
        assert!(matches!(
            PuzzleContent::new("ap ple", "x"),
            Err(PuzzleError::InvalidCharacters(_))
        ));
        assert!(PuzzleContent::new("APPLE", "x").is_err());
        assert!(PuzzleContent::new("épée", "x").is_err());
    }

    #[test]
    fn puzzle_hint_kept_verbatim() {
        let hint = "Line one,\nline two.\n";
        let puzzle = PuzzleContent::new("wave", hint).unwrap();
        assert_eq!(puzzle.hint(), hint);
    }
}
