//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations used for
//! automated play.

use super::candidates::{filter_candidates, letter_counts};
use crate::core::GuessState;

/// English letters from most to least frequent
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next letter to submit
pub trait Strategy {
    /// Pick an unguessed letter for `state`
    ///
    /// Returns `None` when every letter has been guessed.
    fn next_letter(&self, state: &GuessState) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Candidate filtering over the catalog (default)
    Catalog(CatalogStrategy),
    /// Fixed English frequency order
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_letter(&self, state: &GuessState) -> Option<char> {
        match self {
            Self::Catalog(s) => s.next_letter(state),
            Self::Frequency(s) => s.next_letter(state),
            Self::Random(s) => s.next_letter(state),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "catalog", "frequency", "random".
    /// Defaults to catalog if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: Vec<String>) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Catalog(CatalogStrategy::new(words)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "catalog",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Frequency strategy
///
/// Always picks the most common English letter not yet asked.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&self, state: &GuessState) -> Option<char> {
        ENGLISH_FREQUENCY_ORDER
            .chars()
            .find(|&letter| !state.is_guessed(letter))
    }
}

/// Catalog strategy
///
/// Narrows the known words to those matching the revealed pattern and picks
/// the letter shared by the most of them. Falls back to frequency order when
/// no known word fits.
pub struct CatalogStrategy {
    words: Vec<String>,
}

impl CatalogStrategy {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl Strategy for CatalogStrategy {
    fn next_letter(&self, state: &GuessState) -> Option<char> {
        let words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        let candidates = filter_candidates(&words, state);
        let counts = letter_counts(&candidates, state);

        counts
            .into_iter()
            // Highest count first, alphabetical among ties
            .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then(l2.cmp(l1)))
            .map(|(letter, _)| letter)
            .or_else(|| FrequencyStrategy.next_letter(state))
    }
}

/// Random strategy
///
/// Picks any unguessed letter with equal probability.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_letter(&self, state: &GuessState) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let remaining: Vec<char> = ('a'..='z').filter(|&c| !state.is_guessed(c)).collect();
        remaining.choose(&mut rand::rng()).copied()
    }
}
