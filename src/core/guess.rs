//! Letter-guessing state for a single puzzle
//!
//! Tracks which letters were asked, which positions of the word are revealed
//! and whether the word is solved. The only transition is submitting a letter.

use super::PuzzleContent;
use rustc_hash::FxHashSet;

/// Symbol shown for a position whose letter has not been guessed
pub const PLACEHOLDER: char = '_';

const HIT_FEEDBACK: &str = "Hit!";
const REPEAT_CONTAINED_FEEDBACK: &str =
    "You have already asked about this letter!\nHidden word contains it.\n";
const REPEAT_MISSING_FEEDBACK: &str =
    "You have already asked about this letter!\nHidden word doesn't contain it.\n";

/// Result of submitting one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOutcome {
    /// New letter present in the word, all occurrences revealed
    Hit,
    /// New letter absent from the word
    Miss,
    /// Letter asked before; `contained` tells whether the word has it
    Repeated { contained: bool },
}

impl LetterOutcome {
    /// Whether this submission counts against the mistake budget
    #[inline]
    #[must_use]
    pub const fn is_mistake(self) -> bool {
        matches!(self, Self::Miss)
    }

    /// Player-facing acknowledgement
    ///
    /// Empty for a miss: the caller owns the mistake budget and words that message.
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::Hit => HIT_FEEDBACK,
            Self::Miss => "",
            Self::Repeated { contained: true } => REPEAT_CONTAINED_FEEDBACK,
            Self::Repeated { contained: false } => REPEAT_MISSING_FEEDBACK,
        }
    }
}

fn fold_case(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Guessing progress over one `PuzzleContent`
#[derive(Debug, Clone)]
pub struct GuessState {
    content: PuzzleContent,
    guessed_letters: FxHashSet<char>,
    revealed: Vec<char>,
    solved: bool,
}

impl GuessState {
    #[must_use]
    pub fn new(content: PuzzleContent) -> Self {
        let revealed = vec![PLACEHOLDER; content.len()];
        Self {
            content,
            guessed_letters: FxHashSet::default(),
            revealed,
            solved: false,
        }
    }

    /// Submit a single letter
    ///
    /// Uppercase input is folded to lowercase first.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessState, LetterOutcome, PuzzleContent};
    ///
    /// let mut state = GuessState::new(PuzzleContent::new("apple", "A fruit").unwrap());
    ///
    /// assert_eq!(state.submit_letter('p'), LetterOutcome::Hit);
    /// assert_eq!(state.snapshot(), vec!['_', 'p', 'p', '_', '_']);
    ///
    /// let outcome = state.submit_letter('z');
    /// assert!(outcome.is_mistake());
    /// assert_eq!(outcome.feedback(), "");
    /// ```
    pub fn submit_letter(&mut self, letter: char) -> LetterOutcome {
        let letter = fold_case(letter);

        if self.guessed_letters.contains(&letter) {
            return LetterOutcome::Repeated {
                contained: self.content.contains(letter),
            };
        }

        self.guessed_letters.insert(letter);

        if self.content.contains(letter) {
            self.reveal(letter);
            LetterOutcome::Hit
        } else {
            LetterOutcome::Miss
        }
    }

    fn reveal(&mut self, letter: char) {
        for (slot, actual) in self.revealed.iter_mut().zip(self.content.word().chars()) {
            if actual == letter {
                *slot = letter;
            }
        }
        self.solved = !self.revealed.contains(&PLACEHOLDER);
    }

    /// The hint, verbatim
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        self.content.hint()
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Copy of the revealed word, placeholders included
    #[must_use]
    pub fn snapshot(&self) -> Vec<char> {
        self.revealed.clone()
    }

    /// Revealed word as a string, e.g. `a__le`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.revealed.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&fold_case(letter))
    }

    /// Every letter asked so far, sorted alphabetically
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed_letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Letters asked so far that the word does not contain, sorted
    #[must_use]
    pub fn missed_letters(&self) -> Vec<char> {
        self.guessed_letters()
            .into_iter()
            .filter(|&c| !self.content.contains(c))
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn content(&self) -> &PuzzleContent {
        &self.content
    }
}
