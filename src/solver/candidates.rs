//! Catalog words still consistent with a guessing state

use crate::core::{GuessState, PLACEHOLDER};
use rustc_hash::FxHashMap;

/// Whether `word` could be the hidden word behind `state`
///
/// A candidate has the same length, agrees on every revealed letter, and holds
/// no already-guessed letter at a hidden position.
#[must_use]
pub fn is_consistent(word: &str, state: &GuessState) -> bool {
    let revealed = state.snapshot();

    word.chars().count() == revealed.len()
        && word.chars().zip(&revealed).all(|(letter, &shown)| {
            if shown == PLACEHOLDER {
                !state.is_guessed(letter)
            } else {
                letter == shown
            }
        })
}

/// Filter `words` to those consistent with `state`
pub fn filter_candidates<'a>(words: &[&'a str], state: &GuessState) -> Vec<&'a str> {
    words
        .iter()
        .copied()
        .filter(|word| is_consistent(word, state))
        .collect()
}

/// For every unguessed letter, the number of candidates containing it
#[must_use]
pub fn letter_counts(candidates: &[&str], state: &GuessState) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        let mut seen: Vec<char> = word.chars().filter(|&c| !state.is_guessed(c)).collect();
        seen.sort_unstable();
        seen.dedup();

        for letter in seen {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    counts
}
