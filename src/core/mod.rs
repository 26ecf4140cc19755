//! Core domain types for Hangman
//!
//! Puzzle content, guessing state, difficulty budgets and the gallows picture.
//! Nothing here reads input or prints output.

mod difficulty;
mod guess;
mod progress;
mod puzzle;

pub use difficulty::{DifficultyError, DifficultyTable};
pub use guess::{GuessState, LetterOutcome, PLACEHOLDER};
pub use progress::{ProgressError, ProgressRenderer, STAGE_SYMBOLS};
pub use puzzle::{PuzzleContent, PuzzleError};
