//! Hangman
//!
//! Console word-guessing game: difficulty-scaled mistake budgets, an ASCII
//! gallows that fills in proportionally, and exponential scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{DifficultyTable, PuzzleContent};
//! use hangman::game::{GameSession, SessionState};
//!
//! let puzzle = PuzzleContent::new("lion", "A king without a crown.").unwrap();
//! let mut session = GameSession::new(puzzle, 1, DifficultyTable::STANDARD).unwrap();
//!
//! for input in ["x", "l", "i", "o", "n"] {
//!     session.submit(input).unwrap();
//! }
//! assert_eq!(session.state(), SessionState::Won);
//! assert_eq!(session.score(), 32);
//! ```

// Core domain types
pub mod core;

// Session state machine and player commands
pub mod game;

// Embedded puzzles and selection parsing
pub mod catalog;

// Line-oriented console abstraction
pub mod console;

// Automated letter picking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
