//! One play-through of a puzzle
//!
//! The session accepts input until the word is solved, the mistake budget is
//! spent, or the player quits. Score is awarded once, on a win.

use super::Command;
use crate::core::{
    DifficultyError, DifficultyTable, GuessState, LetterOutcome, ProgressError, ProgressRenderer,
    PuzzleContent,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error("the game is already over ({0:?})")]
    Finished(SessionState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingInput)
    }
}

/// What a single input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A letter was processed and did not cost a mistake
    Letter(LetterOutcome),
    /// A new letter missed
    Miss { mistakes: u32, max_mistakes: u32 },
    Hint(String),
    /// Input was not a letter or command; nothing changed
    Invalid,
    Quit,
}

/// Final report of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub state: SessionState,
    pub word: String,
    pub mistakes: u32,
    pub max_mistakes: u32,
    pub difficulty: usize,
    pub score: u64,
}

impl SessionSummary {
    #[inline]
    #[must_use]
    pub fn won(&self) -> bool {
        self.state == SessionState::Won
    }
}

/// Game session over one puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    guess_state: GuessState,
    progress: ProgressRenderer,
    table: DifficultyTable,
    difficulty: usize,
    mistakes: u32,
    max_mistakes: u32,
    score: u64,
    state: SessionState,
}

impl GameSession {
    /// Start a session on `puzzle` at `difficulty`
    ///
    /// # Errors
    /// Returns `SessionError` if `difficulty` is not a level of `table` or the
    /// table cannot drive the gallows picture.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{DifficultyTable, PuzzleContent};
    /// use hangman::game::{GameSession, SessionState};
    ///
    /// let puzzle = PuzzleContent::new("lion", "A king without a crown.").unwrap();
    /// let mut session = GameSession::new(puzzle, 1, DifficultyTable::STANDARD).unwrap();
    ///
    /// for input in ["x", "y", "l", "i", "o", "n"] {
    ///     session.submit(input).unwrap();
    /// }
    ///
    /// assert_eq!(session.state(), SessionState::Won);
    /// assert_eq!(session.score(), 16);
    /// ```
    pub fn new(
        puzzle: PuzzleContent,
        difficulty: usize,
        table: DifficultyTable,
    ) -> Result<Self, SessionError> {
        let max_mistakes = table.max_mistakes(difficulty)?;
        let progress = ProgressRenderer::new(table)?;

        debug!(
            word_len = puzzle.len(),
            difficulty, max_mistakes, "session started"
        );

        Ok(Self {
            guess_state: GuessState::new(puzzle),
            progress,
            table,
            difficulty,
            mistakes: 0,
            max_mistakes,
            score: 0,
            state: SessionState::AwaitingInput,
        })
    }

    /// Interpret and apply one line of player input
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is over.
    pub fn submit(&mut self, input: &str) -> Result<TurnOutcome, SessionError> {
        self.apply(Command::parse(input))
    }

    /// Apply an already-parsed command
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is over.
    pub fn apply(&mut self, command: Command) -> Result<TurnOutcome, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Finished(self.state));
        }

        let outcome = match command {
            Command::Quit => {
                self.finish(SessionState::Quit);
                TurnOutcome::Quit
            }
            Command::Help => TurnOutcome::Hint(self.guess_state.hint().to_string()),
            Command::Invalid => TurnOutcome::Invalid,
            Command::Letter(letter) => self.guess_letter(letter)?,
        };

        Ok(outcome)
    }

    fn guess_letter(&mut self, letter: char) -> Result<TurnOutcome, SessionError> {
        let outcome = self.guess_state.submit_letter(letter);
        debug!(%letter, ?outcome, "letter submitted");

        if outcome.is_mistake() {
            self.mistakes += 1;
            self.progress.update(self.mistakes, self.difficulty)?;

            if self.mistakes >= self.max_mistakes && !self.guess_state.is_solved() {
                self.finish(SessionState::Lost);
            }

            return Ok(TurnOutcome::Miss {
                mistakes: self.mistakes,
                max_mistakes: self.max_mistakes,
            });
        }

        if self.guess_state.is_solved() {
            self.finish(SessionState::Won);
        }

        Ok(TurnOutcome::Letter(outcome))
    }

    fn finish(&mut self, state: SessionState) {
        if state == SessionState::Won {
            self.score += self.table.win_reward(self.mistakes);
        }
        self.state = state;

        info!(
            ?state,
            mistakes = self.mistakes,
            score = self.score,
            "session finished"
        );
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.state.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[inline]
    #[must_use]
    pub const fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> usize {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn guess_state(&self) -> &GuessState {
        &self.guess_state
    }

    #[inline]
    #[must_use]
    pub const fn progress(&self) -> &ProgressRenderer {
        &self.progress
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> DifficultyTable {
        self.table
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.guess_state.content().word()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            word: self.word().to_string(),
            mistakes: self.mistakes,
            max_mistakes: self.max_mistakes,
            difficulty: self.difficulty,
            score: self.score,
        }
    }
}
