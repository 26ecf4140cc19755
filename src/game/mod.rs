//! Game session state machine
//!
//! Turns player input into guesses, counts mistakes and awards the score.

mod command;
mod session;

pub use command::{Command, HELP_COMMAND, QUIT_COMMAND};
pub use session::{GameSession, SessionError, SessionState, SessionSummary, TurnOutcome};
