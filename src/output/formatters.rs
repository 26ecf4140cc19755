//! Player-facing text
//!
//! Shared by the simple CLI and the TUI so both speak with the same words.

use crate::catalog::{Category, RANDOM_KEYWORD};
use crate::core::DifficultyTable;
use crate::game::{HELP_COMMAND, QUIT_COMMAND, SessionState, SessionSummary, TurnOutcome};

pub const INVALID_SELECTION: &str = "ERROR! INVALID INPUT";
pub const SELECTION_ACCEPTED: &str = "ACCEPTED\n";
pub const INVALID_TURN_INPUT: &str = "Please, enter a single Latin letter.\n";

#[must_use]
pub fn game_intro() -> String {
    "Welcome to Hangman game!\n\
     Your goal is to guess the hidden word.\n\
     The hidden word consists of small Latin letters.\n"
        .to_string()
}

#[must_use]
pub fn category_prompt() -> String {
    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    format!(
        "Please, choose hidden word category.\n\
         Available categories: {}.\n\
         To choose random category, print \"{RANDOM_KEYWORD}\".\n",
        names.join(", ")
    )
}

#[must_use]
pub fn difficulty_prompt(table: DifficultyTable) -> String {
    format!(
        "Please, choose difficulty.\n\
         Enter X - integer number from 1 to {}.\n\
         To choose random difficulty, print \"{RANDOM_KEYWORD}\".\n\n{}",
        table.max_difficulty(),
        table.report()
    )
}

/// Rules and selections announced once the puzzle is drawn
#[must_use]
pub fn game_parameters(category: Category, max_mistakes: u32, table: DifficultyTable) -> String {
    format!(
        "OK! Chosen category: {category}.\n\
         If you guess the word by making X mistakes, you will get 2^({}-X) points\n\
         If you make {max_mistakes} mistakes, you lose!\n\
         Enter '{QUIT_COMMAND}' to quit.\n\
         Enter '{HELP_COMMAND}' to get a clue.\n",
        table.base_budget()
    )
}

#[must_use]
pub fn turn_prompt(pattern: &str) -> String {
    format!("The word: {pattern}\nGuess a letter:\n")
}

#[must_use]
pub fn miss_message(mistakes: u32, max_mistakes: u32) -> String {
    format!("Missed, mistake {mistakes} out of {max_mistakes}.")
}

/// Feedback for one turn; empty after a quit
#[must_use]
pub fn turn_message(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Letter(letter) => letter.feedback().to_string(),
        TurnOutcome::Miss {
            mistakes,
            max_mistakes,
        } => miss_message(*mistakes, *max_mistakes),
        TurnOutcome::Hint(hint) => format!("{hint}\n"),
        TurnOutcome::Invalid => INVALID_TURN_INPUT.to_string(),
        TurnOutcome::Quit => String::new(),
    }
}

#[must_use]
pub fn verdict(state: SessionState) -> &'static str {
    match state {
        SessionState::Won => "You won!",
        _ => "You lost!",
    }
}

/// End-of-game report: verdict, hidden word and score
#[must_use]
pub fn summary_message(summary: &SessionSummary) -> String {
    format!(
        "{}\nThe hidden word is {}.\nFinal score is {}.",
        verdict(summary.state),
        summary.word,
        summary.score
    )
}

/// Letters spaced for readability, e.g. `a _ _ l e`
#[must_use]
pub fn spaced(letters: &[char]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, letter) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*letter);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;
    use pretty_assertions::assert_eq;

    fn summary(state: SessionState, score: u64) -> SessionSummary {
        SessionSummary {
            state,
            word: "lion".to_string(),
            mistakes: 2,
            max_mistakes: 6,
            difficulty: 1,
            score,
        }
    }

    #[test]
    fn won_summary() {
        assert_eq!(
            summary_message(&summary(SessionState::Won, 16)),
            "You won!\nThe hidden word is lion.\nFinal score is 16."
        );
    }

    #[test]
    fn lost_and_quit_summaries() {
        let expected = "You lost!\nThe hidden word is lion.\nFinal score is 0.";
        assert_eq!(summary_message(&summary(SessionState::Lost, 0)), expected);
        assert_eq!(summary_message(&summary(SessionState::Quit, 0)), expected);
    }

    #[test]
    fn turn_messages() {
        assert_eq!(
            turn_message(&TurnOutcome::Letter(LetterOutcome::Hit)),
            "Hit!"
        );
        assert_eq!(
            turn_message(&TurnOutcome::Miss {
                mistakes: 1,
                max_mistakes: 3
            }),
            "Missed, mistake 1 out of 3."
        );
        assert_eq!(
            turn_message(&TurnOutcome::Hint("A king without a crown.".to_string())),
            "A king without a crown.\n"
        );
        assert_eq!(
            turn_message(&TurnOutcome::Invalid),
            "Please, enter a single Latin letter.\n"
        );
        assert_eq!(turn_message(&TurnOutcome::Quit), "");
    }

    #[test]
    fn prompts_mention_choices() {
        let category = category_prompt();
        assert!(category.contains("animals, fruits, nature"));
        assert!(category.contains("\"random\""));

        let difficulty = difficulty_prompt(DifficultyTable::STANDARD);
        assert!(difficulty.contains("from 1 to 4"));
        assert!(difficulty.ends_with("4 - 1 mistakes\n"));
    }

    #[test]
    fn parameters_describe_rules() {
        let text = game_parameters(Category::Animals, 2, DifficultyTable::STANDARD);
        assert_eq!(
            text,
            "OK! Chosen category: animals.\n\
             If you guess the word by making X mistakes, you will get 2^(6-X) points\n\
             If you make 2 mistakes, you lose!\n\
             Enter 'quit' to quit.\n\
             Enter 'help' to get a clue.\n"
        );
    }

    #[test]
    fn turn_prompt_shows_pattern() {
        assert_eq!(turn_prompt("l___"), "The word: l___\nGuess a letter:\n");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced(&['a', '_', '_', 'l', 'e']), "a _ _ l e");
        assert_eq!(spaced(&[]), "");
    }
}
