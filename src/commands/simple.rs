//! Simple interactive CLI mode
//!
//! Line-by-line game without TUI: prompts for category and difficulty, then
//! reads one guess per line until the game ends.

use crate::catalog::{Catalog, Category, Choice, parse_difficulty};
use crate::console::Console;
use crate::core::DifficultyTable;
use crate::game::{GameSession, SessionSummary, TurnOutcome};
use crate::output::formatters::{
    INVALID_SELECTION, SELECTION_ACCEPTED, category_prompt, difficulty_prompt, game_intro,
    game_parameters, summary_message, turn_message, turn_prompt,
};
use anyhow::{Result, bail};
use rand::Rng;
use tracing::info;

/// Selections made before the game starts
///
/// `None` means the player is asked.
#[derive(Debug, Clone, Copy)]
pub struct SimpleConfig {
    pub category: Option<Choice<Category>>,
    pub difficulty: Option<Choice<usize>>,
    pub table: DifficultyTable,
}

impl SimpleConfig {
    #[must_use]
    pub const fn new(
        category: Option<Choice<Category>>,
        difficulty: Option<Choice<usize>>,
    ) -> Self {
        Self {
            category,
            difficulty,
            table: DifficultyTable::STANDARD,
        }
    }
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Run the simple interactive CLI mode
///
/// Plays games until the player declines another one or input runs out.
/// Returns the summary of every game played.
///
/// # Errors
///
/// Returns an error on console I/O failure, if input ends while a selection is
/// being asked, or if the catalog cannot serve the selection.
pub fn run_simple<C: Console, R: Rng>(
    console: &mut C,
    config: SimpleConfig,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Vec<SessionSummary>> {
    let mut summaries = Vec::new();

    loop {
        let summary = play_game(console, config, catalog, rng)?;
        summaries.push(summary);

        console.write("\nPlay again? (yes/no)")?;
        match console.read_line()? {
            Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") => {}
            _ => {
                console.write("Thanks for playing!")?;
                return Ok(summaries);
            }
        }
    }
}

/// Play a single game from selection to summary
///
/// # Errors
///
/// See [`run_simple`].
pub fn play_game<C: Console, R: Rng>(
    console: &mut C,
    config: SimpleConfig,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<SessionSummary> {
    console.write(&game_intro())?;

    let category = match config.category {
        Some(choice) => choice,
        None => ask_category(console)?,
    };
    let difficulty = match config.difficulty {
        Some(choice) => choice,
        None => ask_difficulty(console, config.table)?,
    };

    let generated = catalog.generate(category, difficulty, config.table, rng)?;
    let mut session = GameSession::new(generated.puzzle, generated.difficulty, config.table)?;
    info!(category = %generated.category, difficulty = generated.difficulty, "simple game started");

    console.write(&game_parameters(
        generated.category,
        session.max_mistakes(),
        config.table,
    ))?;

    while session.is_active() {
        console.write(&turn_prompt(&session.guess_state().pattern()))?;

        let Some(line) = console.read_line()? else {
            // End of input counts as quitting
            session.submit(crate::game::QUIT_COMMAND)?;
            break;
        };
        console.clear()?;

        let outcome = session.submit(&line)?;
        if outcome == TurnOutcome::Quit {
            break;
        }

        let mut message = turn_message(&outcome);
        if matches!(outcome, TurnOutcome::Miss { .. }) {
            message.push('\n');
            message.push_str(&session.progress().render());
        }
        console.write(&message)?;
    }

    let summary = session.summary();
    console.write(&summary_message(&summary))?;
    Ok(summary)
}

/// Ask for a category until a valid one is entered
///
/// # Errors
///
/// Returns an error if input ends or the console fails.
pub fn ask_category<C: Console>(console: &mut C) -> Result<Choice<Category>> {
    console.write(&category_prompt())?;

    loop {
        let Some(line) = console.read_line()? else {
            bail!("input ended before a category was chosen");
        };

        if let Ok(choice) = line.parse::<Choice<Category>>() {
            console.write(SELECTION_ACCEPTED)?;
            return Ok(choice);
        }
        console.write(INVALID_SELECTION)?;
    }
}

/// Ask for a difficulty until a valid one is entered
///
/// # Errors
///
/// Returns an error if input ends or the console fails.
pub fn ask_difficulty<C: Console>(
    console: &mut C,
    table: DifficultyTable,
) -> Result<Choice<usize>> {
    console.write(&difficulty_prompt(table))?;

    loop {
        let Some(line) = console.read_line()? else {
            bail!("input ended before a difficulty was chosen");
        };

        if let Ok(choice) = parse_difficulty(&line, table) {
            console.write(SELECTION_ACCEPTED)?;
            return Ok(choice);
        }
        console.write(INVALID_SELECTION)?;
    }
}
