//! TUI application state and logic

use crate::catalog::{Catalog, Category, Choice, parse_difficulty};
use crate::core::{DifficultyTable, LetterOutcome};
use crate::game::{GameSession, SessionSummary, TurnOutcome};
use crate::output::formatters::{
    INVALID_SELECTION, game_parameters, summary_message, turn_message,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

const MAX_MESSAGES: usize = 8;
const MAX_INPUT: usize = 16;

/// Application state
pub struct App {
    pub catalog: Catalog,
    pub table: DifficultyTable,
    rng: StdRng,
    pub preset_category: Option<Choice<Category>>,
    pub preset_difficulty: Option<Choice<usize>>,
    pub category_choice: Option<Choice<Category>>,
    /// Category the current puzzle was drawn from
    pub category: Option<Category>,
    pub session: Option<GameSession>,
    pub last_summary: Option<SessionSummary>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Category,
    Difficulty,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_score: u64,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    /// Create the app and move past any preselected choices
    #[must_use]
    pub fn new(
        catalog: Catalog,
        table: DifficultyTable,
        preset_category: Option<Choice<Category>>,
        preset_difficulty: Option<Choice<usize>>,
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            catalog,
            table,
            rng,
            preset_category,
            preset_difficulty,
            category_choice: None,
            category: None,
            session: None,
            last_summary: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Category,
        };

        app.add_message("Welcome to Hangman game!", MessageStyle::Info);
        app.add_message("Guess the hidden word one letter at a time.", MessageStyle::Info);
        app.new_game();
        app
    }

    /// Start over from the selection step
    pub fn new_game(&mut self) {
        self.session = None;
        self.category = None;
        self.input_buffer.clear();

        match self.preset_category {
            Some(choice) => self.accept_category(choice),
            None => {
                self.category_choice = None;
                self.input_mode = InputMode::Category;
                self.add_message(
                    "Choose a category: animals, fruits, nature or random.",
                    MessageStyle::Info,
                );
            }
        }
    }

    fn accept_category(&mut self, choice: Choice<Category>) {
        self.category_choice = Some(choice);

        match self.preset_difficulty {
            Some(difficulty) => self.start_game(choice, difficulty),
            None => {
                self.input_mode = InputMode::Difficulty;
                self.add_message(
                    &format!(
                        "Choose difficulty: 1 to {} or random.",
                        self.table.max_difficulty()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn start_game(&mut self, category: Choice<Category>, difficulty: Choice<usize>) {
        let generated = match self
            .catalog
            .generate(category, difficulty, self.table, &mut self.rng)
        {
            Ok(generated) => generated,
            Err(err) => return self.selection_failed(&err.to_string()),
        };

        match GameSession::new(generated.puzzle, generated.difficulty, self.table) {
            Ok(session) => {
                let rules = game_parameters(generated.category, session.max_mistakes(), self.table);
                self.add_lines(&rules, MessageStyle::Info);
                self.category = Some(generated.category);
                self.session = Some(session);
                self.input_mode = InputMode::Playing;
            }
            Err(err) => self.selection_failed(&err.to_string()),
        }
    }

    fn selection_failed(&mut self, reason: &str) {
        debug!(reason, "could not start a game");
        self.add_message(reason, MessageStyle::Error);
        self.preset_category = None;
        self.preset_difficulty = None;
        self.new_game();
    }

    /// Interpret the input line for the current mode
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.input_mode {
            InputMode::Category => match input.parse::<Choice<Category>>() {
                Ok(choice) => self.accept_category(choice),
                Err(_) => self.add_message(INVALID_SELECTION, MessageStyle::Error),
            },
            InputMode::Difficulty => match parse_difficulty(&input, self.table) {
                Ok(difficulty) => {
                    if let Some(category) = self.category_choice {
                        self.start_game(category, difficulty);
                    }
                }
                Err(_) => self.add_message(INVALID_SELECTION, MessageStyle::Error),
            },
            InputMode::Playing => self.play_turn(&input),
            InputMode::GameOver => {}
        }
    }

    fn play_turn(&mut self, input: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let outcome = match session.submit(input) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        let finished = !session.is_active();

        let style = match outcome {
            TurnOutcome::Letter(LetterOutcome::Hit) => MessageStyle::Success,
            TurnOutcome::Miss { .. } | TurnOutcome::Invalid => MessageStyle::Error,
            _ => MessageStyle::Info,
        };
        self.add_lines(&turn_message(&outcome), style);

        if finished {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let summary = session.summary();

        self.stats.total_games += 1;
        if summary.won() {
            self.stats.games_won += 1;
        }
        self.stats.total_score += summary.score;

        let style = if summary.won() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_lines(&summary_message(&summary), style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        self.last_summary = Some(summary);
        self.input_mode = InputMode::GameOver;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.input_mode == InputMode::GameOver {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if self.input_buffer.len() < MAX_INPUT {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }

    /// Add every non-empty line of `text` as its own message
    pub fn add_lines(&mut self, text: &str, style: MessageStyle) {
        for line in text.lines().filter(|line| !line.is_empty()) {
            self.add_message(line, style);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(
    catalog: Catalog,
    table: DifficultyTable,
    preset_category: Option<Choice<Category>>,
    preset_difficulty: Option<Choice<usize>>,
) -> Result<Statistics> {
    let app = App::new(
        catalog,
        table,
        preset_category,
        preset_difficulty,
        StdRng::from_os_rng(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    fn lion_catalog() -> Catalog {
        Catalog::from_entries([(Category::Animals, "lion", "A king without a crown.")]).unwrap()
    }

    fn app(category: Option<Choice<Category>>, difficulty: Option<Choice<usize>>) -> App {
        App::new(
            lion_catalog(),
            DifficultyTable::STANDARD,
            category,
            difficulty,
            StdRng::seed_from_u64(3),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App) -> &str {
        app.messages.last().map_or("", |m| m.text.as_str())
    }

    #[test]
    fn selection_flow_starts_game() {
        let mut app = app(None, None);
        assert_eq!(app.input_mode, InputMode::Category);

        type_line(&mut app, "animals");
        assert_eq!(app.input_mode, InputMode::Difficulty);

        type_line(&mut app, "2");
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.category, Some(Category::Animals));

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.difficulty(), 2);
        assert_eq!(session.max_mistakes(), 3);
    }

    #[test]
    fn invalid_selection_reprompts() {
        let mut app = app(None, None);
        type_line(&mut app, "planets");
        assert_eq!(app.input_mode, InputMode::Category);
        assert_eq!(last_message(&app), INVALID_SELECTION);

        type_line(&mut app, "animals");
        type_line(&mut app, "7");
        assert_eq!(app.input_mode, InputMode::Difficulty);
        assert_eq!(last_message(&app), INVALID_SELECTION);
    }

    #[test]
    fn presets_skip_selection() {
        let app = app(Some(Choice::Fixed(Category::Animals)), Some(Choice::Fixed(1)));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.session.is_some());
    }

    #[test]
    fn empty_category_returns_to_selection() {
        let mut app = app(Some(Choice::Fixed(Category::Fruits)), Some(Choice::Fixed(1)));
        assert_eq!(app.input_mode, InputMode::Category);
        assert!(app.session.is_none());
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Error));

        type_line(&mut app, "animals");
        type_line(&mut app, "1");
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app(Some(Choice::Fixed(Category::Animals)), Some(Choice::Fixed(1)));
        for letter in ["x", "l", "i", "o", "n"] {
            type_line(&mut app, letter);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.last_summary.as_ref().unwrap().state, SessionState::Won);
        assert_eq!(
            app.stats,
            Statistics {
                total_games: 1,
                games_won: 1,
                total_score: 32,
            }
        );
        assert!(app.messages.iter().any(|m| m.text == "Final score is 32."));
    }

    #[test]
    fn typing_quit_loses_game() {
        let mut app = app(Some(Choice::Fixed(Category::Animals)), Some(Choice::Fixed(3)));
        type_line(&mut app, "QUIT");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.messages.iter().any(|m| m.text == "You lost!"));
    }

    #[test]
    fn help_shows_hint_without_cost() {
        let mut app = app(Some(Choice::Fixed(Category::Animals)), Some(Choice::Fixed(4)));
        type_line(&mut app, "help");

        assert_eq!(last_message(&app), "A king without a crown.");
        assert_eq!(app.session.as_ref().unwrap().mistakes(), 0);
    }

    #[test]
    fn game_over_keys() {
        let mut app = app(Some(Choice::Fixed(Category::Animals)), Some(Choice::Fixed(4)));
        type_line(&mut app, "z");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session.as_ref().unwrap().mistakes(), 0);

        type_line(&mut app, "z");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.stats.total_games, 2);
    }

    #[test]
    fn backspace_and_ctrl_c() {
        let mut app = app(None, None);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "a");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(None, None);
        for _ in 0..20 {
            type_line(&mut app, "?");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }
}
