//! TUI rendering with ratatui
//!
//! Gallows, word and selection panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::catalog::{Category, RANDOM_KEYWORD};
use crate::game::GameSession;
use crate::output::formatters::spaced;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows or selection menu
            Constraint::Percentage(60), // Word, gauge and messages
        ])
        .split(chunks[1]);

    match &app.session {
        Some(session) => render_gallows(f, session, main_chunks[0]),
        None => render_selection(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, session: &GameSession, area: Rect) {
    let color = if session.mistakes() == 0 {
        Color::White
    } else {
        Color::Red
    };
    let lines: Vec<Line> = session
        .progress()
        .lines()
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_selection(f: &mut Frame, app: &App, area: Rect) {
    let highlight = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    if app.input_mode == InputMode::Difficulty {
        lines.push(Line::from("Difficulty levels:"));
        for (i, mistakes) in app.table.levels().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", i + 1), highlight),
                Span::raw(format!(" - {mistakes} mistakes")),
            ]));
        }
    } else {
        lines.push(Line::from("Categories:"));
        for category in Category::ALL {
            let count = app.catalog.puzzles(category).len();
            lines.push(Line::from(vec![
                Span::styled(format!("  {category}"), highlight),
                Span::raw(format!(" ({count} words)")),
            ]));
        }
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  {RANDOM_KEYWORD}"), highlight),
        Span::raw(" - choose for me"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Choose ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word and guessed letters
            Constraint::Length(3), // Mistakes gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_mistakes(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.session {
        Some(session) => {
            let state = session.guess_state();
            let word = if session.is_active() {
                spaced(&state.snapshot())
            } else {
                let letters: Vec<char> = session.word().chars().collect();
                spaced(&letters)
            };

            vec![
                Line::from(Span::styled(
                    word,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Guessed: {}", spaced(&state.guessed_letters()))),
                Line::from(Span::styled(
                    format!("Missed:  {}", spaced(&state.missed_letters())),
                    Style::default().fg(Color::Red),
                )),
            ]
        }
        None => vec![Line::from("No game in progress")],
    };

    let title = app
        .category
        .map_or_else(|| " Word ".to_string(), |category| format!(" Word ({category}) "));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_mistakes(f: &mut Frame, app: &App, area: Rect) {
    let (mistakes, max_mistakes) = app
        .session
        .as_ref()
        .map_or((0, 0), |s| (s.mistakes(), s.max_mistakes()));
    let percent = if max_mistakes == 0 {
        0
    } else {
        (u64::from(mistakes) * 100 / u64::from(max_mistakes)).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Mistakes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{mistakes}/{max_mistakes}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Category => (" Category | Enter to confirm ", Color::Cyan),
        InputMode::Difficulty => (" Difficulty | Enter to confirm ", Color::Cyan),
        InputMode::Playing => (
            " Guess a letter | 'help' for a clue, 'quit' to give up ",
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let level = app.session.as_ref().map_or_else(
        || "Level: -".to_string(),
        |s| format!("Level: {}/{}", s.difficulty(), app.table.max_difficulty()),
    );
    f.render_widget(Paragraph::new(level).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Score: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.total_score
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
