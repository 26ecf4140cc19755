//! Benchmark command
//!
//! Plays every catalog puzzle at every difficulty with an automated strategy
//! and aggregates the outcome per difficulty level.

use crate::catalog::Catalog;
use crate::core::{DifficultyTable, PuzzleContent};
use crate::game::{Command, GameSession, SessionError, SessionSummary};
use crate::solver::Strategy;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Aggregated games of one difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyStats {
    pub difficulty: usize,
    pub games: usize,
    pub wins: usize,
    pub total_mistakes: u64,
    pub total_score: u64,
}

impl DifficultyStats {
    #[must_use]
    pub const fn new(difficulty: usize) -> Self {
        Self {
            difficulty,
            games: 0,
            wins: 0,
            total_mistakes: 0,
            total_score: 0,
        }
    }

    fn record(&mut self, summary: &SessionSummary) {
        self.games += 1;
        if summary.won() {
            self.wins += 1;
        }
        self.total_mistakes += u64::from(summary.mistakes);
        self.total_score += summary.score;
    }

    /// Fraction of games won, 0.0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.games)
    }

    #[must_use]
    pub fn average_mistakes(&self) -> f64 {
        ratio(self.total_mistakes as f64, self.games)
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        ratio(self.total_score as f64, self.games)
    }
}

fn ratio(value: f64, games: usize) -> f64 {
    if games == 0 {
        0.0
    } else {
        value / games as f64
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    /// One entry per difficulty, easiest first
    pub levels: Vec<DifficultyStats>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.levels.iter().map(|level| level.games).sum()
    }

    #[must_use]
    pub fn total_wins(&self) -> usize {
        self.levels.iter().map(|level| level.wins).sum()
    }
}

/// Every word of the catalog, for strategies that reason over known words
#[must_use]
pub fn catalog_words(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|(_, puzzle)| puzzle.word().to_string())
        .collect()
}

/// Play one puzzle to the end, letting `strategy` pick every letter
///
/// A strategy that runs out of letters quits the game.
///
/// # Errors
/// Returns `SessionError` if `difficulty` is not a level of `table`.
pub fn play_automated<S: Strategy + ?Sized>(
    puzzle: PuzzleContent,
    difficulty: usize,
    table: DifficultyTable,
    strategy: &S,
) -> Result<SessionSummary, SessionError> {
    let mut session = GameSession::new(puzzle, difficulty, table)?;

    while session.is_active() {
        let command = strategy
            .next_letter(session.guess_state())
            .map_or(Command::Quit, Command::Letter);
        session.apply(command)?;
    }

    Ok(session.summary())
}

/// Run the benchmark with a progress bar on the terminal
///
/// # Errors
/// Returns an error if the progress bar template is rejected or a game
/// cannot be started.
pub fn run_benchmark<S: Strategy + Sync + ?Sized>(
    catalog: &Catalog,
    table: DifficultyTable,
    strategy: &S,
    strategy_name: &'static str,
) -> Result<BenchmarkResult> {
    let total = catalog.len() * table.max_difficulty();
    println!("🎯 Playing {total} games...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let result = benchmark_with_progress(catalog, table, strategy, strategy_name, &pb)?;
    pb.finish_with_message("Complete!");

    Ok(result)
}

/// Play every `(puzzle, difficulty)` pair in parallel, ticking `pb` per game
///
/// # Errors
/// Returns `SessionError` if a game cannot be started.
pub fn benchmark_with_progress<S: Strategy + Sync + ?Sized>(
    catalog: &Catalog,
    table: DifficultyTable,
    strategy: &S,
    strategy_name: &'static str,
    pb: &ProgressBar,
) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();

    let games: Vec<(&PuzzleContent, usize)> = catalog
        .iter()
        .flat_map(|(_, puzzle)| (1..=table.max_difficulty()).map(move |level| (puzzle, level)))
        .collect();

    let summaries = games
        .par_iter()
        .map(|&(puzzle, difficulty)| {
            let summary = play_automated(puzzle.clone(), difficulty, table, strategy);
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut levels: Vec<DifficultyStats> = (1..=table.max_difficulty())
        .map(DifficultyStats::new)
        .collect();
    for summary in &summaries {
        if let Some(stats) = levels.get_mut(summary.difficulty - 1) {
            stats.record(summary);
        }
    }

    let duration = start.elapsed();
    info!(
        strategy = strategy_name,
        games = summaries.len(),
        ?duration,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        strategy: strategy_name,
        levels,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::game::SessionState;
    use crate::solver::{CatalogStrategy, FrequencyStrategy, StrategyType};

    fn run<S: Strategy + Sync>(catalog: &Catalog, strategy: &S) -> BenchmarkResult {
        benchmark_with_progress(
            catalog,
            DifficultyTable::STANDARD,
            strategy,
            "test",
            &ProgressBar::hidden(),
        )
        .unwrap()
    }

    #[test]
    fn plays_every_puzzle_at_every_level() {
        let catalog = Catalog::embedded().unwrap();
        let strategy = StrategyType::from_name("catalog", catalog_words(&catalog));
        let result = run(&catalog, &strategy);

        assert_eq!(result.levels.len(), 4);
        assert_eq!(result.total_games(), catalog.len() * 4);
        for (i, level) in result.levels.iter().enumerate() {
            assert_eq!(level.difficulty, i + 1);
            assert_eq!(level.games, catalog.len());
            assert!(level.wins <= level.games);
            assert!((0.0..=1.0).contains(&level.win_rate()));
        }
    }

    #[test]
    fn known_single_word_is_always_won_flawlessly() {
        let catalog =
            Catalog::from_entries([(Category::Animals, "lion", "A king without a crown.")])
                .unwrap();
        let strategy = CatalogStrategy::new(catalog_words(&catalog));
        let result = run(&catalog, &strategy);

        assert_eq!(result.total_wins(), 4);
        for level in &result.levels {
            assert_eq!(level.total_mistakes, 0);
            assert!((level.average_score() - 64.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn frequency_strategy_loses_on_hardest_level() {
        let puzzle = PuzzleContent::new("jazz", "hint").unwrap();
        let summary =
            play_automated(puzzle, 4, DifficultyTable::STANDARD, &FrequencyStrategy).unwrap();

        // 'e' misses first and the single allowed mistake is spent
        assert_eq!(summary.state, SessionState::Lost);
        assert_eq!(summary.mistakes, 1);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn invalid_difficulty_is_rejected() {
        let puzzle = PuzzleContent::new("lion", "hint").unwrap();
        assert!(play_automated(puzzle, 9, DifficultyTable::STANDARD, &FrequencyStrategy).is_err());
    }

    #[test]
    fn empty_stats_average_to_zero() {
        let stats = DifficultyStats::new(1);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(stats.average_mistakes().abs() < f64::EPSILON);
        assert!(stats.average_score().abs() < f64::EPSILON);
    }
}
