//! Hangman - CLI
//!
//! Hangman game with TUI and line-oriented modes, plus a strategy benchmark.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    catalog::{Catalog, CatalogError, Category, Choice, parse_difficulty},
    commands::{SimpleConfig, catalog_words, run_benchmark, run_simple},
    console::TerminalConsole,
    core::DifficultyTable,
    logging::init_tracing,
    output::{print_benchmark_result, print_levels},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category: animals, fruits, nature or random (asked when omitted)
    #[arg(short, long, global = true)]
    category: Option<Choice<Category>>,

    /// Difficulty: 1 (easiest) to 4, or random (asked when omitted)
    #[arg(short, long, global = true, value_parser = difficulty_arg)]
    difficulty: Option<Choice<usize>>,

    /// Debug logging to stderr (HANGMAN_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, without TUI)
    Simple,

    /// Show the difficulty levels and scoring
    Levels,

    /// Play every catalog word at every difficulty with an automated strategy
    Benchmark {
        /// Strategy: catalog (default), frequency, random
        #[arg(short, long, default_value = "catalog")]
        strategy: String,
    },
}

fn difficulty_arg(value: &str) -> Result<Choice<usize>, CatalogError> {
    parse_difficulty(value, DifficultyTable::STANDARD)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let table = DifficultyTable::STANDARD;
    let catalog = Catalog::embedded()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(catalog, table, cli.category, cli.difficulty),
        Commands::Simple => run_simple_command(&catalog, table, cli.category, cli.difficulty),
        Commands::Levels => {
            print_levels(table);
            Ok(())
        }
        Commands::Benchmark { strategy } => run_benchmark_command(&strategy, &catalog, table),
    }
}

fn run_play_command(
    catalog: Catalog,
    table: DifficultyTable,
    category: Option<Choice<Category>>,
    difficulty: Option<Choice<usize>>,
) -> Result<()> {
    use hangman::interactive::run_tui;

    let stats = run_tui(catalog, table, category, difficulty)?;
    if stats.total_games > 0 {
        println!(
            "Games: {} | Won: {} | Total score: {}",
            stats.total_games, stats.games_won, stats.total_score
        );
    }
    Ok(())
}

fn run_simple_command(
    catalog: &Catalog,
    table: DifficultyTable,
    category: Option<Choice<Category>>,
    difficulty: Option<Choice<usize>>,
) -> Result<()> {
    let config = SimpleConfig {
        category,
        difficulty,
        table,
    };
    let mut console = TerminalConsole::stdio();

    run_simple(&mut console, config, catalog, &mut rand::rng())?;
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    catalog: &Catalog,
    table: DifficultyTable,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name, catalog_words(catalog));
    println!("Running benchmark with the {} strategy...", strategy.name());

    let result = run_benchmark(catalog, table, &strategy, strategy.name())?;
    print_benchmark_result(&result);
    Ok(())
}
