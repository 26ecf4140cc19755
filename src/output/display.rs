//! Display functions for command results

use crate::commands::BenchmarkResult;
use crate::core::DifficultyTable;
use colored::Colorize;

/// Print the difficulty table
pub fn print_levels(table: DifficultyTable) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DIFFICULTY LEVELS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, &mistakes) in table.levels().iter().enumerate() {
        let bar = format!(
            "{}{}",
            "█".repeat(mistakes as usize).red(),
            "░"
                .repeat((table.base_budget() as usize).saturating_sub(mistakes as usize))
                .bright_black()
        );
        println!(
            "   {} {bar} {mistakes} mistakes",
            format!("{}:", i + 1).bright_yellow().bold()
        );
    }

    println!(
        "\n   Winning with X mistakes scores 2^({}-X) points.",
        table.base_budget()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_games();
    let wins = result.total_wins();

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Strategy:      {}", result.strategy.bright_yellow());
    println!("   Games played:  {total}");
    println!(
        "   Games won:     {}",
        format!("{wins}/{total}").bright_yellow().bold()
    );
    println!("   Time taken:    {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "By difficulty:".bright_cyan().bold());
    for level in &result.levels {
        let pct = level.win_rate() * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {}: {bar} {pct:5.1}%", level.difficulty);
        println!(
            "      avg mistakes {:.2}, avg score {}",
            level.average_mistakes(),
            format!("{:.1}", level.average_score()).bright_yellow()
        );
    }
}
