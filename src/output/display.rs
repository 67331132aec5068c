//! Display functions for command results

use super::formatters::spaced_pattern;
use crate::chooser::GameStatus;
use crate::commands::{BenchmarkResult, GameRecord};
use colored::Colorize;

/// Print a finished automated game, turn by turn
pub fn print_game_record(record: &GameRecord) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Automated game: {} letters",
        record.word.len().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        let verdict = if turn.occurrences == 0 {
            "miss".red()
        } else {
            format!("{} hit", turn.occurrences).green()
        };
        println!(
            "Turn {:>2}: {}  {:<24} {:>8}  ({} left)",
            i + 1,
            turn.letter.to_ascii_uppercase(),
            spaced_pattern(&turn.pattern),
            verdict,
            turn.guesses_remaining
        );
    }

    println!();
    let word = record.word.text().to_uppercase();
    match record.status {
        GameStatus::Won => println!(
            "{}",
            format!(
                "✅ Guessed {word} in {} turns ({} misses)",
                record.turns.len(),
                record.misses()
            )
            .green()
            .bold()
        ),
        GameStatus::Lost | GameStatus::Active => println!(
            "{}",
            format!("❌ Ran out of guesses; the word was {word}")
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Chooser:          {:?}", result.kind);
    println!("   Games played:     {}", result.games);
    println!(
        "   Guesser wins:     {} ({})",
        result.wins.to_string().green(),
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Guesser losses:   {}", result.losses.to_string().red());
    println!("   Average misses:   {:.2}", result.average_misses);

    println!("\n📈 {}", "Miss distribution:".bright_cyan().bold());
    let widest = result.miss_distribution.values().copied().max().unwrap_or(0);
    for (misses, count) in &result.miss_distribution {
        let bar_len = if widest == 0 { 0 } else { count * 40 / widest };
        println!(
            "   {misses:>2} misses: {:<40} {count}",
            "█".repeat(bar_len).green()
        );
    }

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Total time:       {:.2?}", result.duration);
    println!("   Games/second:     {:.1}", result.games_per_second);
}
