//! Display functions for command results

use super::formatters::{create_progress_bar, format_tile};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Rack;
use colored::Colorize;

/// Print a rack with tile scores
pub fn print_rack(rack: &Rack) {
    let tiles: Vec<String> = rack
        .tiles()
        .iter()
        .map(|&tile| {
            let label = format_tile(tile);
            if tile.is_blank() {
                label.bright_black().to_string()
            } else {
                label.bright_yellow().bold().to_string()
            }
        })
        .collect();
    println!("Rack: {}", tiles.join(" "));
}

/// Print the result of solving a rack
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    print_rack(&result.rack);
    match result.seed {
        Some(seed) => println!("Seed: {}", seed.to_string().bright_cyan()),
        None => println!("Seed: {}", "none (the letter bag cannot deal this rack)".bright_black()),
    }
    println!("{}", "─".repeat(60).cyan());

    if result.top_words.is_empty() {
        println!("\n{}", "No playable words".red().bold());
    } else {
        println!();
        for (i, entry) in result.top_words.iter().enumerate() {
            let word = if i == 0 {
                entry.word.bright_green().bold()
            } else {
                entry.word.normal()
            };
            println!("{:>4}. {:<7} {:>3}", i + 1, word, entry.score);
        }
    }

    println!(
        "\n{} words playable, {} trie nodes visited in {:.2?}",
        result.stats.words_found, result.stats.nodes_visited, result.stats.elapsed
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks solved:     {}", result.total_racks);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Racks/second:     {}",
        format!("{:.1}", result.racks_per_second)
            .bright_yellow()
            .bold()
    );
    println!("   Nodes visited:    {}", result.total_nodes);

    println!("\n📈 {}", "Racks:".bright_cyan().bold());
    println!(
        "   Average top score:   {}",
        format!("{:.2}", result.average_top_score).green()
    );
    println!("   Average words found: {:.1}", result.average_words_found);

    let playable = result.total_racks - result.empty_racks;
    let bar = create_progress_bar(playable as f64, result.total_racks as f64, 40);
    println!(
        "   Playable racks:      {} {playable}/{}",
        bar.green(),
        result.total_racks
    );

    if let Some(best) = &result.best_rack
        && let Some((word, score)) = &best.best
    {
        println!("\n✨ {}", "Best Rack".green().bold());
        println!(
            "   {} (seed {}): {} for {}",
            best.rack.to_string().bright_white().bold(),
            best.seed,
            word.bright_green().bold(),
            score.to_string().bright_yellow()
        );
    }
}
