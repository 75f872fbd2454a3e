//! Display functions for command results

use super::formatters::{create_progress_bar, format_word_list, tree_outline};
use crate::commands::{BenchmarkResult, TreeStats};
use crate::core::{RotationCase, RotationCounter};
use crate::dictionary::{Dictionary, LoadReport};
use colored::Colorize;

/// Print the summary line after loading a word list
pub fn print_load_report(report: &LoadReport) {
    println!(
        "{} ({} words, {} duplicates skipped)",
        "Dictionary loaded successfully.".green(),
        report.inserted,
        report.duplicates
    );
}

/// Print the result of a similar-words query
pub fn print_similar(word: &str, similar: &[String]) {
    println!(
        "Similar words to {}: {}",
        word.bright_yellow().bold(),
        format_word_list(similar)
    );
}

/// Print tree statistics and the top of the tree
pub fn print_stats(stats: &TreeStats, dict: &Dictionary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TREE STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Shape:".bright_cyan().bold());
    println!("   Words:            {}", stats.words);
    println!("   Duplicates:       {} skipped", stats.duplicates_skipped);
    println!(
        "   Root:             {}",
        stats.root.as_deref().unwrap_or("(empty)").bright_yellow()
    );

    let bar = create_progress_bar(
        f64::from(stats.height.max(0)),
        stats.height_bound.max(1.0),
        30,
    );
    let verdict = if stats.within_bound() {
        "within AVL bound".green()
    } else {
        "exceeds AVL bound".red()
    };
    println!(
        "   Height:           [{}] {} / {:.2} ({verdict})",
        bar.green(),
        stats.height,
        stats.height_bound
    );

    match &stats.violation {
        None => println!("   Invariants:       {}", "order, heights, balance OK".green()),
        Some(violation) => println!("   Invariants:       {}", violation.to_string().red()),
    }

    println!("\n📈 {}", "Nodes per level:".bright_cyan().bold());
    let widest = stats.level_widths.iter().copied().max().unwrap_or(1);
    for (depth, &width) in stats.level_widths.iter().enumerate() {
        let bar = create_progress_bar(width as f64, widest as f64, 40);
        println!("   {depth:2}: {} {width}", bar.green());
    }

    print_rotation_counts(&stats.rotations);

    println!("\n🌳 {}", "Top of tree:".bright_cyan().bold());
    for line in tree_outline(dict.root(), 3) {
        println!("   {line}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Operations:       {}", result.operations);
    println!("   Inserts:          {}", result.inserts);
    println!("   Deletes:          {}", result.deletes);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Ops/second:       {}",
        format!("{:.0}", result.ops_per_second).bright_yellow().bold()
    );

    println!("\n🌳 {}", "Final tree:".bright_cyan().bold());
    println!("   Keys:             {}", result.final_len);
    println!(
        "   Height:           {} (bound {:.2})",
        result.final_height, result.height_bound
    );

    let check = if result.mismatches == 0 && result.valid {
        "✅ matches BTreeSet, invariants hold".green().bold()
    } else {
        format!(
            "❌ {} mismatches, invariants {}",
            result.mismatches,
            if result.valid { "hold" } else { "broken" }
        )
        .red()
        .bold()
    };
    println!("   Check:            {check}");

    print_rotation_counts(&result.rotations);

    println!("\n🔎 {}", "Similar words:".bright_cyan().bold());
    println!(
        "   Queries:          {} ({} matches)",
        result.similar_queries, result.similar_found
    );
    println!(
        "   Time taken:       {:.3}ms",
        result.similar_duration.as_secs_f64() * 1000.0
    );
}

fn print_rotation_counts(counter: &RotationCounter) {
    println!("\n↻ {}", "Rebalances:".bright_cyan().bold());
    for case in RotationCase::ALL {
        println!("   {:<26} {}", case.to_string(), counter.count(case));
    }
    println!(
        "   {:<26} {} ({} single rotations)",
        "Total",
        counter.total(),
        counter.rotations()
    );
    println!("   {:<26} {}", "Double rotations", counter.double_rotations());
}
