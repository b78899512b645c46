//! Display functions for command results

use super::formatters::{create_progress_bar, format_score, format_tree};
use crate::commands::{AnalysisResult, SweepRow, SweepSummary, TreeResult, VerifyReport};
use colored::Colorize;

/// Print the result of analyzing a candidate set
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        format!("[{}]", result.candidates).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎯 Best first guess: {}",
        result.guess.to_string().bright_green().bold()
    );
    println!(
        "   Worst case:       {}",
        format!("{} guesses", result.score.worst).bright_yellow()
    );
    println!("   Average:          {:.3} guesses", result.average_guesses);
    println!("   Total guesses:    {}", result.score.total);
    println!("   Candidates:       {}", result.candidates.size());
    println!("   Cached shapes:    {}", result.cache_entries);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}

/// Print a decision tree with a short header
pub fn print_tree_result(result: &TreeResult) {
    println!(
        "# {}",
        format_score(result.tree.score, result.tree.candidates.size()).bright_cyan()
    );
    print!("{}", format_tree(&result.tree));
    println!(
        "# Cache size: {} ({} nodes, {:.2}s)\n",
        result.cache_entries,
        result.tree.node_count(),
        result.duration.as_secs_f64()
    );
}

/// Print one row of a range sweep
pub fn print_sweep_row(row: &SweepRow) {
    let max = row.candidates.highest().unwrap_or_default();
    println!(
        "[0, {:>5}]  worst {}  avg {:>6.3}  guess {:>5}  cache {:>9}  {:>8.3}s",
        max,
        row.score.worst.to_string().bright_yellow().bold(),
        row.average_guesses,
        row.guess.to_string().green(),
        row.cache_entries,
        row.elapsed.as_secs_f64()
    );
}

/// Print the totals of a finished sweep
pub fn print_sweep_summary(summary: &SweepSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Swept {} ranges in {:.2}s, {} shapes cached",
        summary.ranges,
        summary.duration.as_secs_f64(),
        summary.cache_entries
    );
}

/// Print a verification report
pub fn print_verify_report(report: &VerifyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY VERIFICATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Candidates:       {}", report.candidates);
    println!("   Tree nodes:       {}", report.tree_nodes);
    println!(
        "   Worst case:       {}",
        format!("{}", report.observed.worst).yellow()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", report.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = report
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (&guesses, &count) in &report.guess_distribution {
        let pct = count as f64 / report.candidates as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    println!();
    if report.is_consistent() {
        println!(
            "{}",
            format!("✅ Strategy reproduces its score ({})", report.expected)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Expected {}, observed {} ({} candidates unreached)",
                report.expected,
                report.observed,
                report.unreached.len()
            )
            .red()
            .bold()
        );
    }
}
