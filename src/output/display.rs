//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs, turns_label};
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let pegs = result.scheme.pegs();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} ({})",
            turn,
            step.guess,
            score_to_pegs(step.score, pegs),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Narrowed:   {reduction:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", turns_label(result.steps.len()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve after {}", turns_label(result.steps.len()))
                .red()
                .bold()
        );
    }
}

/// Print the score partition of an analyzed guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible secrets{}:",
        result.total_candidates,
        if result.is_candidate {
            ""
        } else {
            " (guess itself is ruled out)"
        }
    );
    println!("   Worst case:  {} candidates remain", result.largest_partition());
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining()
    );

    println!("\n📈 {}", "Score partitions:".bright_cyan().bold());
    for &(score, count) in &result.partitions {
        let bar = create_progress_bar(count as f64, result.largest_partition() as f64, 30);
        println!(
            "   {} {}  [{}] {count:5}",
            score_to_pegs(score, result.pegs),
            score,
            bar.green()
        );
    }
}
