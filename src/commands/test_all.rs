//! Test all secrets - exhaustive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use crate::core::{Code, Scheme, Score, generate_all};
use crate::output::formatters::turns_label;
use crate::solver::{Progress, Solver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from solving a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Code,
    pub turns: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    pub hardest_secrets: Vec<(Code, usize)>,
}

/// Play one self-play game against `secret` and count the turns
#[must_use]
pub fn play_secret(secret: &Code, scheme: Scheme) -> SecretTestResult {
    let mut solver = Solver::new(scheme);

    loop {
        let Some(guess) = solver.next_guess() else {
            return SecretTestResult {
                secret: secret.clone(),
                turns: solver.turn() - 1,
                success: false,
            };
        };

        let score = Score::calculate(secret, guess);
        match solver.record(score) {
            Progress::Solved { turns } => {
                return SecretTestResult {
                    secret: secret.clone(),
                    turns,
                    success: true,
                };
            }
            Progress::Exhausted { turns } => {
                return SecretTestResult {
                    secret: secret.clone(),
                    turns,
                    success: false,
                };
            }
            Progress::Continue { .. } => {}
        }
    }
}

/// Run the solver on every secret (or the first `limit` in generation order)
///
/// Games are independent and run in parallel.
#[must_use]
pub fn run_test_all(scheme: Scheme, limit: Option<usize>) -> TestAllStatistics {
    let space = generate_all(scheme);
    let secrets = &space[..limit.unwrap_or(space.len()).min(space.len())];

    let pb = ProgressBar::new(secrets.len() as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let result = play_secret(secret, scheme);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

/// Aggregate per-secret results
#[must_use]
pub fn summarize(results: &[SecretTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut turn_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *turn_distribution.entry(result.turns).or_insert(0) += 1;
    }

    let total_turns: usize = solved.iter().map(|r| r.turns).sum();
    let average_turns = if solved.is_empty() {
        0.0
    } else {
        total_turns as f64 / solved.len() as f64
    };

    let max_turns = solved.iter().map(|r| r.turns).max().unwrap_or(0);
    let min_turns = solved.iter().map(|r| r.turns).min().unwrap_or(0);

    let mut hardest_secrets: Vec<(Code, usize)> = solved
        .iter()
        .map(|r| (r.secret.clone(), r.turns))
        .collect();
    hardest_secrets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        turn_distribution,
        total_time,
        average_turns,
        max_turns,
        min_turns,
        hardest_secrets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    if stats.total_secrets == 0 {
        return;
    }
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average turns:        {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!("  Best case:            {}", turns_label(stats.min_turns).green());
    println!("  Worst case:           {}", turns_label(stats.max_turns).yellow());
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    let max_count = stats.turn_distribution.values().copied().max().unwrap_or(1);
    for turns in 1..=stats.max_turns {
        let count = stats.turn_distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {turns:2} turns: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, turns) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({})", secret.to_string().yellow(), turns_label(*turns));
        }
    }
}
