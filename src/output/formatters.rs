//! Formatting utilities for terminal output

use crate::core::Score;

/// "1 turn", "4 turns"
#[must_use]
pub fn turns_label(turns: usize) -> String {
    if turns == 1 {
        "1 turn".to_string()
    } else {
        format!("{turns} turns")
    }
}

/// Format a score as key pegs: `●` right, `○` wrong, `·` empty
#[must_use]
pub fn score_to_pegs(score: Score, pegs: usize) -> String {
    let right = usize::from(score.right());
    let wrong = usize::from(score.wrong());
    let empty = pegs.saturating_sub(right + wrong);

    format!("{}{}{}", "●".repeat(right), "○".repeat(wrong), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
