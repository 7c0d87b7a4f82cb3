//! Secret solving command
//!
//! Plays the solver against a known secret and records the solution path.

use crate::core::{Code, CodeError, Scheme, Score};
use crate::solver::{Progress, Solver};

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Code,
    pub scheme: Scheme,
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve the secret written as `secret`
///
/// # Errors
///
/// Returns an error if `secret` is not a valid code for `scheme`.
pub fn solve_secret(secret: &str, scheme: Scheme) -> Result<SolveResult, CodeError> {
    let secret = Code::parse(secret.trim(), scheme)?;
    Ok(solve_code(&secret, scheme))
}

/// Solve an already-parsed secret
#[must_use]
pub fn solve_code(secret: &Code, scheme: Scheme) -> SolveResult {
    let mut solver = Solver::new(scheme);
    let mut steps = Vec::new();

    let success = loop {
        let Some(guess) = solver.next_guess().cloned() else {
            break false;
        };
        let candidates_before = solver.candidates().len();
        let score = Score::calculate(secret, &guess);
        let progress = solver.record(score);

        let candidates_after = match progress {
            Progress::Solved { .. } => 1,
            _ => solver.candidates().len(),
        };
        steps.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after,
        });

        match progress {
            Progress::Solved { .. } => break true,
            Progress::Exhausted { .. } => break false,
            Progress::Continue { .. } => {}
        }
    };

    SolveResult {
        success,
        steps,
        secret: secret.clone(),
        scheme,
    }
}
