//! Guess analysis command
//!
//! Shows how a guess would split the current candidate set by score.

use crate::core::{Code, CodeError, Scheme, Score, ScoreError, generate_all};
use crate::solver::consistent_with_history;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub pegs: usize,
    pub total_candidates: usize,
    /// Every reachable score with its candidate count, largest first
    pub partitions: Vec<(Score, usize)>,
    /// Whether the guess itself could still be the secret
    pub is_candidate: bool,
}

impl AnalysisResult {
    /// Candidates left in the worst case
    #[must_use]
    pub fn largest_partition(&self) -> usize {
        self.partitions.first().map_or(0, |&(_, count)| count)
    }

    /// Candidates left on average, weighting each score by its likelihood
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total_candidates == 0 {
            return 0.0;
        }
        let squares: usize = self.partitions.iter().map(|&(_, n)| n * n).sum();
        squares as f64 / self.total_candidates as f64
    }
}

/// Error type for the analyze command
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid guess: {0}")]
    Code(#[from] CodeError),
    #[error("invalid score: {0}")]
    Score(#[from] ScoreError),
    #[error("observation '{0}' should look like GUESS=SCORE, e.g. abcd=12")]
    MalformedObservation(String),
    #[error("no code is consistent with the observations given")]
    NoCandidates,
}

/// Parse an observation such as `abcd=12`
///
/// # Errors
///
/// Returns an error if the text is not `GUESS=SCORE` or either side is invalid.
pub fn parse_observation(text: &str, scheme: Scheme) -> Result<(Code, Score), AnalyzeError> {
    let (guess, score) = text
        .split_once('=')
        .ok_or_else(|| AnalyzeError::MalformedObservation(text.to_string()))?;

    let guess = Code::parse(guess.trim(), scheme)?;
    let score = Score::parse(score.trim(), scheme.pegs())?;
    Ok((guess, score))
}

/// Count candidates per score for `guess`
#[must_use]
pub fn partition_by_score(guess: &Code, candidates: &[&Code]) -> FxHashMap<Score, usize> {
    let mut partitions = FxHashMap::default();
    for candidate in candidates {
        *partitions.entry(Score::calculate(candidate, guess)).or_insert(0) += 1;
    }
    partitions
}

/// Analyze `guess` against every code consistent with `observations`
///
/// # Errors
///
/// Returns an error if the guess or any observation is invalid, or if the
/// observations rule out every code.
pub fn analyze_guess(
    guess: &str,
    observations: &[String],
    scheme: Scheme,
) -> Result<AnalysisResult, AnalyzeError> {
    let guess = Code::parse(guess.trim(), scheme)?;
    let history = observations
        .iter()
        .map(|text| parse_observation(text, scheme))
        .collect::<Result<Vec<_>, _>>()?;

    let space = generate_all(scheme);
    let candidates = consistent_with_history(&space, &history);
    if candidates.is_empty() {
        return Err(AnalyzeError::NoCandidates);
    }

    let is_candidate = candidates.contains(&&guess);
    let mut partitions: Vec<(Score, usize)> = partition_by_score(&guess, &candidates)
        .into_iter()
        .collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    Ok(AnalysisResult {
        guess,
        pegs: scheme.pegs(),
        total_candidates: candidates.len(),
        partitions,
        is_candidate,
    })
}
