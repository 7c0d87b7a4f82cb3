//! Candidate filtering
//!
//! The solver's only learning step: drop every code that could not have
//! produced the observed score.

use crate::core::{Code, Score};

/// Candidates that would have produced `observed` had they been the secret
///
/// Relative order is preserved and the input is left untouched.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Score) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Score::calculate(candidate, guess) == observed)
        .cloned()
        .collect()
}

/// In-place form of [`filter_candidates`] for callers that own the set
pub fn retain_consistent(candidates: &mut Vec<Code>, guess: &Code, observed: Score) {
    candidates.retain(|candidate| Score::calculate(candidate, guess) == observed);
}

/// Candidates consistent with every `(guess, score)` pair in `history`
#[must_use]
pub fn consistent_with_history<'a>(candidates: &'a [Code], history: &[(Code, Score)]) -> Vec<&'a Code> {
    candidates
        .iter()
        .filter(|&candidate| {
            history
                .iter()
                .all(|(guess, observed)| Score::calculate(candidate, guess) == *observed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scheme, generate_all};

    fn code(text: &str) -> Code {
        Code::parse(text, Scheme::CLASSIC).unwrap()
    }

    #[test]
    fn truthful_score_keeps_secret() {
        let space = generate_all(Scheme::CLASSIC);
        let guess = code("abcd");

        for secret in space.iter().step_by(37) {
            let observed = Score::calculate(secret, &guess);
            let kept = filter_candidates(&space, &guess, observed);
            assert!(kept.contains(secret), "lost {secret}");
            assert!(kept.len() < space.len());
        }
    }

    #[test]
    fn filter_preserves_order() {
        let space = generate_all(Scheme::CLASSIC);
        let guess = code("aabb");
        let kept = filter_candidates(&space, &guess, Score::new(1, 1));

        let positions: Vec<usize> = kept
            .iter()
            .map(|c| space.iter().position(|s| s == c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let space = generate_all(Scheme::CLASSIC);
        let before = space.clone();
        let _ = filter_candidates(&space, &code("abcd"), Score::new(0, 0));
        assert_eq!(space, before);
    }

    #[test]
    fn impossible_score_empties_set() {
        let space = generate_all(Scheme::CLASSIC);
        // Three right means one peg differs, which cannot leave it "wrong"
        let kept = filter_candidates(&space, &code("abcd"), Score::new(3, 1));
        assert!(kept.is_empty());
    }

    #[test]
    fn in_place_matches_pure_filter() {
        let space = generate_all(Scheme::CLASSIC);
        let guess = code("cdef");
        let observed = Score::new(0, 2);

        let mut owned = space.clone();
        retain_consistent(&mut owned, &guess, observed);
        assert_eq!(owned, filter_candidates(&space, &guess, observed));
    }

    #[test]
    fn repeated_truthful_filtering_shrinks_monotonically() {
        let space = generate_all(Scheme::CLASSIC);
        let secret = code("fbea");
        let mut candidates = space.clone();

        for guess in ["abcd", "aabb", "ccdd", "eeff", "fbea"] {
            let guess = code(guess);
            let before = candidates.len();
            retain_consistent(&mut candidates, &guess, Score::calculate(&secret, &guess));
            assert!(candidates.len() <= before);
            assert!(candidates.contains(&secret));
        }
        assert_eq!(candidates, vec![secret]);
    }

    #[test]
    fn history_filter_intersects_every_observation() {
        let space = generate_all(Scheme::CLASSIC);
        let secret = code("ddae");
        let history: Vec<(Code, Score)> = ["abcd", "bbee"]
            .iter()
            .map(|g| {
                let guess = code(g);
                let score = Score::calculate(&secret, &guess);
                (guess, score)
            })
            .collect();

        let kept = consistent_with_history(&space, &history);
        assert!(kept.contains(&&secret));

        let mut stepwise = space.clone();
        for (guess, score) in &history {
            retain_consistent(&mut stepwise, guess, *score);
        }
        assert_eq!(kept.into_iter().cloned().collect::<Vec<_>>(), stepwise);
    }

    #[test]
    fn empty_history_keeps_everything() {
        let space = generate_all(Scheme::CLASSIC);
        assert_eq!(consistent_with_history(&space, &[]).len(), space.len());
    }
}
