//! Codebreaking engine

use super::filter::retain_consistent;
use crate::core::{Code, Scheme, Score, generate_all};

/// What happened after a score was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The guess was the secret
    Solved { turns: usize },
    /// Candidates remain; play the next guess
    Continue { remaining: usize },
    /// No code is consistent with the scores given; `turns` guesses were played
    Exhausted { turns: usize },
}

/// Mastermind codebreaker
///
/// Owns the turn counter and the ordered candidate set for one game. The
/// next guess is always the head of the candidate set.
#[derive(Debug, Clone)]
pub struct Solver {
    scheme: Scheme,
    turn: usize,
    candidates: Vec<Code>,
}

impl Solver {
    /// Start a game over the full code space of `scheme`
    #[must_use]
    pub fn new(scheme: Scheme) -> Self {
        Self::with_candidates(scheme, generate_all(scheme))
    }

    /// Start a game over an explicit candidate list
    #[must_use]
    pub const fn with_candidates(scheme: Scheme, candidates: Vec<Code>) -> Self {
        Self {
            scheme,
            turn: 1,
            candidates,
        }
    }

    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Current turn number, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Codes still consistent with every score so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The guess to play this turn, or `None` once the set is exhausted
    #[must_use]
    pub fn next_guess(&self) -> Option<&Code> {
        self.candidates.first()
    }

    /// Record the score received for [`Self::next_guess`]
    ///
    /// On a non-winning score the candidate set is filtered, the played
    /// guess is dropped and the turn advances.
    pub fn record(&mut self, score: Score) -> Progress {
        if self.candidates.is_empty() {
            return Progress::Exhausted {
                turns: self.turn - 1,
            };
        }

        if score.is_perfect(self.scheme.pegs()) {
            return Progress::Solved { turns: self.turn };
        }

        let guess = self.candidates.remove(0);
        retain_consistent(&mut self.candidates, &guess, score);
        self.turn += 1;

        if self.candidates.is_empty() {
            Progress::Exhausted {
                turns: self.turn - 1,
            }
        } else {
            Progress::Continue {
                remaining: self.candidates.len(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, Scheme::CLASSIC).unwrap()
    }

    fn play_out(secret: &Code) -> (usize, Vec<usize>) {
        let mut solver = Solver::new(Scheme::CLASSIC);
        let mut sizes = vec![solver.candidates().len()];

        loop {
            let guess = solver.next_guess().cloned().unwrap();
            match solver.record(Score::calculate(secret, &guess)) {
                Progress::Solved { turns } => return (turns, sizes),
                Progress::Continue { remaining } => sizes.push(remaining),
                Progress::Exhausted { .. } => panic!("truthful scores exhausted the space"),
            }
        }
    }

    #[test]
    fn first_guess_is_opening() {
        let solver = Solver::new(Scheme::CLASSIC);
        assert_eq!(solver.turn(), 1);
        assert_eq!(solver.next_guess(), Some(&code("abcd")));
        assert_eq!(solver.candidates().len(), 1296);
    }

    #[test]
    fn opening_secret_solved_in_one_turn() {
        let mut solver = Solver::new(Scheme::CLASSIC);
        assert_eq!(solver.record(Score::new(4, 0)), Progress::Solved { turns: 1 });
    }

    #[test]
    fn played_guess_is_dropped() {
        let mut solver = Solver::new(Scheme::CLASSIC);
        let played = solver.next_guess().cloned().unwrap();

        let progress = solver.record(Score::new(0, 0));
        assert!(matches!(progress, Progress::Continue { .. }));
        assert_eq!(solver.turn(), 2);
        assert!(!solver.candidates().contains(&played));
        assert_ne!(solver.next_guess(), Some(&played));
    }

    #[test]
    fn solves_every_sampled_secret_without_losing_it() {
        let space = generate_all(Scheme::CLASSIC);
        for secret in space.iter().step_by(53) {
            let (turns, sizes) = play_out(secret);
            assert!(turns >= 1);
            assert!(sizes.windows(2).all(|w| w[1] < w[0]), "{secret}: {sizes:?}");
        }
    }

    #[test]
    fn impossible_score_exhausts() {
        let mut solver = Solver::new(Scheme::CLASSIC);
        assert_eq!(solver.record(Score::new(3, 1)), Progress::Exhausted { turns: 1 });
        assert!(solver.next_guess().is_none());
        assert_eq!(solver.record(Score::new(0, 0)), Progress::Exhausted { turns: 1 });
    }

    #[test]
    fn inconsistent_scores_exhaust_eventually() {
        let mut solver = Solver::new(Scheme::CLASSIC);
        // Claim no color in abcd, then claim a perfect miss on every later guess
        let mut progress = solver.record(Score::new(0, 0));
        while let Progress::Continue { .. } = progress {
            progress = solver.record(Score::new(0, 4));
        }
        assert!(matches!(progress, Progress::Exhausted { .. }));
    }

    #[test]
    fn explicit_candidates_are_respected() {
        let candidates = vec![code("ffff"), code("eeee")];
        let mut solver = Solver::with_candidates(Scheme::CLASSIC, candidates);
        assert_eq!(solver.next_guess(), Some(&code("ffff")));

        let progress = solver.record(Score::calculate(&code("eeee"), &code("ffff")));
        assert_eq!(progress, Progress::Continue { remaining: 1 });
        assert_eq!(solver.next_guess(), Some(&code("eeee")));
        assert_eq!(solver.record(Score::new(4, 0)), Progress::Solved { turns: 2 });
    }
}
