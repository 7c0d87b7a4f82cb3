//! Mastermind score calculation and parsing
//!
//! A score is the `(right, wrong)` feedback for a guess:
//! - right = pegs with the correct color in the correct position
//! - wrong = remaining pegs whose color appears among the secret's remaining
//!   pegs, each secret peg consumed at most once

use super::{Code, MAX_COLORS};
use std::fmt;
use thiserror::Error;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    right: u8,
    wrong: u8,
}

/// Error type for human-entered scores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("score must be exactly two digits, got {0} characters")]
    InvalidLength(usize),
    #[error("'{0}' is not a digit")]
    NotADigit(char),
    #[error("{value} is more than the {pegs} pegs in a code")]
    OutOfRange { value: u8, pegs: usize },
    #[error("{right} right plus {wrong} wrong is more than the {pegs} pegs in a code")]
    TooMany { right: u8, wrong: u8, pegs: usize },
}

impl Score {
    /// Create a score from its two counts
    #[inline]
    #[must_use]
    pub const fn new(right: u8, wrong: u8) -> Self {
        Self { right, wrong }
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn right(self) -> u8 {
        self.right
    }

    /// Pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn wrong(self) -> u8 {
        self.wrong
    }

    /// Check whether this score means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, pegs: usize) -> bool {
        self.right as usize == pegs
    }

    /// Score `guess` against `secret`
    ///
    /// Exact matches are removed first; the leftover pegs of each code are
    /// then matched by color as a multiset intersection. The result is the
    /// same whichever argument is treated as the secret.
    ///
    /// # Panics
    /// Panics in debug mode if the codes differ in length
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Scheme, Score};
    ///
    /// let secret = Code::parse("abcd", Scheme::CLASSIC).unwrap();
    /// let guess = Code::parse("aaab", Scheme::CLASSIC).unwrap();
    ///
    /// // a in position 0 is right; the guess's b matches the secret's b
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(1, 1));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes must be the same length");

        let mut right = 0u8;
        let mut secret_left = [0u8; MAX_COLORS];
        let mut guess_left = [0u8; MAX_COLORS];

        for (&s, &g) in secret.pegs().iter().zip(guess.pegs()) {
            if s == g {
                right += 1;
            } else {
                secret_left[s as usize] += 1;
                guess_left[g as usize] += 1;
            }
        }

        let wrong = secret_left
            .iter()
            .zip(&guess_left)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { right, wrong }
    }

    /// Parse a human-entered score such as `"21"` (two right, one wrong)
    ///
    /// A trailing line terminator is ignored; any other whitespace is an
    /// error. Each digit and their sum
    /// must be at most `pegs`.
    ///
    /// # Errors
    /// Returns `ScoreError` for anything other than two in-range digits.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// assert_eq!(Score::parse("22", 4), Ok(Score::new(2, 2)));
    /// assert_eq!(Score::parse("40\n", 4), Ok(Score::new(4, 0)));
    /// assert!(Score::parse(" 22", 4).is_err());
    /// assert!(Score::parse("50", 4).is_err());
    /// assert!(Score::parse("32", 4).is_err());
    /// ```
    pub fn parse(input: &str, pegs: usize) -> Result<Self, ScoreError> {
        let chars: Vec<char> = input.trim_end_matches(['\r', '\n']).chars().collect();

        let &[right, wrong] = chars.as_slice() else {
            return Err(ScoreError::InvalidLength(chars.len()));
        };

        let digit = |ch: char| -> Result<u8, ScoreError> {
            let value = ch.to_digit(10).ok_or(ScoreError::NotADigit(ch))? as u8;
            if value as usize > pegs {
                return Err(ScoreError::OutOfRange { value, pegs });
            }
            Ok(value)
        };

        let right = digit(right)?;
        let wrong = digit(wrong)?;

        if right as usize + wrong as usize > pegs {
            return Err(ScoreError::TooMany { right, wrong, pegs });
        }

        Ok(Self { right, wrong })
    }

    /// The two counts written back to back, e.g. `"21"`
    #[must_use]
    pub fn digits(self) -> String {
        format!("{}{}", self.right, self.wrong)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.right, self.wrong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Scheme, generate_all};

    fn code(text: &str) -> Code {
        Code::parse(text, Scheme::CLASSIC).unwrap()
    }

    #[test]
    fn identical_codes_score_perfect() {
        for text in ["abcd", "aaaa", "fedc", "abab"] {
            let c = code(text);
            assert_eq!(Score::calculate(&c, &c), Score::new(4, 0));
            assert!(Score::calculate(&c, &c).is_perfect(4));
        }
    }

    #[test]
    fn repeated_guess_pegs_consume_secret_once() {
        // a right at position 0; leftover secret {b,c,d}, leftover guess {a,a,b}
        let score = Score::calculate(&code("abcd"), &code("aaab"));
        assert_eq!(score, Score::new(1, 1));
    }

    #[test]
    fn all_wrong_positions() {
        let score = Score::calculate(&code("abcd"), &code("dcba"));
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn no_shared_colors() {
        let score = Score::calculate(&code("aabb"), &code("ccdd"));
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn exact_matches_take_priority() {
        // The secret's single a is claimed by the exact match at position 0
        let score = Score::calculate(&code("abcd"), &code("aeaa"));
        assert_eq!(score, Score::new(1, 0));

        let score = Score::calculate(&code("aabb"), &code("abab"));
        assert_eq!(score, Score::new(2, 2));
    }

    #[test]
    fn score_is_symmetric_over_space() {
        let space = generate_all(Scheme::CLASSIC);
        let probes = [code("abcd"), code("aabb"), code("fffa"), code("cece")];

        for probe in &probes {
            for other in &space {
                let forward = Score::calculate(probe, other);
                let backward = Score::calculate(other, probe);
                assert_eq!(forward, backward, "{probe} vs {other}");
                assert!(forward.right() + forward.wrong() <= 4);
                assert_eq!(forward.is_perfect(4), probe == other);
            }
        }
    }

    #[test]
    fn parse_accepts_valid_scores() {
        assert_eq!(Score::parse("22", 4), Ok(Score::new(2, 2)));
        assert_eq!(Score::parse("40", 4), Ok(Score::new(4, 0)));
        assert_eq!(Score::parse("04", 4), Ok(Score::new(0, 4)));
        assert_eq!(Score::parse("00", 4), Ok(Score::new(0, 0)));
        assert_eq!(Score::parse("13\r\n", 4), Ok(Score::new(1, 3)));
        assert_eq!(Score::parse("13\n", 4), Ok(Score::new(1, 3)));
    }

    #[test]
    fn parse_rejects_padding() {
        assert_eq!(Score::parse(" 22", 4), Err(ScoreError::InvalidLength(3)));
        assert_eq!(Score::parse("22 ", 4), Err(ScoreError::InvalidLength(3)));
        assert_eq!(Score::parse(" 13\r\n", 4), Err(ScoreError::InvalidLength(3)));
        assert_eq!(Score::parse("\t2\t2", 4), Err(ScoreError::InvalidLength(4)));
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert_eq!(Score::parse("", 4), Err(ScoreError::InvalidLength(0)));
        assert_eq!(Score::parse("2", 4), Err(ScoreError::InvalidLength(1)));
        assert_eq!(Score::parse("220", 4), Err(ScoreError::InvalidLength(3)));
        assert_eq!(Score::parse("2 2", 4), Err(ScoreError::InvalidLength(3)));
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(Score::parse("5a", 4), Err(ScoreError::OutOfRange { value: 5, pegs: 4 }));
        assert_eq!(Score::parse("1a", 4), Err(ScoreError::NotADigit('a')));
        assert_eq!(Score::parse("-1", 4), Err(ScoreError::NotADigit('-')));
        // Non-ASCII digits are not accepted
        assert!(Score::parse("١٢", 4).is_err());
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(Score::parse("50", 4), Err(ScoreError::OutOfRange { value: 5, pegs: 4 }));
        assert_eq!(Score::parse("05", 4), Err(ScoreError::OutOfRange { value: 5, pegs: 4 }));
        assert_eq!(
            Score::parse("32", 4),
            Err(ScoreError::TooMany {
                right: 3,
                wrong: 2,
                pegs: 4
            })
        );
    }

    #[test]
    fn display_formats() {
        let score = Score::new(2, 1);
        assert_eq!(score.to_string(), "2-1");
        assert_eq!(score.digits(), "21");
    }
}
