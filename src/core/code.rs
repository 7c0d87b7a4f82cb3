//! Mastermind code representation
//!
//! A Code is an ordered, fixed-length row of pegs. Pegs are stored as
//! zero-based color indices and rendered as lowercase letters (`0` is `a`).

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Largest supported alphabet: one color per lowercase ASCII letter
pub const MAX_COLORS: usize = 26;

/// Color and peg counts that define a code space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scheme {
    colors: u8,
    pegs: u8,
}

/// Error type for unsupported schemes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    #[error("scheme needs between 2 and {MAX_COLORS} colors, got {0}")]
    InvalidColors(usize),
    #[error("scheme needs at least one peg")]
    NoPegs,
    #[error("scheme supports at most 255 pegs, got {0}")]
    TooManyPegs(usize),
    #[error("{colors} colors and {pegs} pegs give too many codes to enumerate")]
    SpaceTooLarge { colors: usize, pegs: usize },
}

impl Scheme {
    /// Six colors `a`..`f`, four pegs
    pub const CLASSIC: Self = Self { colors: 6, pegs: 4 };

    /// Create a scheme with `colors` symbols and `pegs` positions
    ///
    /// # Errors
    /// Returns `SchemeError` if `colors` is outside `2..=26`, `pegs` is
    /// zero or larger than 255, or `colors^pegs` overflows `usize`.
    pub fn new(colors: usize, pegs: usize) -> Result<Self, SchemeError> {
        if !(2..=MAX_COLORS).contains(&colors) {
            return Err(SchemeError::InvalidColors(colors));
        }
        if pegs == 0 {
            return Err(SchemeError::NoPegs);
        }
        let pegs_u8 = u8::try_from(pegs).map_err(|_| SchemeError::TooManyPegs(pegs))?;
        if colors.checked_pow(u32::from(pegs_u8)).is_none() {
            return Err(SchemeError::SpaceTooLarge { colors, pegs });
        }

        Ok(Self {
            colors: colors as u8,
            pegs: pegs_u8,
        })
    }

    /// Number of colors in the alphabet
    #[inline]
    #[must_use]
    pub const fn colors(self) -> usize {
        self.colors as usize
    }

    /// Number of pegs in each code
    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.pegs as usize
    }

    /// Size of the full code space (colors^pegs)
    ///
    /// Never overflows: [`Scheme::new`] rejects schemes whose space does not
    /// fit in a `usize`.
    #[must_use]
    pub fn space_size(self) -> usize {
        self.colors().pow(u32::from(self.pegs))
    }

    /// Letter used to display a color index
    #[inline]
    #[must_use]
    pub const fn symbol(color: u8) -> char {
        (b'a' + color) as char
    }

    /// Letters of the alphabet in canonical order, e.g. `"abcdef"`
    #[must_use]
    pub fn alphabet(self) -> String {
        (0..self.colors).map(Self::symbol).collect()
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {expected} pegs, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("'{symbol}' is not a color (expected one of {alphabet})")]
    InvalidPeg { symbol: char, alphabet: String },
}

/// A row of pegs, used both for secrets and for guesses
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    pegs: Vec<u8>,
}

impl Code {
    /// Parse a code from its letters
    ///
    /// Input is case-insensitive; surrounding whitespace is not stripped.
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from the scheme's peg count
    /// or a letter falls outside the scheme's alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Scheme};
    ///
    /// let code = Code::parse("ABcd", Scheme::CLASSIC).unwrap();
    /// assert_eq!(code.to_string(), "abcd");
    ///
    /// assert!(Code::parse("abc", Scheme::CLASSIC).is_err());
    /// assert!(Code::parse("abcz", Scheme::CLASSIC).is_err());
    /// ```
    pub fn parse(text: &str, scheme: Scheme) -> Result<Self, CodeError> {
        let got = text.chars().count();
        if got != scheme.pegs() {
            return Err(CodeError::InvalidLength {
                expected: scheme.pegs(),
                got,
            });
        }

        let pegs = text
            .chars()
            .map(|symbol| {
                let lower = symbol.to_ascii_lowercase();
                if lower.is_ascii_lowercase() && ((lower as u8 - b'a') as usize) < scheme.colors() {
                    Ok(lower as u8 - b'a')
                } else {
                    Err(CodeError::InvalidPeg {
                        symbol,
                        alphabet: scheme.alphabet(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pegs })
    }

    /// Build a code directly from color indices
    ///
    /// Callers are responsible for keeping every index below the scheme's
    /// color count; this is checked in debug builds only.
    #[must_use]
    pub fn from_pegs(pegs: Vec<u8>) -> Self {
        debug_assert!(
            pegs.iter().all(|&p| (p as usize) < MAX_COLORS),
            "peg index out of range"
        );
        Self { pegs }
    }

    /// The opening guess: the first colors cycled across every position
    ///
    /// For the classic scheme this is `abcd`; with two colors and four pegs
    /// it is `abab`.
    #[must_use]
    pub fn opening(scheme: Scheme) -> Self {
        let pegs = (0..scheme.pegs())
            .map(|i| (i % scheme.colors()) as u8)
            .collect();
        Self { pegs }
    }

    /// Draw a uniformly random code
    pub fn random<R: Rng + ?Sized>(scheme: Scheme, rng: &mut R) -> Self {
        let colors = scheme.colors() as u8;
        let pegs = (0..scheme.pegs())
            .map(|_| rng.random_range(0..colors))
            .collect();
        Self { pegs }
    }

    /// Color indices in position order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// True for the zero-length code (never produced by a valid scheme)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &peg in &self.pegs {
            write!(f, "{}", Scheme::symbol(peg))?;
        }
        Ok(())
    }
}
