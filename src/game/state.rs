//! Game state machine
//!
//! One value per game, advanced by guesses (human codebreaker) or scores
//! (computer codebreaker) until it reaches a terminal state.

use crate::core::{Code, Scheme, Score};
use crate::solver::{Progress, Solver};

/// Keeper of the secret when the human is guessing
#[derive(Debug, Clone)]
pub struct Codemaker {
    secret: Code,
    turn: usize,
}

impl Codemaker {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret, turn: 1 }
    }

    /// Current turn number, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Score a guess against the secret, advancing the turn unless it wins
    pub fn check(&mut self, guess: &Code) -> Score {
        let score = Score::calculate(&self.secret, guess);
        if !score.is_perfect(self.secret.len()) {
            self.turn += 1;
        }
        score
    }
}

/// Where a game stands
#[derive(Debug, Clone)]
pub enum GameState {
    /// Computer is guessing; holds the turn counter and candidate set
    AwaitingGuess(Solver),
    /// Human is guessing; holds the turn counter and secret
    AwaitingScore(Codemaker),
    /// The codebreaker found the secret on turn `turns`
    Won { turns: usize },
    /// The human's scores ruled out every code after `turns` guesses
    Cheated { turns: usize },
    /// Input ended before the game did
    Quit,
}

impl GameState {
    /// New game where the computer breaks a code the human is thinking of
    #[must_use]
    pub fn computer_guesses(scheme: Scheme) -> Self {
        Self::AwaitingGuess(Solver::new(scheme))
    }

    /// New game where the human breaks `secret`
    #[must_use]
    pub const fn human_guesses(secret: Code) -> Self {
        Self::AwaitingScore(Codemaker::new(secret))
    }

    /// Turn about to be played, or `None` in a terminal state
    #[must_use]
    pub fn turn(&self) -> Option<usize> {
        match self {
            Self::AwaitingGuess(solver) => Some(solver.turn()),
            Self::AwaitingScore(maker) => Some(maker.turn()),
            _ => None,
        }
    }

    /// Apply the score for the computer's current guess
    ///
    /// Any state other than `AwaitingGuess` is returned unchanged.
    #[must_use]
    pub fn score(self, score: Score) -> Self {
        match self {
            Self::AwaitingGuess(mut solver) => match solver.record(score) {
                Progress::Solved { turns } => Self::Won { turns },
                Progress::Exhausted { turns } => Self::Cheated { turns },
                Progress::Continue { .. } => Self::AwaitingGuess(solver),
            },
            other => other,
        }
    }

    /// Apply a human guess, returning the next state and the guess's score
    ///
    /// Any state other than `AwaitingScore` is returned unchanged with no
    /// score.
    #[must_use]
    pub fn guess(self, guess: &Code) -> (Self, Option<Score>) {
        match self {
            Self::AwaitingScore(mut maker) => {
                let turn = maker.turn();
                let score = maker.check(guess);
                if score.is_perfect(guess.len()) {
                    (Self::Won { turns: turn }, Some(score))
                } else {
                    (Self::AwaitingScore(maker), Some(score))
                }
            }
            other => (other, None),
        }
    }
}
