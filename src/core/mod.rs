//! Core domain types for Mastermind
//!
//! Codes, scores and the code space. Everything here is pure and
//! deterministic apart from [`Code::random`], which takes the RNG explicitly.

mod code;
mod score;
mod space;

pub use code::{Code, CodeError, MAX_COLORS, Scheme, SchemeError};
pub use score::{Score, ScoreError};
pub use space::generate_all;
