//! Mastermind codebreaking
//!
//! Exhaustive consistency filtering: after every score, keep only the codes
//! that would have produced it, then play the first survivor.

mod engine;
pub mod filter;

pub use engine::{Progress, Solver};
pub use filter::{consistent_with_history, filter_candidates, retain_consistent};
