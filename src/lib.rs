//! Mastermind Solver
//!
//! A Mastermind engine that breaks any code of the classic game by always
//! guessing the first code still consistent with every score received.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Scheme, Score};
//! use mastermind_solver::solver::{Progress, Solver};
//!
//! let scheme = Scheme::CLASSIC;
//! let secret = Code::parse("fbed", scheme).unwrap();
//!
//! let mut solver = Solver::new(scheme);
//! let turns = loop {
//!     let guess = solver.next_guess().unwrap().clone();
//!     match solver.record(Score::calculate(&secret, &guess)) {
//!         Progress::Solved { turns } => break turns,
//!         Progress::Continue { .. } => {}
//!         Progress::Exhausted { .. } => unreachable!("truthful scores never exhaust"),
//!     }
//! };
//! assert_eq!(solver.next_guess(), Some(&secret));
//! println!("cracked {secret} in {turns} turns");
//! ```

// Core domain types
pub mod core;

// Candidate filtering and the codebreaker
pub mod solver;

// Interactive game modes
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Full-screen watch mode
pub mod interactive;
