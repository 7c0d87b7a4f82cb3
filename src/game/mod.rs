//! Game modes
//!
//! The state machine for a single game and the line-oriented loops that
//! drive it for each mode.

mod driver;
mod state;

pub use driver::{Console, PlayOptions, computer_guesses, human_guesses, run_menu, self_play};
pub use state::{Codemaker, GameState};
