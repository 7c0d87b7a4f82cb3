//! Command implementations

pub mod analyze;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_guess};
pub use solve::{GuessStep, SolveResult, solve_code, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
