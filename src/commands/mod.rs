//! Command implementations

pub mod auto;
pub mod benchmark;
pub mod play;

pub use auto::{GameRecord, TurnRecord, run_auto_game};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayOutcome, run_play};
