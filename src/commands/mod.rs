//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkResult, DifficultyStats, catalog_words, run_benchmark};
pub use simple::{SimpleConfig, run_simple};
