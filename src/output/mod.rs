//! Terminal output formatting
//!
//! Player-facing messages and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_levels};
