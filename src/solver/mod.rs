//! Automated guessing
//!
//! Strategies that pick letters on their own, used to benchmark difficulty levels.

pub mod candidates;
pub mod strategy;

pub use strategy::{
    CatalogStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
