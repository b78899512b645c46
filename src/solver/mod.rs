//! Yeardle solving algorithms
//!
//! Optimal strategies for guessing an integer from banded distance feedback.

mod cache;
mod engine;
mod score;
mod tree;

pub use cache::{CacheEntry, CacheStats, StrategyCache};
pub use engine::{Analysis, Solver, SolverConfig, guess_order};
pub use score::Score;
pub use tree::{Branch, DecisionTree};
