//! Yeardle Solver
//!
//! Optimal strategies for guessing a year from banded distance feedback
//! ("off by 1-2", "off by 3-10", ...), minimizing the worst-case number of
//! guesses first and the average second.
//!
//! # Quick Start
//!
//! ```rust
//! use yeardle_solver::core::IntervalSet;
//! use yeardle_solver::solver::Solver;
//!
//! let mut solver = Solver::new();
//! let analysis = solver.analyze(&IntervalSet::range(1900, 1960));
//!
//! println!("Guess {} first", analysis.guess);
//! assert_eq!(analysis.score.worst, 5);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
