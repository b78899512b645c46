//! Core domain types for Yeardle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod interval_set;

pub use feedback::{Feedback, partition};
pub use interval_set::{Canonical, IntervalSet, IntervalSetError};
