//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_sweep_row, print_sweep_summary, print_tree_result,
    print_verify_report,
};
