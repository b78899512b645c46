//! Command implementations

pub mod analyze;
pub mod sweep;
pub mod tree;
pub mod verify;

pub use analyze::{AnalysisResult, analyze_candidates, parse_candidates};
pub use sweep::{CandidateRanges, SweepRow, SweepSummary, run_sweep};
pub use tree::{TreeResult, build_tree};
pub use verify::{VerifyReport, verify_strategy};
