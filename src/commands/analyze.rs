//! Candidate set analysis command
//!
//! Computes the optimal first guess and score for a candidate set.

use crate::core::{Feedback, IntervalSet};
use crate::solver::{Score, Solver};
use std::time::{Duration, Instant};
use tracing::info;

/// Result of analyzing a candidate set
pub struct AnalysisResult {
    pub candidates: IntervalSet,
    pub score: Score,
    pub guess: i32,
    pub average_guesses: f64,
    pub cache_entries: usize,
    pub duration: Duration,
}

/// Parse a candidate set from the command line
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a valid set literal (e.g. `0-725` or `3,10-20`)
/// - The set is empty
/// - The set spans more than the feedback bands can distinguish
/// - A value's magnitude exceeds [`Solver::MAX_MAGNITUDE`]
pub fn parse_candidates(text: &str) -> Result<IntervalSet, String> {
    let candidates: IntervalSet = text
        .parse()
        .map_err(|e| format!("Invalid candidate set '{text}': {e}"))?;

    let (Some(min), Some(max)) = (candidates.lowest(), candidates.highest()) else {
        return Err("Candidate set is empty".to_string());
    };

    let span = i64::from(max) - i64::from(min);
    if span > i64::from(Feedback::MAX_DISTANCE) {
        return Err(format!(
            "Candidate set spans {span}, beyond the largest feedback distance ({})",
            Feedback::MAX_DISTANCE
        ));
    }

    if min < -Solver::MAX_MAGNITUDE || max > Solver::MAX_MAGNITUDE {
        return Err(format!(
            "Candidate set {min}..={max} lies outside ±{}",
            Solver::MAX_MAGNITUDE
        ));
    }

    Ok(candidates)
}

/// Analyze a candidate set with the given solver
pub fn analyze_candidates(solver: &mut Solver, candidates: &IntervalSet) -> AnalysisResult {
    info!(candidates = %candidates, size = candidates.size(), "analyzing candidate set");
    let start = Instant::now();

    let analysis = solver.analyze(candidates);
    let duration = start.elapsed();

    info!(
        worst = analysis.score.worst,
        total = analysis.score.total,
        guess = analysis.guess,
        cache_entries = solver.cache_len(),
        elapsed_ms = duration.as_millis() as u64,
        "analysis complete"
    );

    AnalysisResult {
        candidates: candidates.clone(),
        score: analysis.score,
        guess: analysis.guess,
        average_guesses: analysis.score.average(candidates.size()),
        cache_entries: solver.cache_len(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_range() {
        let candidates = parse_candidates("0-725").unwrap();
        assert_eq!(candidates, IntervalSet::range(0, 725));
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert!(parse_candidates("").is_err());
        assert!(parse_candidates(" , ").is_err());
        assert!(parse_candidates("1900-19x0").is_err());
    }

    #[test]
    fn parse_rejects_too_wide() {
        assert!(parse_candidates("0-10000").is_ok());
        let err = parse_candidates("0-10001").unwrap_err();
        assert!(err.contains("10001"));
    }

    #[test]
    fn parse_rejects_values_near_the_i32_limit() {
        assert!(parse_candidates("-2147483648").is_err());
        assert!(parse_candidates("-2147483648,-2147483646").is_err());
        assert!(parse_candidates("2147483647").is_err());

        let top = Solver::MAX_MAGNITUDE;
        let edge = parse_candidates(&format!("-{top}--{}", top - 3)).unwrap();
        let result = analyze_candidates(&mut Solver::new(), &edge);
        assert_eq!(result.score, Score::new(2, 6));
    }

    #[test]
    fn analyze_small_range() {
        let mut solver = Solver::new();
        let candidates = IntervalSet::range(1900, 1930);
        let result = analyze_candidates(&mut solver, &candidates);

        assert_eq!(result.score, Score::new(4, 98));
        assert_eq!(result.guess, 1915);
        assert!((result.average_guesses - 98.0 / 31.0).abs() < 1e-9);
        assert_eq!(result.cache_entries, solver.cache_len());
        assert_eq!(result.candidates, candidates);
    }
}
