//! Strategy verification - play every candidate through its decision tree
//!
//! Checks that the guess counts actually observed when following the tree
//! reproduce the score the solver reported.

use crate::core::IntervalSet;
use crate::solver::{DecisionTree, Score, Solver};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Statistics from playing every candidate
#[derive(Debug)]
pub struct VerifyReport {
    pub candidates: u64,
    /// Score the solver reported
    pub expected: Score,
    /// Score measured by playing the tree
    pub observed: Score,
    /// Guesses needed -> number of candidates needing that many
    pub guess_distribution: BTreeMap<u32, u64>,
    /// Candidates the tree failed to reach
    pub unreached: Vec<i32>,
    pub tree_nodes: usize,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.unreached.is_empty() && self.observed == self.expected
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        self.observed.average(self.candidates)
    }
}

/// Build the strategy for `candidates` and play every one of them through it
///
/// Playing is read-only and runs in parallel.
pub fn verify_strategy(solver: &mut Solver, candidates: &IntervalSet) -> VerifyReport {
    info!(candidates = %candidates, "verifying strategy");
    let start = Instant::now();

    let tree = DecisionTree::build(solver, candidates);
    let targets: Vec<i32> = candidates.iter().collect();

    let plays: Vec<(i32, Option<u32>)> = targets
        .par_iter()
        .map(|&target| (target, tree.play(target)))
        .collect();

    let mut guess_distribution: BTreeMap<u32, u64> = BTreeMap::new();
    let mut unreached = Vec::new();
    let mut observed = Score::SOLVED;

    for (target, guesses) in plays {
        match guesses {
            Some(guesses) => {
                *guess_distribution.entry(guesses).or_insert(0) += 1;
                observed = observed.fold(Score::new(guesses, u64::from(guesses)));
            }
            None => unreached.push(target),
        }
    }

    let report = VerifyReport {
        candidates: candidates.size(),
        expected: tree.score,
        observed,
        guess_distribution,
        unreached,
        tree_nodes: tree.node_count(),
        duration: start.elapsed(),
    };

    if report.is_consistent() {
        info!(score = %report.observed, "strategy verified");
    } else {
        warn!(
            expected = %report.expected,
            observed = %report.observed,
            unreached = report.unreached.len(),
            "strategy does not reproduce its score"
        );
    }
    report
}
