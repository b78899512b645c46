//! Range sweep command
//!
//! Feeds ever larger ranges `[0, n]` through one solver, so each range reuses
//! every shape solved for the smaller ones.

use crate::core::IntervalSet;
use crate::solver::{Score, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Ranges `[0, n]` for `n = start, start + 1, ...`
///
/// Never ends on its own; bound it with `take` or `take_while`.
///
/// # Examples
/// ```
/// use yeardle_solver::commands::CandidateRanges;
///
/// let sizes: Vec<u64> = CandidateRanges::starting_at(3).take(3).map(|r| r.size()).collect();
/// assert_eq!(sizes, vec![4, 5, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateRanges {
    next: Option<i32>,
}

impl CandidateRanges {
    #[must_use]
    pub const fn starting_at(n: i32) -> Self {
        Self { next: Some(n) }
    }
}

impl Iterator for CandidateRanges {
    type Item = IntervalSet;

    fn next(&mut self) -> Option<IntervalSet> {
        let n = self.next?;
        self.next = n.checked_add(1);
        Some(IntervalSet::range(0, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Outcome for one range of a sweep
#[derive(Debug, Clone)]
pub struct SweepRow {
    pub candidates: IntervalSet,
    pub score: Score,
    pub guess: i32,
    pub average_guesses: f64,
    pub cache_entries: usize,
    pub elapsed: Duration,
}

/// Totals for a finished sweep
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub ranges: usize,
    pub cache_entries: usize,
    pub duration: Duration,
}

/// Analyze each candidate set in turn, handing every row to `on_row`
///
/// `on_row` also receives the solver, so callers can build trees from the
/// warm cache. A progress bar is shown when the number of ranges is known.
pub fn run_sweep<I, F>(solver: &mut Solver, ranges: I, mut on_row: F) -> SweepSummary
where
    I: IntoIterator<Item = IntervalSet>,
    F: FnMut(&mut Solver, &SweepRow),
{
    let ranges = ranges.into_iter();
    let pb = match ranges.size_hint() {
        (_, Some(len)) => {
            let pb = ProgressBar::new(len as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓▒░"),
            );
            pb
        }
        (_, None) => ProgressBar::new_spinner(),
    };

    let total_start = Instant::now();
    let mut count = 0;

    for candidates in ranges {
        let start = Instant::now();
        let analysis = solver.analyze(&candidates);

        let row = SweepRow {
            average_guesses: analysis.score.average(candidates.size()),
            candidates,
            score: analysis.score,
            guess: analysis.guess,
            cache_entries: solver.cache_len(),
            elapsed: start.elapsed(),
        };
        debug!(
            candidates = %row.candidates,
            worst = row.score.worst,
            guess = row.guess,
            cache_entries = row.cache_entries,
            "range analyzed"
        );

        pb.set_message(format!(
            "[{}] worst {} | cache {}",
            row.candidates, row.score.worst, row.cache_entries
        ));
        pb.suspend(|| on_row(solver, &row));
        pb.inc(1);
        count += 1;
    }

    pb.finish_and_clear();

    let summary = SweepSummary {
        ranges: count,
        cache_entries: solver.cache_len(),
        duration: total_start.elapsed(),
    };
    info!(
        ranges = summary.ranges,
        cache_entries = summary.cache_entries,
        elapsed_ms = summary.duration.as_millis() as u64,
        "sweep complete"
    );
    summary
}
