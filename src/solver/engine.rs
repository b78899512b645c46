//! Main Yeardle solver interface
//!
//! Recursive minimax over candidate sets. Every set is normalized (folded
//! onto its canonical orientation, then shifted to start at zero) before the
//! memo table is consulted, so each distinct shape is searched only once.

use super::Score;
use super::cache::{CacheEntry, CacheStats, StrategyCache};
use crate::core::{Canonical, Feedback, IntervalSet};
use std::ops::ControlFlow;
use tracing::trace;

/// Tunable search behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop folding a guess's bands once it can no longer beat the best guess
    pub prune: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { prune: true }
    }
}

/// Best score for a candidate set and the guess that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub score: Score,
    pub guess: i32,
}

/// Main Yeardle solver
///
/// Owns the memo table for its whole lifetime; reuse one solver across calls
/// to share work between related candidate sets.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    cache: StrategyCache,
}

impl Solver {
    /// Largest candidate magnitude the solver accepts
    ///
    /// Leaves room to reflect any candidate and to place every feedback band
    /// around any guess without leaving `i32`.
    pub const MAX_MAGNITUDE: i32 = i32::MAX - Feedback::MAX_DISTANCE;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            cache: StrategyCache::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Number of distinct shapes solved so far
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Find the guess minimizing worst-case, then total, guesses for `candidates`
    ///
    /// `candidates` may sit anywhere on the number line; the returned guess
    /// is in the caller's frame.
    ///
    /// # Panics
    /// Panics if `candidates` is empty or holds a value whose magnitude
    /// exceeds [`Solver::MAX_MAGNITUDE`].
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    /// use yeardle_solver::solver::{Score, Solver};
    ///
    /// let mut solver = Solver::new();
    /// let analysis = solver.analyze(&IntervalSet::range(1000, 1002));
    ///
    /// assert_eq!(analysis.score, Score::new(2, 5));
    /// assert_eq!(analysis.guess, 1001);
    /// ```
    pub fn analyze(&mut self, candidates: &IntervalSet) -> Analysis {
        if let (Some(lo), Some(hi)) = (candidates.lowest(), candidates.highest()) {
            assert!(
                lo >= -Self::MAX_MAGNITUDE && hi <= Self::MAX_MAGNITUDE,
                "candidates {lo}..={hi} lie outside ±{}",
                Self::MAX_MAGNITUDE
            );
        }
        let Canonical { set, reflected } = candidates.canonicalize();
        let Some(shift) = set.lowest() else {
            panic!("cannot analyze an empty candidate set");
        };
        let key = set.translate(-shift);

        let entry = if let Some(entry) = self.cache.get(&key) {
            entry
        } else {
            let entry = self.analyze_inner(&key);
            trace!(shape = %key, worst = entry.score.worst, total = entry.score.total, "solved new shape");
            self.cache.insert(key, entry);
            entry
        };

        let guess = entry.guess + shift;
        Analysis {
            score: entry.score,
            guess: if reflected { -guess } else { guess },
        }
    }

    /// Score of playing `guess` first and optimally afterwards
    ///
    /// A single candidate is already identified and scores
    /// [`Score::SOLVED`] whatever the guess. Guesses that cannot split the
    /// set score [`Score::UNSOLVABLE`].
    ///
    /// # Panics
    /// Panics if `candidates` is empty.
    pub fn evaluate_guess(&mut self, candidates: &IntervalSet, guess: i32) -> Score {
        let size = candidates.size();
        assert!(size > 0, "cannot evaluate a guess for an empty candidate set");
        if size == 1 {
            return Score::SOLVED;
        }

        let aggregate = self.fold_bands(candidates, guess, Score::UNSOLVABLE);
        if aggregate.is_solvable() {
            aggregate.charge_guess(size)
        } else {
            Score::UNSOLVABLE
        }
    }

    /// Search every guess for a zero-based candidate set
    fn analyze_inner(&mut self, candidates: &IntervalSet) -> CacheEntry {
        assert_eq!(
            candidates.lowest(),
            Some(0),
            "inner search requires a zero-based candidate set"
        );
        let max = candidates.highest().unwrap_or_default();
        if max == 0 {
            return CacheEntry {
                score: Score::SOLVED,
                guess: 0,
            };
        }

        let mut best = Score::UNSOLVABLE;
        let mut best_guess = 0;

        for guess in guess_order(max) {
            let bound = if self.config.prune {
                best
            } else {
                Score::UNSOLVABLE
            };
            let aggregate = self.fold_bands(candidates, guess, bound);
            if aggregate < best {
                best = aggregate;
                best_guess = guess;
            }
        }

        // Any member of the set is a guess that splits it, so `best` is finite
        debug_assert!(best.is_solvable());
        CacheEntry {
            score: best.charge_guess(candidates.size()),
            guess: best_guess,
        }
    }

    /// Aggregate the scores of every non-exact band, stopping early once the
    /// running aggregate is cut off by `bound`
    fn fold_bands(&mut self, candidates: &IntervalSet, guess: i32, bound: Score) -> Score {
        let outcome = Feedback::SEARCH_ORDER
            .into_iter()
            .try_fold(Score::SOLVED, |aggregate, band| {
                let aggregate = aggregate.fold(self.band_score(candidates, guess, band));
                if aggregate.is_cut_off(bound) {
                    ControlFlow::Break(aggregate)
                } else {
                    ControlFlow::Continue(aggregate)
                }
            });

        match outcome {
            ControlFlow::Break(aggregate) | ControlFlow::Continue(aggregate) => aggregate,
        }
    }

    /// Score of the candidates that would report `band` for `guess`
    fn band_score(&mut self, candidates: &IntervalSet, guess: i32, band: Feedback) -> Score {
        let part = candidates.intersect(&band.around(guess));
        if part.is_empty() {
            Score::SOLVED
        } else if part == *candidates {
            // No information gained: the same set again
            Score::UNSOLVABLE
        } else {
            self.analyze(&part).score
        }
    }
}

/// Guesses in `[0, max]`, starting at the midpoint and alternating outward
///
/// # Examples
/// ```
/// use yeardle_solver::solver::guess_order;
///
/// assert_eq!(guess_order(4).collect::<Vec<_>>(), vec![2, 3, 1, 4, 0]);
/// assert_eq!(guess_order(5).collect::<Vec<_>>(), vec![2, 3, 1, 4, 0, 5]);
/// ```
pub fn guess_order(max: i32) -> impl Iterator<Item = i32> {
    let mid = max / 2;
    (0..=max).map(move |step| {
        if step % 2 == 1 {
            mid + (step + 1) / 2
        } else {
            mid - step / 2
        }
    })
}
