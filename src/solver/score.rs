//! Strategy scores
//!
//! A score ranks strategies first by the worst-case number of guesses still
//! needed, then by the number of guesses summed over every candidate.

use std::fmt;

/// `(worst, total)` pair, ordered lexicographically
///
/// Field order matters: the derived `Ord` compares `worst` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    /// Guesses still needed for the hardest candidate
    pub worst: u32,
    /// Guesses still needed, summed over all candidates
    pub total: u64,
}

impl Score {
    /// A single candidate that is already identified
    pub const SOLVED: Self = Self::new(0, 0);

    /// Not yet evaluated, or impossible to finish
    pub const UNSOLVABLE: Self = Self::new(u32::MAX, u64::MAX);

    #[must_use]
    pub const fn new(worst: u32, total: u64) -> Self {
        Self { worst, total }
    }

    /// Combine the scores of two disjoint parts of a candidate set
    ///
    /// Saturates, so folding in [`Score::UNSOLVABLE`] yields it.
    #[must_use]
    pub const fn fold(self, other: Self) -> Self {
        Self {
            worst: if self.worst > other.worst {
                self.worst
            } else {
                other.worst
            },
            total: self.total.saturating_add(other.total),
        }
    }

    /// Charge one more guess to every one of `candidates`
    #[must_use]
    pub const fn charge_guess(self, candidates: u64) -> Self {
        Self {
            worst: self.worst.saturating_add(1),
            total: self.total.saturating_add(candidates),
        }
    }

    /// Branch-and-bound test: a partial aggregate that already matches or
    /// exceeds `best` can never become strictly better
    ///
    /// Folding only ever raises both fields, so the cutoff is safe.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::solver::Score;
    ///
    /// let best = Score::new(3, 40);
    /// assert!(Score::new(4, 0).is_cut_off(best));
    /// assert!(Score::new(3, 40).is_cut_off(best));
    /// assert!(!Score::new(3, 39).is_cut_off(best));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_cut_off(self, best: Self) -> bool {
        self >= best
    }

    #[inline]
    #[must_use]
    pub fn is_solvable(self) -> bool {
        self != Self::UNSOLVABLE
    }

    /// Average guesses per candidate
    #[must_use]
    pub fn average(self, candidates: u64) -> f64 {
        if candidates == 0 {
            return 0.0;
        }
        self.total as f64 / candidates as f64
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solvable() {
            write!(f, "worst {}, total {}", self.worst, self.total)
        } else {
            write!(f, "unsolvable")
        }
    }
}
