//! Yeardle feedback bands
//!
//! After each guess the game reports how far off it was using one of six
//! magnitude bands. Each band covers the same distance range on both sides
//! of the guess, so the table is symmetric about zero.

use super::IntervalSet;
use std::fmt;

/// Distance band reported for a guess
///
/// Variants are declared from the largest magnitude to the smallest, which is
/// also the order the search folds them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Off by 201 up to 10000
    Beyond200,
    /// Off by 41 to 200
    Within200,
    /// Off by 11 to 40
    Within40,
    /// Off by 3 to 10
    Within10,
    /// Off by 1 or 2
    Within2,
    /// Exact match
    Exact,
}

impl Feedback {
    /// Every band, largest magnitude first
    pub const ALL: [Self; 6] = [
        Self::Beyond200,
        Self::Within200,
        Self::Within40,
        Self::Within10,
        Self::Within2,
        Self::Exact,
    ];

    /// Bands that still leave work to do, largest magnitude first
    pub const SEARCH_ORDER: [Self; 5] = [
        Self::Beyond200,
        Self::Within200,
        Self::Within40,
        Self::Within10,
        Self::Within2,
    ];

    /// Largest distance any band reports
    pub const MAX_DISTANCE: i32 = 10_000;

    /// Inclusive `(min, max)` distance covered by this band
    #[must_use]
    pub const fn distance_range(self) -> (i32, i32) {
        match self {
            Self::Beyond200 => (201, Self::MAX_DISTANCE),
            Self::Within200 => (41, 200),
            Self::Within40 => (11, 40),
            Self::Within10 => (3, 10),
            Self::Within2 => (1, 2),
            Self::Exact => (0, 0),
        }
    }

    /// Label the game displays for this band
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beyond200 => "200+",
            Self::Within200 => "41-200",
            Self::Within40 => "11-40",
            Self::Within10 => "3-10",
            Self::Within2 => "1-2",
            Self::Exact => "0",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Signed offsets covered by this band, relative to a guess at zero
    #[must_use]
    pub fn offsets(self) -> IntervalSet {
        self.around(0)
    }

    /// Every value that would produce this band when `guess` is played
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::Feedback;
    ///
    /// let near = Feedback::Within2.around(100);
    /// assert_eq!(near.intervals(), &[(98, 99), (101, 102)]);
    /// ```
    #[must_use]
    pub fn around(self, guess: i32) -> IntervalSet {
        let (lo, hi) = self.distance_range();
        if lo == 0 {
            return IntervalSet::range(guess - hi, guess + hi);
        }
        IntervalSet::range(guess - hi, guess - lo).union(&IntervalSet::range(guess + lo, guess + hi))
    }

    /// The band the game reports when `guess` is played and `target` is the answer
    ///
    /// Returns `None` when the two are further apart than any band covers.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::classify(1900, 1900), Some(Feedback::Exact));
    /// assert_eq!(Feedback::classify(1900, 1875), Some(Feedback::Within40));
    /// assert_eq!(Feedback::classify(0, 20_000), None);
    /// ```
    #[must_use]
    pub fn classify(guess: i32, target: i32) -> Option<Self> {
        let distance = (i64::from(target) - i64::from(guess)).abs();
        Self::ALL.into_iter().find(|band| {
            let (lo, hi) = band.distance_range();
            (i64::from(lo)..=i64::from(hi)).contains(&distance)
        })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split `candidates` by the feedback each member would produce for `guess`
///
/// Returns the non-empty parts in band order. The parts are pairwise disjoint;
/// their union is `candidates` whenever every member lies within
/// [`Feedback::MAX_DISTANCE`] of `guess`.
#[must_use]
pub fn partition(candidates: &IntervalSet, guess: i32) -> Vec<(Feedback, IntervalSet)> {
    Feedback::ALL
        .into_iter()
        .map(|band| (band, candidates.intersect(&band.around(guess))))
        .filter(|(_, part)| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ordered_largest_first() {
        for pair in Feedback::ALL.windows(2) {
            assert!(pair[0].distance_range().0 > pair[1].distance_range().1);
        }
        assert_eq!(&Feedback::ALL[..5], &Feedback::SEARCH_ORDER);
        assert!(Feedback::ALL[5].is_exact());
    }

    #[test]
    fn bands_tile_the_distance_range() {
        // Consecutive bands leave no gaps between 0 and MAX_DISTANCE
        let mut next = 0;
        for band in Feedback::ALL.into_iter().rev() {
            let (lo, hi) = band.distance_range();
            assert_eq!(lo, next);
            next = hi + 1;
        }
        assert_eq!(next, Feedback::MAX_DISTANCE + 1);
    }

    #[test]
    fn offsets_are_symmetric() {
        for band in Feedback::ALL {
            let offsets = band.offsets();
            assert_eq!(offsets.reflect(), offsets);
        }
    }

    #[test]
    fn exact_band_is_the_guess_itself() {
        assert_eq!(Feedback::Exact.around(7), IntervalSet::single(7));
    }

    #[test]
    fn around_translates_offsets() {
        let band = Feedback::Within200;
        assert_eq!(band.around(500), band.offsets().translate(500));
        assert_eq!(band.around(500).intervals(), &[(300, 459), (541, 700)]);
    }

    #[test]
    fn around_keeps_both_sides_of_every_band() {
        for band in Feedback::SEARCH_ORDER {
            let (lo, hi) = band.distance_range();
            let members = band.around(-40);
            assert_eq!(members.len(), 2, "{band}");
            assert_eq!(members.size(), 2 * u64::from((hi - lo + 1).unsigned_abs()));
            assert_eq!(members.intervals()[0], (-40 - hi, -40 - lo));
            assert_eq!(members.intervals()[1], (-40 + lo, -40 + hi));
        }
    }

    #[test]
    fn classify_band_edges() {
        assert_eq!(Feedback::classify(0, 1), Some(Feedback::Within2));
        assert_eq!(Feedback::classify(0, -2), Some(Feedback::Within2));
        assert_eq!(Feedback::classify(0, 3), Some(Feedback::Within10));
        assert_eq!(Feedback::classify(0, -10), Some(Feedback::Within10));
        assert_eq!(Feedback::classify(0, 11), Some(Feedback::Within40));
        assert_eq!(Feedback::classify(0, 41), Some(Feedback::Within200));
        assert_eq!(Feedback::classify(0, -200), Some(Feedback::Within200));
        assert_eq!(Feedback::classify(0, 201), Some(Feedback::Beyond200));
        assert_eq!(Feedback::classify(0, 10_000), Some(Feedback::Beyond200));
        assert_eq!(Feedback::classify(0, 10_001), None);
    }

    #[test]
    fn classify_agrees_with_around() {
        for target in -300..=300 {
            let band = Feedback::classify(0, target).unwrap();
            assert!(band.around(0).contains(target));
        }
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let candidates = IntervalSet::from_ranges([(0, 50), (60, 400)]).unwrap();
        let parts = partition(&candidates, 45);

        let mut union = IntervalSet::empty();
        for (i, (_, a)) in parts.iter().enumerate() {
            for (_, b) in &parts[i + 1..] {
                assert!(a.intersect(b).is_empty());
            }
            union = union.union(a);
        }
        assert_eq!(union, candidates);
    }

    #[test]
    fn partition_skips_empty_bands() {
        let candidates = IntervalSet::range(0, 2);
        let parts = partition(&candidates, 1);
        let bands: Vec<Feedback> = parts.iter().map(|(band, _)| *band).collect();
        assert_eq!(bands, vec![Feedback::Within2, Feedback::Exact]);
        assert_eq!(parts[0].1.intervals(), &[(0, 0), (2, 2)]);
    }

    #[test]
    fn display_uses_game_labels() {
        assert_eq!(Feedback::Beyond200.to_string(), "200+");
        assert_eq!(Feedback::Exact.to_string(), "0");
    }
}
