//! Integer sets stored as sorted, disjoint closed intervals
//!
//! An `IntervalSet` is the candidate-set representation used throughout the
//! solver. Intervals never overlap or touch, so two sets holding the same
//! integers always have the same representation.

use std::fmt;
use std::ops::{Add, BitAnd};
use std::str::FromStr;

const HASH_SEED: u64 = 1337;
const LENGTH_MULTIPLIER: u64 = 2_990_871_297_014_242_113;
const GAP_MULTIPLIER: u64 = 9_260_031_227_486_221_669;

/// A finite set of integers as a sorted list of disjoint, non-adjacent
/// closed intervals `[lo, hi]`
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalSet {
    intervals: Vec<(i32, i32)>,
}

/// Result of folding a set onto its canonical orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub set: IntervalSet,
    /// `true` when `set` is the point reflection of the input
    pub reflected: bool,
}

/// Error type for malformed interval lists and set literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalSetError {
    InvertedInterval { lo: i32, hi: i32 },
    Unordered { index: usize },
    InvalidNumber(String),
}

impl fmt::Display for IntervalSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedInterval { lo, hi } => {
                write!(f, "Interval [{lo}, {hi}] has its lower bound above its upper bound")
            }
            Self::Unordered { index } => write!(
                f,
                "Interval #{index} overlaps, touches, or precedes the interval before it"
            ),
            Self::InvalidNumber(token) => write!(f, "Not a valid integer: '{token}'"),
        }
    }
}

impl std::error::Error for IntervalSetError {}

impl IntervalSet {
    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// The contiguous range `[lo, hi]`, or the empty set when `lo > hi`
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    ///
    /// let years = IntervalSet::range(1900, 1999);
    /// assert_eq!(years.size(), 100);
    /// assert_eq!(years.lowest(), Some(1900));
    /// ```
    #[must_use]
    pub fn range(lo: i32, hi: i32) -> Self {
        if lo > hi {
            return Self::empty();
        }
        Self {
            intervals: vec![(lo, hi)],
        }
    }

    /// The set holding only `value`
    #[must_use]
    pub fn single(value: i32) -> Self {
        Self::range(value, value)
    }

    /// Build a set from intervals that are already sorted and separated by gaps
    ///
    /// # Errors
    /// Returns `IntervalSetError` if an interval is inverted or if an interval
    /// does not start at least two past the end of its predecessor.
    pub fn from_intervals(intervals: Vec<(i32, i32)>) -> Result<Self, IntervalSetError> {
        for (index, &(lo, hi)) in intervals.iter().enumerate() {
            if lo > hi {
                return Err(IntervalSetError::InvertedInterval { lo, hi });
            }
            if index > 0 && i64::from(lo) <= i64::from(intervals[index - 1].1) + 1 {
                return Err(IntervalSetError::Unordered { index });
            }
        }
        Ok(Self { intervals })
    }

    /// Build a set from arbitrary intervals, sorting and merging as needed
    ///
    /// # Errors
    /// Returns `IntervalSetError::InvertedInterval` if any interval has `lo > hi`.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    ///
    /// let set = IntervalSet::from_ranges([(5, 9), (0, 2), (3, 3)]).unwrap();
    /// assert_eq!(set.intervals(), &[(0, 3), (5, 9)]);
    /// ```
    pub fn from_ranges<I>(ranges: I) -> Result<Self, IntervalSetError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut sorted: Vec<(i32, i32)> = ranges.into_iter().collect();
        if let Some(&(lo, hi)) = sorted.iter().find(|(lo, hi)| lo > hi) {
            return Err(IntervalSetError::InvertedInterval { lo, hi });
        }
        sorted.sort_unstable();

        let mut intervals: Vec<(i32, i32)> = Vec::with_capacity(sorted.len());
        for (lo, hi) in sorted {
            match intervals.last_mut() {
                Some(last) if i64::from(lo) <= i64::from(last.1) + 1 => last.1 = last.1.max(hi),
                _ => intervals.push((lo, hi)),
            }
        }
        Ok(Self { intervals })
    }

    /// The intervals making up this set, ascending
    #[inline]
    #[must_use]
    pub fn intervals(&self) -> &[(i32, i32)] {
        &self.intervals
    }

    /// Number of intervals (not elements)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Smallest element, if any
    #[inline]
    #[must_use]
    pub fn lowest(&self) -> Option<i32> {
        self.intervals.first().map(|&(lo, _)| lo)
    }

    /// Largest element, if any
    #[inline]
    #[must_use]
    pub fn highest(&self) -> Option<i32> {
        self.intervals.last().map(|&(_, hi)| hi)
    }

    /// Number of integers in the set
    #[must_use]
    pub fn size(&self) -> u64 {
        self.intervals
            .iter()
            .map(|&(lo, hi)| (i64::from(hi) - i64::from(lo) + 1) as u64)
            .sum()
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        let index = self.intervals.partition_point(|&(_, hi)| hi < value);
        self.intervals
            .get(index)
            .is_some_and(|&(lo, _)| lo <= value)
    }

    /// Iterate over every element in ascending order
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.intervals.iter().flat_map(|&(lo, hi)| lo..=hi)
    }

    /// Elements present in both sets
    ///
    /// Walks both interval lists once, always advancing whichever interval
    /// ends first.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    ///
    /// let a = IntervalSet::from_ranges([(0, 10), (20, 30)]).unwrap();
    /// let b = IntervalSet::range(5, 25);
    /// assert_eq!(a.intersect(&b).intervals(), &[(5, 10), (20, 25)]);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut intervals = Vec::new();
        let (mut i, mut j) = (0, 0);

        while let (Some(&(a_lo, a_hi)), Some(&(b_lo, b_hi))) =
            (self.intervals.get(i), other.intervals.get(j))
        {
            if a_hi < b_lo {
                i += 1;
                continue;
            }
            if b_hi < a_lo {
                j += 1;
                continue;
            }

            intervals.push((a_lo.max(b_lo), a_hi.min(b_hi)));
            if a_hi < b_hi {
                i += 1;
            } else {
                j += 1;
            }
        }

        Self { intervals }
    }

    /// Elements present in either set
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut intervals: Vec<(i32, i32)> = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);

        loop {
            let next = match (self.intervals.get(i), other.intervals.get(j)) {
                (Some(&a), Some(&b)) if a <= b => {
                    i += 1;
                    a
                }
                (_, Some(&b)) => {
                    j += 1;
                    b
                }
                (Some(&a), None) => {
                    i += 1;
                    a
                }
                (None, None) => break,
            };

            match intervals.last_mut() {
                Some(last) if i64::from(next.0) <= i64::from(last.1) + 1 => {
                    last.1 = last.1.max(next.1);
                }
                _ => intervals.push(next),
            }
        }

        Self { intervals }
    }

    /// Shift every element by `delta`
    #[must_use]
    pub fn translate(&self, delta: i32) -> Self {
        Self {
            intervals: self
                .intervals
                .iter()
                .map(|&(lo, hi)| (lo + delta, hi + delta))
                .collect(),
        }
    }

    /// Point reflection through zero: `{-v : v in self}`
    #[must_use]
    pub fn reflect(&self) -> Self {
        Self {
            intervals: self
                .intervals
                .iter()
                .rev()
                .map(|&(lo, hi)| (-hi, -lo))
                .collect(),
        }
    }

    /// Pick one orientation out of a set and its point reflection
    ///
    /// Both orientations are hashed over their gap and interval-length
    /// sequences; the reflection is chosen only when its hash is strictly
    /// smaller. A set and its reflection therefore always fold to the same
    /// orientation (barring a 64-bit hash tie). Sets with at most one interval
    /// are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use yeardle_solver::core::IntervalSet;
    ///
    /// let set = IntervalSet::from_ranges([(0, 0), (5, 9)]).unwrap();
    /// let mirror = set.reflect();
    /// assert!(!set.canonicalize().reflected);
    /// assert!(mirror.canonicalize().reflected);
    /// assert_eq!(mirror.canonicalize().set, set);
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Canonical {
        if self.intervals.len() <= 1 {
            return Canonical {
                set: self.clone(),
                reflected: false,
            };
        }

        let forward = shape_hash(self.intervals.iter().copied());
        let mirrored = shape_hash(self.intervals.iter().rev().map(|&(lo, hi)| (-hi, -lo)));

        if mirrored < forward {
            Canonical {
                set: self.reflect(),
                reflected: true,
            }
        } else {
            Canonical {
                set: self.clone(),
                reflected: false,
            }
        }
    }
}

/// Rolling hash over interval lengths and the gaps between intervals
fn shape_hash(intervals: impl Iterator<Item = (i32, i32)>) -> u64 {
    let mut hash = HASH_SEED;
    let mut previous_hi: Option<i32> = None;

    for (lo, hi) in intervals {
        if let Some(prev) = previous_hi {
            hash = mix(hash, i64::from(lo) - i64::from(prev), GAP_MULTIPLIER);
        }
        hash = mix(hash, i64::from(hi) - i64::from(lo), LENGTH_MULTIPLIER);
        previous_hi = Some(hi);
    }

    hash
}

#[inline]
const fn mix(hash: u64, value: i64, multiplier: u64) -> u64 {
    let hash = hash.wrapping_add(value as u64).wrapping_mul(multiplier);
    hash ^ (hash >> 32)
}

impl BitAnd for &IntervalSet {
    type Output = IntervalSet;

    fn bitand(self, rhs: Self) -> IntervalSet {
        self.intersect(rhs)
    }
}

impl Add<i32> for &IntervalSet {
    type Output = IntervalSet;

    fn add(self, delta: i32) -> IntervalSet {
        self.translate(delta)
    }
}

/// Comma-separated list: `v` for singletons, `v,v+1` for pairs, `lo-hi` otherwise
impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &(lo, hi)) in self.intervals.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            match i64::from(hi) - i64::from(lo) {
                0 => write!(f, "{lo}")?,
                1 => write!(f, "{lo},{hi}")?,
                _ => write!(f, "{lo}-{hi}")?,
            }
        }
        Ok(())
    }
}

/// Parses the `Display` form; items may be unordered or overlapping
///
/// # Examples
/// ```
/// use yeardle_solver::core::IntervalSet;
///
/// let set: IntervalSet = "0-5, 8, -3--2".parse().unwrap();
/// assert_eq!(set.intervals(), &[(-3, -2), (0, 5), (8, 8)]);
/// ```
impl FromStr for IntervalSet {
    type Err = IntervalSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ranges = Vec::new();

        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            // A leading '-' is a sign, so the separator is the first '-' after it
            let separator = token
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '-')
                .map(|(index, _)| index);

            let (lo, hi) = match separator {
                Some(index) => (
                    parse_bound(&token[..index])?,
                    parse_bound(&token[index + 1..])?,
                ),
                None => {
                    let value = parse_bound(token)?;
                    (value, value)
                }
            };
            ranges.push((lo, hi));
        }

        Self::from_ranges(ranges)
    }
}

fn parse_bound(text: &str) -> Result<i32, IntervalSetError> {
    text.trim()
        .parse()
        .map_err(|_| IntervalSetError::InvalidNumber(text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ranges: &[(i32, i32)]) -> IntervalSet {
        IntervalSet::from_ranges(ranges.iter().copied()).unwrap()
    }

    #[test]
    fn range_and_derived_attributes() {
        let x = IntervalSet::range(0, 725);
        assert_eq!(x.lowest(), Some(0));
        assert_eq!(x.highest(), Some(725));
        assert_eq!(x.size(), 726);
        assert_eq!(x.len(), 1);
    }

    #[test]
    fn inverted_range_is_empty() {
        let x = IntervalSet::range(5, 4);
        assert!(x.is_empty());
        assert_eq!(x.lowest(), None);
        assert_eq!(x.highest(), None);
        assert_eq!(x.size(), 0);
    }

    #[test]
    fn from_intervals_rejects_touching_and_inverted() {
        assert!(IntervalSet::from_intervals(vec![(0, 3), (5, 6)]).is_ok());
        assert_eq!(
            IntervalSet::from_intervals(vec![(0, 3), (4, 6)]),
            Err(IntervalSetError::Unordered { index: 1 })
        );
        assert_eq!(
            IntervalSet::from_intervals(vec![(5, 6), (0, 3)]),
            Err(IntervalSetError::Unordered { index: 1 })
        );
        assert_eq!(
            IntervalSet::from_intervals(vec![(3, 0)]),
            Err(IntervalSetError::InvertedInterval { lo: 3, hi: 0 })
        );
    }

    #[test]
    fn from_ranges_merges_touching_intervals() {
        let x = set(&[(4, 6), (0, 3), (10, 12), (11, 20)]);
        assert_eq!(x.intervals(), &[(0, 6), (10, 20)]);
    }

    #[test]
    fn contains_checks_gaps() {
        let x = set(&[(0, 2), (10, 12)]);
        assert!(x.contains(0));
        assert!(x.contains(2));
        assert!(!x.contains(3));
        assert!(!x.contains(9));
        assert!(x.contains(11));
        assert!(!x.contains(13));
        assert!(!x.contains(-1));
    }

    #[test]
    fn iter_yields_every_member() {
        let x = set(&[(0, 2), (5, 5)]);
        assert_eq!(x.iter().collect::<Vec<_>>(), vec![0, 1, 2, 5]);
    }

    #[test]
    fn intersect_splits_across_intervals() {
        let a = set(&[(0, 10), (20, 30), (40, 50)]);
        let b = set(&[(5, 22), (28, 45)]);
        assert_eq!(a.intersect(&b).intervals(), &[(5, 10), (20, 22), (28, 30), (40, 45)]);
        assert_eq!(&a & &b, a.intersect(&b));
    }

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = set(&[(0, 3)]);
        let b = set(&[(4, 8)]);
        assert!(a.intersect(&b).is_empty());
        assert!(a.intersect(&IntervalSet::empty()).is_empty());
    }

    #[test]
    fn union_merges_adjacent() {
        let a = set(&[(0, 3), (10, 12)]);
        let b = set(&[(4, 6), (20, 21)]);
        assert_eq!(a.union(&b).intervals(), &[(0, 6), (10, 12), (20, 21)]);
        assert_eq!(a.union(&IntervalSet::empty()), a);
    }

    #[test]
    fn translate_shifts_both_bounds() {
        let x = set(&[(0, 2), (5, 9)]);
        assert_eq!(x.translate(-5).intervals(), &[(-5, -3), (0, 4)]);
        assert_eq!(&x + 3, x.translate(3));
    }

    #[test]
    fn reflect_reverses_and_negates() {
        let x = set(&[(0, 2), (5, 9)]);
        assert_eq!(x.reflect().intervals(), &[(-9, -5), (-2, 0)]);
        assert_eq!(x.reflect().reflect(), x);
    }

    #[test]
    fn canonicalize_single_interval_is_identity() {
        let x = IntervalSet::range(3, 17);
        let canonical = x.canonicalize();
        assert!(!canonical.reflected);
        assert_eq!(canonical.set, x);
    }

    #[test]
    fn canonicalize_folds_mirror_images_together() {
        let x = set(&[(0, 0), (5, 9), (30, 31)]);
        let mirror = x.reflect();

        let a = x.canonicalize();
        let b = mirror.canonicalize();

        assert!(a.reflected);
        assert!(!b.reflected);
        assert_eq!(a.set, b.set);
        assert_eq!(b.set, mirror);
    }

    #[test]
    fn canonicalize_ignores_position() {
        let x = set(&[(0, 0), (5, 9), (30, 31)]);
        let shifted = x.translate(1000);
        assert_eq!(x.canonicalize().reflected, shifted.canonicalize().reflected);
    }

    #[test]
    fn canonicalize_reflection_matches_flag() {
        let x = set(&[(0, 3), (7, 7), (9, 40)]);
        let canonical = x.canonicalize();
        if canonical.reflected {
            assert_eq!(canonical.set, x.reflect());
        } else {
            assert_eq!(canonical.set, x);
        }
    }

    #[test]
    fn display_uses_compact_form() {
        let x = set(&[(-3, -2), (0, 5), (8, 8)]);
        assert_eq!(x.to_string(), "-3,-2,0-5,8");
        assert_eq!(IntervalSet::empty().to_string(), "");
    }

    #[test]
    fn parse_display_form() {
        let x = set(&[(-30, -12), (0, 1), (4, 4), (100, 200)]);
        let parsed: IntervalSet = x.to_string().parse().unwrap();
        assert_eq!(parsed, x);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "0-5,x".parse::<IntervalSet>(),
            Err(IntervalSetError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            "9-3".parse::<IntervalSet>(),
            Err(IntervalSetError::InvertedInterval { lo: 9, hi: 3 })
        );
        assert!("".parse::<IntervalSet>().unwrap().is_empty());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = set(&[(0, 3)]);
        let b = set(&[(0, 3), (5, 5)]);
        let c = set(&[(0, 4)]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn error_display() {
        let err = IntervalSetError::InvalidNumber("abc".to_string());
        assert_eq!(err.to_string(), "Not a valid integer: 'abc'");
    }
}
