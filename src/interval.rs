//! Interval value types
//!
//! All spans are half-open `[start, end)` over `u64` timestamps. Raw input is
//! validated once, at construction of [`RawIntervalSet`] and
//! [`BoundingInterval`]; everything downstream works on pairs rather than
//! index arithmetic over the flat sequence.

use crate::error::InvalidInput;
use serde::Serialize;
use std::cmp::{max, min};
use std::fmt;

/// A non-empty half-open span `[start, end)` with `start < end`
///
/// # Example
/// ```
/// use copresence::Interval;
///
/// let iv = Interval::new(100, 150).unwrap();
/// assert_eq!(iv.duration(), 50);
/// assert!(Interval::new(150, 150).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Interval {
    start: u64,
    end: u64,
}

impl Interval {
    /// Create an interval, or `None` if it would be empty or inverted
    pub fn new(start: u64, end: u64) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub(crate) fn new_unchecked(start: u64, end: u64) -> Self {
        debug_assert!(start < end, "interval must satisfy start < end");
        Self { start, end }
    }

    /// Inclusive start
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Exclusive end
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Length of the span in input time units
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Common part of two spans, `None` when they only touch or are apart
    pub fn intersection(&self, other: Interval) -> Option<Interval> {
        Interval::new(max(self.start, other.start), min(self.end, other.end))
    }

    /// True when `other` overlaps or shares a boundary with `self`
    pub fn intersects_or_adjacent(&self, other: Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// The master window every participant span is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoundingInterval {
    lo: u64,
    hi: u64,
}

impl BoundingInterval {
    /// Create a bound, rejecting `lo > hi`
    ///
    /// `lo == hi` is accepted and clips everything away.
    pub fn new(lo: u64, hi: u64) -> Result<Self, InvalidInput> {
        if lo > hi {
            return Err(InvalidInput::InvertedBound { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Build a bound from a `[lo, hi]` timestamp slice
    pub fn from_slice(timestamps: &[u64]) -> Result<Self, InvalidInput> {
        match *timestamps {
            [lo, hi] => Self::new(lo, hi),
            _ => Err(InvalidInput::LessonArity {
                len: timestamps.len(),
            }),
        }
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    pub fn hi(&self) -> u64 {
        self.hi
    }

    pub fn width(&self) -> u64 {
        self.hi - self.lo
    }

    /// Clip an (enter, exit) pair to the bound
    ///
    /// Returns `None` if nothing of the pair remains inside `[lo, hi)`.
    pub fn clip(&self, enter: u64, exit: u64) -> Option<Interval> {
        Interval::new(max(enter, self.lo), min(exit, self.hi))
    }
}

impl fmt::Display for BoundingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}

/// A validated flat sequence of (enter, exit) timestamp pairs
///
/// Pairs are kept in emission order; they need not be sorted or disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawIntervalSet<'a> {
    timestamps: &'a [u64],
}

impl<'a> RawIntervalSet<'a> {
    /// Validate a flat timestamp sequence
    ///
    /// Rejects odd lengths and any pair whose enter is after its exit.
    ///
    /// # Example
    /// ```
    /// use copresence::RawIntervalSet;
    ///
    /// assert!(RawIntervalSet::new(&[50, 150, 180, 250]).is_ok());
    /// assert!(RawIntervalSet::new(&[50, 150, 180]).is_err());
    /// assert!(RawIntervalSet::new(&[150, 50]).is_err());
    /// ```
    pub fn new(timestamps: &'a [u64]) -> Result<Self, InvalidInput> {
        if timestamps.len() % 2 != 0 {
            return Err(InvalidInput::OddLength {
                len: timestamps.len(),
            });
        }

        for (index, pair) in timestamps.chunks_exact(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(InvalidInput::InvertedPair {
                    index,
                    enter: pair[0],
                    exit: pair[1],
                });
            }
        }

        Ok(Self { timestamps })
    }

    /// Number of (enter, exit) pairs
    pub fn pair_count(&self) -> usize {
        self.timestamps.len() / 2
    }

    /// Iterate pairs in emission order
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u64)> + 'a {
        self.timestamps.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Sorted, disjoint, fully merged spans for one participant
///
/// Only [`normalize`](crate::normalize) builds these, so consecutive entries
/// always satisfy `end_i < start_{i+1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedIntervalList {
    intervals: Vec<Interval>,
}

impl NormalizedIntervalList {
    pub(crate) fn from_merged(intervals: Vec<Interval>) -> Self {
        debug_assert!(
            intervals.windows(2).all(|w| w[0].end < w[1].start),
            "merged intervals must be sorted and non-touching"
        );
        Self { intervals }
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sum of span durations
    pub fn total_length(&self) -> u64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Flatten back into an (enter, exit, enter, exit, ...) sequence
    pub fn to_raw(&self) -> Vec<u64> {
        self.intervals
            .iter()
            .flat_map(|iv| [iv.start, iv.end])
            .collect()
    }
}

impl<'a> IntoIterator for &'a NormalizedIntervalList {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl fmt::Display for NormalizedIntervalList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "(none)");
        }
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", iv)?;
        }
        Ok(())
    }
}
