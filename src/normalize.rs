//! Per-participant interval normalisation
//!
//! Clip every raw (enter, exit) pair to the bound, sort the survivors and
//! merge anything that overlaps or touches.

use crate::interval::{BoundingInterval, Interval, NormalizedIntervalList, RawIntervalSet};
use std::cmp::max;

/// Normalize one participant's raw pairs against a bound
///
/// Pairs are clipped in emission order, pairs left empty by clipping are
/// dropped, and the rest are sorted by `(start, end)` and merged. A candidate
/// whose start equals the running end merges into it: touching spans count as
/// continuous presence.
///
/// # Example
/// ```
/// use copresence::{normalize, BoundingInterval, RawIntervalSet};
///
/// let bound = BoundingInterval::new(100, 200).unwrap();
/// let raw = RawIntervalSet::new(&[150, 200, 100, 150, 40, 60]).unwrap();
///
/// let list = normalize(raw, bound);
/// assert_eq!(list.to_raw(), vec![100, 200]);
/// ```
pub fn normalize(raw: RawIntervalSet<'_>, bound: BoundingInterval) -> NormalizedIntervalList {
    let mut clipped: Vec<Interval> = raw
        .pairs()
        .filter_map(|(enter, exit)| bound.clip(enter, exit))
        .collect();

    let dropped = raw.pair_count() - clipped.len();

    clipped.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(clipped.len());
    for candidate in clipped {
        match merged.last_mut() {
            // Sorted input, so this reduces to candidate.start <= last.end
            Some(last) if last.intersects_or_adjacent(candidate) => {
                *last = Interval::new_unchecked(last.start(), max(last.end(), candidate.end()));
            }
            _ => merged.push(candidate),
        }
    }

    tracing::trace!(
        pairs = raw.pair_count(),
        dropped,
        merged = merged.len(),
        bound = %bound,
        "normalized interval set"
    );

    NormalizedIntervalList::from_merged(merged)
}
