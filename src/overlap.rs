//! Two-pointer overlap sweep
//!
//! Both inputs are sorted and disjoint, so a single forward pass that always
//! advances the list whose current span ends first visits every pair of spans
//! that can intersect exactly once.

use crate::interval::{Interval, NormalizedIntervalList};
use std::iter::FusedIterator;

/// Iterator over the joint spans of two normalized lists
///
/// Yields only positive-length intersections, in ascending order.
#[derive(Debug, Clone)]
pub struct OverlapSweep<'a> {
    a: &'a [Interval],
    b: &'a [Interval],
    i: usize,
    j: usize,
}

impl<'a> OverlapSweep<'a> {
    pub fn new(a: &'a NormalizedIntervalList, b: &'a NormalizedIntervalList) -> Self {
        Self {
            a: a.as_slice(),
            b: b.as_slice(),
            i: 0,
            j: 0,
        }
    }
}

impl Iterator for OverlapSweep<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        while let (Some(cur_a), Some(cur_b)) = (self.a.get(self.i), self.b.get(self.j)) {
            let overlap = cur_a.intersection(*cur_b);

            // Equal ends advance B
            if cur_a.end() < cur_b.end() {
                self.i += 1;
            } else {
                self.j += 1;
            }

            if overlap.is_some() {
                return overlap;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.a.len() - self.i) + (self.b.len() - self.j);
        (0, Some(remaining))
    }
}

impl FusedIterator for OverlapSweep<'_> {}

/// Total time both lists cover simultaneously
///
/// # Example
/// ```
/// use copresence::{accumulate, normalize, BoundingInterval, RawIntervalSet};
///
/// let bound = BoundingInterval::new(100, 200).unwrap();
/// let pupil = normalize(RawIntervalSet::new(&[50, 150, 180, 250]).unwrap(), bound);
/// let tutor = normalize(RawIntervalSet::new(&[80, 120, 160, 220]).unwrap(), bound);
///
/// assert_eq!(accumulate(&pupil, &tutor), 40);
/// ```
pub fn accumulate(a: &NormalizedIntervalList, b: &NormalizedIntervalList) -> u64 {
    OverlapSweep::new(a, b).map(|iv| iv.duration()).sum()
}

/// Joint spans of two lists, sorted and disjoint
pub fn intersect(a: &NormalizedIntervalList, b: &NormalizedIntervalList) -> Vec<Interval> {
    OverlapSweep::new(a, b).collect()
}
