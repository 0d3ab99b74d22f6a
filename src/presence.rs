//! Joint presence of pupil and tutor inside a lesson
//!
//! Wires the keyed input through [`normalize`] and [`accumulate`]. This is the
//! only place that knows about the `lesson`/`pupil`/`tutor` keys.

use crate::error::{PresenceError, Result};
use crate::interval::{BoundingInterval, RawIntervalSet};
use crate::normalize::normalize;
use crate::overlap::{accumulate, intersect};
use crate::report::PresenceReport;
use std::collections::BTreeMap;

/// Keyed timestamp sequences as they arrive from callers
pub type IntervalMap = BTreeMap<String, Vec<u64>>;

pub const LESSON_KEY: &str = "lesson";
pub const PUPIL_KEY: &str = "pupil";
pub const TUTOR_KEY: &str = "tutor";

/// Validated view over an [`IntervalMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceInput<'a> {
    pub lesson: BoundingInterval,
    pub pupil: RawIntervalSet<'a>,
    pub tutor: RawIntervalSet<'a>,
}

impl<'a> PresenceInput<'a> {
    /// Look up and validate the three required keys
    ///
    /// Presence of `lesson`, `pupil`, `tutor` is checked in that order before
    /// any value is validated; unknown keys are ignored.
    pub fn from_map(intervals: &'a IntervalMap) -> Result<Self> {
        let lesson = require(intervals, LESSON_KEY)?;
        let pupil = require(intervals, PUPIL_KEY)?;
        let tutor = require(intervals, TUTOR_KEY)?;

        Ok(Self {
            lesson: BoundingInterval::from_slice(lesson)?,
            pupil: RawIntervalSet::new(pupil)?,
            tutor: RawIntervalSet::new(tutor)?,
        })
    }
}

fn require<'a>(intervals: &'a IntervalMap, key: &str) -> Result<&'a [u64]> {
    intervals
        .get(key)
        .map(Vec::as_slice)
        .ok_or_else(|| PresenceError::MissingKey(key.to_string()))
}

/// Total time pupil and tutor were both present during the lesson
///
/// # Example
/// ```
/// use copresence::{compute_total_presence, IntervalMap};
///
/// let mut intervals = IntervalMap::new();
/// intervals.insert("lesson".into(), vec![100, 200]);
/// intervals.insert("pupil".into(), vec![50, 150, 180, 250]);
/// intervals.insert("tutor".into(), vec![80, 120, 160, 220]);
///
/// assert_eq!(compute_total_presence(&intervals).unwrap(), 40);
/// ```
pub fn compute_total_presence(intervals: &IntervalMap) -> Result<u64> {
    let input = PresenceInput::from_map(intervals)?;

    let pupil = normalize(input.pupil, input.lesson);
    let tutor = normalize(input.tutor, input.lesson);
    let total = accumulate(&pupil, &tutor);

    tracing::debug!(lesson = %input.lesson, total, "computed joint presence");
    Ok(total)
}

/// Same pipeline as [`compute_total_presence`], keeping the intermediates
pub fn analyze(intervals: &IntervalMap) -> Result<PresenceReport> {
    let input = PresenceInput::from_map(intervals)?;

    let pupil = normalize(input.pupil, input.lesson);
    let tutor = normalize(input.tutor, input.lesson);
    let joint = intersect(&pupil, &tutor);

    let report = PresenceReport::new(input.lesson, pupil, tutor, joint);
    tracing::debug!(
        lesson = %report.lesson,
        pupil_presence = report.pupil_presence,
        tutor_presence = report.tutor_presence,
        total = report.total,
        "analyzed joint presence"
    );
    Ok(report)
}
