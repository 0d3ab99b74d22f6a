//! copresence - joint presence of two participants inside a bounding window
//!
//! Given a lesson window and raw enter/exit timestamps for a pupil and a tutor,
//! computes how long both were present at the same time. Each participant's
//! timestamps are clipped to the lesson, sorted and merged into disjoint spans;
//! the two span lists are then intersected with a linear two-pointer sweep.
//!
//! All intervals are half-open `[start, end)`: spans that merely touch merge
//! within one participant but contribute nothing across participants.

pub mod cli;
pub mod error;
pub mod input;
pub mod interval;
pub mod normalize;
pub mod overlap;
pub mod presence;
pub mod report;

pub use error::{InvalidInput, PresenceError, Result};
pub use interval::{BoundingInterval, Interval, NormalizedIntervalList, RawIntervalSet};
pub use normalize::normalize;
pub use overlap::{accumulate, intersect, OverlapSweep};
pub use presence::{analyze, compute_total_presence, IntervalMap, PresenceInput};
pub use report::PresenceReport;
