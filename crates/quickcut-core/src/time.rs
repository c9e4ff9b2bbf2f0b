//! Time representation for clip arrangement.
//!
//! Timeline positions are seconds as `f64`. Raw float comparison makes snap
//! thresholds and edge-touching checks flaky at boundary values, so every
//! comparison that decides behavior goes through the epsilon helpers here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for float comparisons on timeline positions.
///
/// One nanosecond. Far below anything a frame-accurate editor can represent,
/// far above accumulated f64 arithmetic error over realistic edit counts.
pub const EPSILON: f64 = 1e-9;

/// `a == b` within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// `a <= b` within [`EPSILON`].
#[inline]
pub fn approx_le(a: f64, b: f64) -> bool {
    a <= b + EPSILON
}

/// `a < b` by more than [`EPSILON`].
#[inline]
pub fn definitely_lt(a: f64, b: f64) -> bool {
    a + EPSILON < b
}

/// A time range with inclusive start and exclusive end, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time (inclusive)
    pub start: f64,
    /// Duration of the range
    pub duration: f64,
}

impl TimeRange {
    /// Create a new time range from start and duration.
    #[inline]
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// Create a time range from start and end times.
    #[inline]
    pub fn from_start_end(start: f64, end: f64) -> Self {
        Self {
            start,
            duration: end - start,
        }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(self) -> f64 {
        self.start + self.duration
    }

    /// Check if a time is within this range.
    #[inline]
    pub fn contains(self, time: f64) -> bool {
        approx_le(self.start, time) && definitely_lt(time, self.end())
    }

    /// Check if two half-open ranges intersect.
    ///
    /// Ranges that merely touch (one's end equals the other's start, within
    /// [`EPSILON`]) do not overlap.
    pub fn overlaps(self, other: Self) -> bool {
        definitely_lt(self.start, other.end()) && definitely_lt(other.start, self.end())
    }

    /// Compute the intersection of two ranges, if any.
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end().min(other.end());
        Some(Self::from_start_end(start, end))
    }

    /// Empty range starting at zero.
    pub const EMPTY: Self = Self {
        start: 0.0,
        duration: 0.0,
    };
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}s, {:.3}s)", self.start, self.end())
    }
}
