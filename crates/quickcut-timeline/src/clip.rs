//! Clip types for the timeline.

use quickcut_core::{approx_le, definitely_lt, QuickcutError, Result, TimeRange};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clip placed on the timeline.
///
/// A clip is a trimmed window into a media source (`trim_start..trim_end`,
/// seconds into the source) positioned at `timeline_start` on the shared
/// timeline. Clips are plain values: edit operations produce new clips rather
/// than mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID
    pub id: Uuid,
    /// Clip name (displayed in UI)
    pub name: String,
    /// Path or identifier of the source media, opaque to this crate
    pub source_path: String,
    /// Source in point, seconds into the media
    pub trim_start: f64,
    /// Source out point, seconds into the media
    pub trim_end: f64,
    /// Position of the clip start on the timeline, seconds
    pub timeline_start: f64,
    /// Which parallel track the clip occupies
    pub track_index: usize,
}

impl Clip {
    /// Create a new clip covering `trim_start..trim_end` of a source,
    /// placed at `timeline_start` on track 0.
    pub fn new(
        name: impl Into<String>,
        source_path: impl Into<String>,
        trim_start: f64,
        trim_end: f64,
        timeline_start: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source_path: source_path.into(),
            trim_start,
            trim_end,
            timeline_start,
            track_index: 0,
        }
    }

    /// Builder-style track assignment.
    pub fn on_track(mut self, track_index: usize) -> Self {
        self.track_index = track_index;
        self
    }

    /// Duration of the clip on the timeline, always positive for a valid clip.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.trim_end - self.trim_start
    }

    /// End position of the clip on the timeline.
    #[inline]
    pub fn timeline_end(&self) -> f64 {
        self.timeline_start + self.duration()
    }

    /// The half-open timeline interval this clip occupies.
    #[inline]
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.timeline_start, self.duration())
    }

    /// Check the clip invariants: `0 <= trim_start < trim_end` and
    /// `timeline_start >= 0`.
    pub fn validate(&self) -> Result<()> {
        if !(approx_le(0.0, self.trim_start) && definitely_lt(self.trim_start, self.trim_end)) {
            return Err(QuickcutError::InvalidParameter(format!(
                "clip '{}': trim window {:.3}..{:.3} is empty or negative",
                self.name, self.trim_start, self.trim_end
            )));
        }
        if !approx_le(0.0, self.timeline_start) {
            return Err(QuickcutError::InvalidParameter(format!(
                "clip '{}': timeline start {:.3} is negative",
                self.name, self.timeline_start
            )));
        }
        Ok(())
    }

    /// Copy of this clip at a different timeline position.
    pub fn with_timeline_start(&self, timeline_start: f64) -> Self {
        Self {
            timeline_start,
            ..self.clone()
        }
    }

    /// Split the clip at a timeline offset strictly inside it.
    ///
    /// `offset` is seconds from the clip's timeline start. The left half keeps
    /// this clip's id and position; the right half gets a fresh id and starts
    /// where the left half ends, continuing from the same point in the source.
    pub fn split_at(&self, offset: f64) -> Result<(Clip, Clip)> {
        if !(definitely_lt(0.0, offset) && definitely_lt(offset, self.duration())) {
            return Err(QuickcutError::InvalidParameter(format!(
                "split offset {:.3} outside clip duration {:.3}",
                offset,
                self.duration()
            )));
        }
        let left = Self {
            trim_end: self.trim_start + offset,
            ..self.clone()
        };
        let right = Self {
            id: Uuid::new_v4(),
            name: format!("{} (split)", self.name),
            trim_start: self.trim_start + offset,
            timeline_start: self.timeline_start + offset,
            ..self.clone()
        };
        Ok((left, right))
    }
}
