//! Clip arrangement operations.
//!
//! Pure functions over a snapshot of the clip collection. Each returns a new
//! `Vec<Clip>` (or plain data) and leaves the input untouched; the host
//! editor commits or discards the result. Collection order is insertion
//! order and is preserved by every operation here — nothing re-sorts by
//! timeline position.

use quickcut_core::{definitely_lt, QuickcutError, Result};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::clip::Clip;

/// Remove the clip at `delete_index` and close the gap it leaves.
///
/// Every remaining clip whose `timeline_start` is strictly after the deleted
/// clip's start shifts left by the deleted clip's duration. Clips at or
/// before the deleted position stay put. Shifts clamp at zero so a clip that
/// overlapped the deleted one can't land at a negative position.
pub fn ripple_delete(clips: &[Clip], delete_index: usize) -> Result<Vec<Clip>> {
    let deleted = clips
        .get(delete_index)
        .ok_or(QuickcutError::IndexOutOfRange {
            index: delete_index,
            len: clips.len(),
        })?;
    let anchor = deleted.timeline_start;
    let shift = deleted.duration();

    let mut result = Vec::with_capacity(clips.len() - 1);
    for (i, clip) in clips.iter().enumerate() {
        if i == delete_index {
            continue;
        }
        if definitely_lt(anchor, clip.timeline_start) {
            result.push(clip.with_timeline_start((clip.timeline_start - shift).max(0.0)));
        } else {
            result.push(clip.clone());
        }
    }
    Ok(result)
}

/// Ripple-delete several clips at once.
///
/// Indices address the input snapshot. They are processed in descending
/// numeric order so earlier deletions don't invalidate later indices; when
/// deleted clips' shift regions overlap, that descending fold *is* the
/// semantics — there is no final re-compaction pass. Duplicate indices are
/// rejected.
pub fn ripple_delete_multiple(clips: &[Clip], delete_indices: &[usize]) -> Result<Vec<Clip>> {
    let mut order: SmallVec<[usize; 8]> = SmallVec::from_slice(delete_indices);
    for &index in &order {
        if index >= clips.len() {
            return Err(QuickcutError::IndexOutOfRange {
                index,
                len: clips.len(),
            });
        }
    }
    order.sort_unstable_by(|a, b| b.cmp(a));
    if order.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(QuickcutError::InvalidParameter(
            "duplicate index in multi-delete".into(),
        ));
    }

    let mut current = clips.to_vec();
    for &index in &order {
        current = ripple_delete(&current, index)?;
    }
    Ok(current)
}

/// Duplicate the clips at `indices`, placing each copy immediately after its
/// original on the same track.
///
/// Copies are appended in the iteration order of `indices` with fresh ids;
/// originals keep their positions. Duplicating into an occupied region is
/// allowed — overlap is the caller's call, see [`clips_overlap`].
pub fn duplicate_clips(clips: &[Clip], indices: &[usize]) -> Result<Vec<Clip>> {
    let mut result = clips.to_vec();
    for &index in indices {
        let original = clips.get(index).ok_or(QuickcutError::IndexOutOfRange {
            index,
            len: clips.len(),
        })?;
        let mut copy = original.with_timeline_start(original.timeline_end());
        copy.id = Uuid::new_v4();
        result.push(copy);
    }
    Ok(result)
}

/// All indices between `a` and `b` inclusive, ascending.
///
/// Shift-click range selection helper; order of the two anchors doesn't
/// matter.
pub fn select_range(a: usize, b: usize) -> Vec<usize> {
    (a.min(b)..=a.max(b)).collect()
}

/// Whether two clips' half-open timeline intervals intersect.
///
/// Deliberately track-oblivious: clips on different tracks still count as
/// overlapping in time. Callers that want per-track semantics filter with
/// [`clips_on_track`] first.
pub fn clips_overlap(a: &Clip, b: &Clip) -> bool {
    a.range().overlaps(b.range())
}

/// Total timeline duration: the latest `timeline_end` over all clips, zero
/// for an empty timeline.
pub fn timeline_duration(clips: &[Clip]) -> f64 {
    clips
        .iter()
        .map(Clip::timeline_end)
        .fold(0.0, f64::max)
}

/// Indices of the clips on a given track, in collection order.
pub fn clips_on_track(clips: &[Clip], track_index: usize) -> Vec<usize> {
    clips
        .iter()
        .enumerate()
        .filter(|(_, clip)| clip.track_index == track_index)
        .map(|(i, _)| i)
        .collect()
}
