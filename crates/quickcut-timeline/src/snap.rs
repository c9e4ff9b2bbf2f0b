//! Snapping math for timeline drag interactions.
//!
//! Two kinds of snapping: magnetic (pull a dragged position onto a nearby
//! clip edge) and grid (round to a fixed interval). Both are pure functions
//! of their inputs; the host decides when during a drag gesture to apply
//! them and when to commit the result.

use quickcut_core::EPSILON;

use crate::clip::Clip;

/// Default magnetic snap distance, seconds.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.5;

/// Default grid interval, seconds.
pub const DEFAULT_GRID_INTERVAL: f64 = 1.0;

/// Which kind of clip edge a snap resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapEdge {
    /// A clip's `timeline_start`
    Start,
    /// A clip's `timeline_end`
    End,
}

/// A resolved snap target on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoint {
    /// Snapped time, seconds
    pub time: f64,
    /// Which edge kind matched
    pub edge: SnapEdge,
}

/// Snap a dragged position onto the nearest other clip's edge.
///
/// Scans the start and end edges of every clip except `moving_index` (the
/// clip being dragged must not snap to itself) and returns the closest edge
/// within `threshold`. On an exact tie the first edge in iteration order
/// wins: clips in collection order, each clip's start edge before its end.
/// Returns `candidate_time` unchanged when snapping is disabled or no edge
/// is in range.
pub fn magnetic_snap(
    candidate_time: f64,
    moving_index: usize,
    clips: &[Clip],
    threshold: f64,
    enabled: bool,
) -> f64 {
    if !enabled {
        return candidate_time;
    }

    let mut best: Option<(f64, f64)> = None; // (snap_time, distance)
    for (i, clip) in clips.iter().enumerate() {
        if i == moving_index {
            continue;
        }
        for edge in [clip.timeline_start, clip.timeline_end()] {
            let dist = (edge - candidate_time).abs();
            if dist > threshold + EPSILON {
                continue;
            }
            // Strictly closer replaces; an equal distance keeps the first hit.
            if best.map_or(true, |(_, best_dist)| dist + EPSILON < best_dist) {
                best = Some((edge, dist));
            }
        }
    }

    best.map_or(candidate_time, |(time, _)| time)
}

/// Round a time to the nearest multiple of `interval`, half away from zero.
///
/// Passthrough when disabled. `interval` must be positive; this is a caller
/// contract, not a checked error.
pub fn grid_snap(time: f64, interval: f64, enabled: bool) -> f64 {
    if !enabled {
        return time;
    }
    debug_assert!(interval > 0.0, "grid interval must be positive");
    (time / interval).round() * interval
}

/// Find the nearest clip edge to `time` within `threshold`.
///
/// Unlike [`magnetic_snap`] no clip is excluded; this is the query the host
/// uses for playhead alignment and cut-point hints. Same first-wins
/// tie-break. `None` means no edge is in range and the caller keeps its
/// input time.
pub fn nearest_snap_point(time: f64, clips: &[Clip], threshold: f64) -> Option<SnapPoint> {
    let mut best: Option<(SnapPoint, f64)> = None;
    for clip in clips {
        let edges = [
            (clip.timeline_start, SnapEdge::Start),
            (clip.timeline_end(), SnapEdge::End),
        ];
        for (edge_time, edge) in edges {
            let dist = (edge_time - time).abs();
            if dist > threshold + EPSILON {
                continue;
            }
            if best.map_or(true, |(_, best_dist)| dist + EPSILON < best_dist) {
                best = Some((
                    SnapPoint {
                        time: edge_time,
                        edge,
                    },
                    dist,
                ));
            }
        }
    }
    best.map(|(point, _)| point)
}
