//! QuickCut Timeline - Clip arrangement arithmetic
//!
//! Implements the pure editing math behind the timeline:
//! - Clip placements (trim window + timeline position + track)
//! - Magnetic and grid snapping for drag gestures
//! - Ripple delete with automatic gap closure
//! - Duplication, overlap detection, selection helpers
//!
//! Every operation takes a snapshot of the clip collection and returns a new
//! value; nothing here mutates shared state, performs I/O, or blocks. The
//! host editor owns the collection and decides when to commit results.

pub mod arrange;
pub mod clip;
pub mod snap;

pub use arrange::{
    clips_on_track, clips_overlap, duplicate_clips, ripple_delete, ripple_delete_multiple,
    select_range, timeline_duration,
};
pub use clip::Clip;
pub use snap::{
    grid_snap, magnetic_snap, nearest_snap_point, SnapEdge, SnapPoint, DEFAULT_GRID_INTERVAL,
    DEFAULT_SNAP_THRESHOLD,
};
