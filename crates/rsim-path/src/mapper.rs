//! Progress fraction → position along the path.

use rsim_core::{GeoPoint, PathPoint};

use crate::SegmentTable;

/// Result of [`map_progress`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedPosition {
    /// Interpolated coordinate.
    pub position: GeoPoint,
    /// Index of the segment containing `position`.
    pub segment_index: usize,
}

/// Locate the point at `progress` (fraction of total arc length) along `path`.
///
/// The containing segment is the first one whose cumulative length reaches
/// the target distance; the position is then interpolated linearly in degree
/// space within that segment.  A zero-length segment maps to its start point.
///
/// Returns `None` when the table is empty (fewer than two points), when
/// `table` does not describe `path`, or when no segment reaches the target
/// (progress beyond 1 or NaN).  Callers keep their previous position then.
pub fn map_progress(table: &SegmentTable, path: &[PathPoint], progress: f64) -> Option<MappedPosition> {
    if table.is_empty() || path.len() != table.len() + 1 {
        return None;
    }

    let target = table.total_km() * progress;
    let segment = table.cumulative.iter().position(|&cum| cum >= target)?;

    let length = table.lengths[segment];
    let fraction = if length > 0.0 {
        ((target - table.segment_start_km(segment)) / length).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Some(MappedPosition {
        position:      path[segment].lerp(path[segment + 1], fraction),
        segment_index: segment,
    })
}
