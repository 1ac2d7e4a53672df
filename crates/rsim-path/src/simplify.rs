//! Douglas–Peucker polyline simplification.
//!
//! Works in degree space (longitude as x, latitude as y), matching how the
//! optimizer service thins its street geometry before returning it.  The first
//! and last points are always kept.

use rsim_core::PathPoint;

use crate::{PathError, PathResult};

/// Tolerance, in degrees, applied to optimizer geometry (≈1 m at the equator).
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.00001;

/// Drop every point that lies within `tolerance` degrees of the simplified
/// line through its neighbours.
///
/// Paths with fewer than three points are returned unchanged.
pub fn simplify(points: &[PathPoint], tolerance: f64) -> PathResult<Vec<PathPoint>> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(PathError::InvalidTolerance(tolerance));
    }
    if points.len() < 3 {
        return Ok(points.to_vec());
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    // (first, end) ranges still to split.
    let mut stack = vec![(0usize, last)];
    while let Some((first, end)) = stack.pop() {
        if end <= first + 1 {
            continue;
        }

        let (mut max_dist, mut max_index) = (0.0, first);
        for i in first + 1..end {
            let d = segment_distance(points[i], points[first], points[end]);
            if d > max_dist {
                max_dist = d;
                max_index = i;
            }
        }

        if max_dist > tolerance {
            keep[max_index] = true;
            stack.push((first, max_index));
            stack.push((max_index, end));
        }
    }

    Ok(points
        .iter()
        .zip(keep)
        .filter_map(|(&p, kept)| kept.then_some(p))
        .collect())
}

/// Planar distance from `p` to the segment `a`–`b`, in degrees.
fn segment_distance(p: PathPoint, a: PathPoint, b: PathPoint) -> f64 {
    let (dx, dy) = (b.lon - a.lon, b.lat - a.lat);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.lon - a.lon) * dx + (p.lat - a.lat) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.lon + t * dx, a.lat + t * dy);
    ((p.lon - cx).powi(2) + (p.lat - cy).powi(2)).sqrt()
}
