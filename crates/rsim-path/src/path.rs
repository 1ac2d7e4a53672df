//! `IndexedPath` — a polyline bundled with its segment table.

use rsim_core::{PathPoint, Waypoint};

use crate::{map_progress, simplify, MappedPosition, PathResult, SegmentTable};

/// An immutable polyline whose arc lengths are measured once at construction.
///
/// Keeping the points and the table together guarantees the table always
/// describes the points it is used with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedPath {
    points: Vec<PathPoint>,
    table:  SegmentTable,
}

impl IndexedPath {
    pub fn new(points: Vec<PathPoint>) -> Self {
        let table = SegmentTable::build(&points);
        Self { points, table }
    }

    /// Straight-line path through the stops themselves, for routes that came
    /// back without geometry.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        Self::new(waypoints.iter().map(Waypoint::point).collect())
    }

    #[inline]
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    #[inline]
    pub fn table(&self) -> &SegmentTable {
        &self.table
    }

    #[inline]
    pub fn total_km(&self) -> f64 {
        self.table.total_km()
    }

    /// `false` for paths with fewer than two points.
    #[inline]
    pub fn is_simulatable(&self) -> bool {
        !self.table.is_empty()
    }

    /// See [`map_progress`].
    #[inline]
    pub fn position_at(&self, progress: f64) -> Option<MappedPosition> {
        map_progress(&self.table, &self.points, progress)
    }

    /// A re-indexed copy with Douglas–Peucker simplification applied.
    pub fn simplified(&self, tolerance: f64) -> PathResult<IndexedPath> {
        Ok(IndexedPath::new(simplify(&self.points, tolerance)?))
    }

    pub fn into_points(self) -> Vec<PathPoint> {
        self.points
    }
}
