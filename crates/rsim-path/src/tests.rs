//! Unit tests for rsim-path.

use rsim_core::{GeoPoint, PathPoint, Waypoint};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Four stops on a straight line through central Bangalore (≈1 km apart).
fn line_stops() -> Vec<Waypoint> {
    vec![
        Waypoint::new(12.9716, 77.5946, "Start Point"),
        Waypoint::new(12.9789, 77.6008, "Intermediate Stop 1"),
        Waypoint::new(12.9861, 77.6070, "Intermediate Stop 2"),
        Waypoint::new(12.9933, 77.6132, "End Point"),
    ]
}

fn line_path() -> Vec<PathPoint> {
    line_stops().iter().map(Waypoint::point).collect()
}

fn close(a: GeoPoint, b: GeoPoint) -> bool {
    (a.lat - b.lat).abs() < 1e-9 && (a.lon - b.lon).abs() < 1e-9
}

// ── SegmentTable ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;
    use crate::SegmentTable;

    #[test]
    fn one_entry_per_segment() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        assert_eq!(table.lengths.len(), path.len() - 1);
        assert_eq!(table.cumulative.len(), path.len() - 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn cumulative_is_running_sum_and_non_decreasing() {
        let table = SegmentTable::build(&line_path());
        let mut sum = 0.0;
        for (len, cum) in table.lengths.iter().zip(&table.cumulative) {
            sum += len;
            assert!((sum - cum).abs() < 1e-12);
        }
        assert!(table.cumulative.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(table.total_km(), *table.cumulative.last().unwrap());
    }

    #[test]
    fn segment_lengths_are_about_a_kilometre() {
        let table = SegmentTable::build(&line_path());
        for len in &table.lengths {
            assert!((0.9..1.2).contains(len), "segment {len} km");
        }
    }

    #[test]
    fn short_paths_are_empty() {
        assert!(SegmentTable::build(&[]).is_empty());
        assert!(SegmentTable::build(&[GeoPoint::new(1.0, 1.0)]).is_empty());
        assert_eq!(SegmentTable::build(&[]).total_km(), 0.0);
    }

    #[test]
    fn segment_start_offsets() {
        let table = SegmentTable::build(&line_path());
        assert_eq!(table.segment_start_km(0), 0.0);
        assert_eq!(table.segment_start_km(2), table.cumulative[1]);
    }
}

// ── map_progress ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod mapper {
    use super::*;
    use crate::{map_progress, SegmentTable};

    #[test]
    fn progress_zero_is_first_point() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        let mapped = map_progress(&table, &path, 0.0).unwrap();
        assert_eq!(mapped.position, path[0]);
        assert_eq!(mapped.segment_index, 0);
    }

    #[test]
    fn progress_one_is_last_point() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        let mapped = map_progress(&table, &path, 1.0).unwrap();
        assert!(close(mapped.position, path[3]), "got {}", mapped.position);
        assert_eq!(mapped.segment_index, 2);
    }

    #[test]
    fn approaches_last_point_from_below() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        let near = map_progress(&table, &path, 0.999_999).unwrap();
        assert!(near.position.distance_km(path[3]) < 0.001);
    }

    #[test]
    fn segment_boundary_lands_on_shared_point() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        let progress = table.cumulative[0] / table.total_km();
        let mapped = map_progress(&table, &path, progress).unwrap();
        assert!(mapped.segment_index <= 1);
        assert!(mapped.position.distance_km(path[1]) < 1e-6);
    }

    #[test]
    fn midpoint_of_two_point_path() {
        let path = vec![GeoPoint::new(12.0, 77.0), GeoPoint::new(12.01, 77.0)];
        let table = SegmentTable::build(&path);
        let mapped = map_progress(&table, &path, 0.5).unwrap();
        assert!(close(mapped.position, GeoPoint::new(12.005, 77.0)));
    }

    #[test]
    fn two_point_path_never_fails_across_range() {
        let path = vec![GeoPoint::new(12.9716, 77.5946), GeoPoint::new(12.9933, 77.6132)];
        let table = SegmentTable::build(&path);
        for step in 0..=1000 {
            let progress = step as f64 / 1000.0;
            let mapped = map_progress(&table, &path, progress)
                .unwrap_or_else(|| panic!("no position at {progress}"));
            assert!(mapped.position.lat.is_finite() && mapped.position.lon.is_finite());
            assert_eq!(mapped.segment_index, 0);
        }
    }

    #[test]
    fn beyond_one_has_no_position() {
        let path = line_path();
        let table = SegmentTable::build(&path);
        assert!(map_progress(&table, &path, 1.5).is_none());
        assert!(map_progress(&table, &path, f64::NAN).is_none());
    }

    #[test]
    fn not_simulatable_has_no_position() {
        let single = vec![GeoPoint::new(1.0, 1.0)];
        let table = SegmentTable::build(&single);
        assert!(map_progress(&table, &single, 0.0).is_none());
    }

    #[test]
    fn mismatched_table_has_no_position() {
        let path = line_path();
        let table = SegmentTable::build(&path[..2]);
        assert!(map_progress(&table, &path, 0.5).is_none());
    }

    #[test]
    fn zero_length_segments_do_not_produce_nan() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(12.01, 77.0);

        let path = vec![a, a, b];
        let table = SegmentTable::build(&path);
        let start = map_progress(&table, &path, 0.0).unwrap();
        assert_eq!(start.position, a);

        let degenerate = vec![a, a];
        let table = SegmentTable::build(&degenerate);
        let mapped = map_progress(&table, &degenerate, 0.5).unwrap();
        assert_eq!(mapped.position, a);
    }
}

// ── resolve_stop ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use super::*;
    use crate::{resolve_stop, resolve_stop_within};

    #[test]
    fn at_first_stop() {
        let stops = line_stops();
        assert_eq!(resolve_stop(stops[0].point(), &stops), 0);
    }

    #[test]
    fn at_intermediate_stop() {
        let stops = line_stops();
        assert_eq!(resolve_stop(stops[2].point(), &stops), 2);
    }

    #[test]
    fn at_last_stop() {
        let stops = line_stops();
        assert_eq!(resolve_stop(stops[3].point(), &stops), 3);
    }

    #[test]
    fn far_away_falls_back_to_last_index() {
        let stops = line_stops();
        assert_eq!(resolve_stop(GeoPoint::new(-33.9, 151.2), &stops), 3);
    }

    #[test]
    fn between_stops_reports_last_index() {
        // Forward-only threshold scan: no stop within 0.1 km → final stop.
        let stops = line_stops();
        let between = stops[0].point().lerp(stops[1].point(), 0.5);
        assert_eq!(resolve_stop(between, &stops), 3);
    }

    #[test]
    fn first_match_in_route_order_wins() {
        // A loop route revisits its start: the earlier index is reported.
        let mut stops = line_stops();
        stops.push(Waypoint::new(12.9716, 77.5946, "Back to Start"));
        assert_eq!(resolve_stop(stops[0].point(), &stops), 0);
    }

    #[test]
    fn always_in_range() {
        let stops = line_stops();
        for lat in [-80.0, 0.0, 12.98, 45.0] {
            for lon in [-170.0, 0.0, 77.6, 120.0] {
                let idx = resolve_stop(GeoPoint::new(lat, lon), &stops);
                assert!(idx < stops.len());
            }
        }
    }

    #[test]
    fn custom_radius() {
        let stops = line_stops();
        let between = stops[0].point().lerp(stops[1].point(), 0.5);
        assert_eq!(resolve_stop_within(between, &stops, 1.0), 0);
    }

    #[test]
    fn empty_and_single_stop_lists() {
        assert_eq!(resolve_stop(GeoPoint::new(0.0, 0.0), &[]), 0);
        let one = vec![Waypoint::new(50.0, 8.0, "Only")];
        assert_eq!(resolve_stop(GeoPoint::new(0.0, 0.0), &one), 0);
    }
}

// ── simplify / IndexedPath ────────────────────────────────────────────────────

#[cfg(test)]
mod simplify {
    use super::*;
    use crate::{simplify, IndexedPath, PathError, DEFAULT_SIMPLIFY_TOLERANCE};

    #[test]
    fn collinear_points_removed() {
        let pts = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.5, 0.5),
            GeoPoint::new(1.0, 1.0),
        ];
        let out = simplify(&pts, DEFAULT_SIMPLIFY_TOLERANCE).unwrap();
        assert_eq!(out, vec![pts[0], pts[2]]);
    }

    #[test]
    fn corners_kept() {
        let pts = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
        ];
        let out = simplify(&pts, DEFAULT_SIMPLIFY_TOLERANCE).unwrap();
        assert_eq!(out, pts);
    }

    #[test]
    fn short_paths_unchanged() {
        let pts = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        assert_eq!(simplify(&pts, 10.0).unwrap(), pts);
    }

    #[test]
    fn invalid_tolerance_rejected() {
        let err = simplify(&line_path(), -1.0).unwrap_err();
        assert!(matches!(err, PathError::InvalidTolerance(_)));
        assert!(simplify(&line_path(), f64::NAN).is_err());
    }

    #[test]
    fn straight_line_stops_collapse_to_endpoints() {
        // The sample stops lie on a line to within 1e-4 degrees.
        let path = IndexedPath::new(line_path());
        let simplified = path.simplified(0.0001).unwrap();
        assert_eq!(simplified.points().len(), 2);
        assert!((simplified.total_km() - path.total_km()).abs() < 1e-3);
    }

    #[test]
    fn indexed_path_from_waypoints() {
        let path = IndexedPath::from_waypoints(&line_stops());
        assert!(path.is_simulatable());
        assert_eq!(path.table().len(), 3);
        assert_eq!(path.position_at(0.0).unwrap().position, path.points()[0]);
        assert!(!IndexedPath::new(vec![]).is_simulatable());
    }
}
