//! Per-segment and cumulative arc lengths of a polyline.

use rsim_core::PathPoint;

/// Lengths of every consecutive point pair of a path, plus their running sum.
///
/// For a path of N points both vectors hold N-1 entries and
/// `cumulative[i] == lengths[0] + … + lengths[i]`.  A path with fewer than
/// two points produces an empty table, which means "not simulatable".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentTable {
    /// Length of segment `i` (from point `i` to point `i + 1`), in km.
    pub lengths: Vec<f64>,
    /// Distance from the first point to the end of segment `i`, in km.
    pub cumulative: Vec<f64>,
}

impl SegmentTable {
    /// Measure every segment of `path` with the haversine distance.
    pub fn build(path: &[PathPoint]) -> Self {
        if path.len() < 2 {
            return Self::default();
        }

        let lengths: Vec<f64> = path
            .windows(2)
            .map(|pair| pair[0].distance_km(pair[1]))
            .collect();

        let mut running = 0.0;
        let cumulative = lengths
            .iter()
            .map(|len| {
                running += len;
                running
            })
            .collect();

        Self { lengths, cumulative }
    }

    /// Total path length in km (0 for an empty table).
    #[inline]
    pub fn total_km(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// `true` when the source path had fewer than two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Distance from the first point to the start of segment `i`.
    #[inline]
    pub fn segment_start_km(&self, i: usize) -> f64 {
        if i == 0 { 0.0 } else { self.cumulative[i - 1] }
    }
}
