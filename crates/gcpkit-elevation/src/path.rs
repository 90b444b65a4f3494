//! Fixed-interval interpolation along boundary segments.
//!
//! Densifies a boundary ring before querying an elevation provider, for
//! callers that want an elevation profile along the ring rather than
//! vertex-only samples. Interpolation is plain Cartesian over decimal
//! degrees; no great-circle correction is applied, which is adequate for
//! the small survey areas this toolkit targets.

/// Generate intermediate points between two `(lat, lon)` coordinates at the
/// given interval in degrees.
///
/// The start point is included as the first sample and the end point is
/// always appended, so a segment shorter than the interval yields just the
/// endpoint's neighborhood: `[start-fractions..., end]`. A zero-length
/// segment yields only the start point.
pub fn interpolate_points(start: (f64, f64), end: (f64, f64), interval_deg: f64) -> Vec<(f64, f64)> {
    let (lat1, lon1) = start;
    let (lat2, lon2) = end;
    let total_distance = ((lat2 - lat1).powi(2) + (lon2 - lon1).powi(2)).sqrt();
    if total_distance == 0.0 {
        return vec![start];
    }

    let num_points = (total_distance / interval_deg).floor() as usize;
    let mut points = Vec::with_capacity(num_points + 1);
    for i in 0..num_points {
        let fraction = i as f64 / num_points as f64;
        points.push((
            lat1 + fraction * (lat2 - lat1),
            lon1 + fraction * (lon2 - lon1),
        ));
    }
    points.push(end);
    points
}

/// Densify a `(lat, lon)` ring at a fixed interval in degrees.
///
/// Each consecutive vertex pair is interpolated with [`interpolate_points`].
/// Segment endpoints are shared between segments, so interior ring vertices
/// appear twice in the output, matching the per-segment concatenation of
/// the upstream data layout.
pub fn interpolate_path(ring: &[(f64, f64)], interval_deg: f64) -> Vec<(f64, f64)> {
    ring.windows(2)
        .flat_map(|pair| interpolate_points(pair[0], pair[1], interval_deg))
        .collect()
}
