//! Stride-based GCP sampling over triangle centroids.

use crate::geometry::{GcpPoint, Vertex};
use crate::{CoreError, Result};

/// Strategy for annotating a sampled location with an elevation.
///
/// The shipped [`VertexAlignedLookup`] approximates elevation by reusing the
/// sample of the nearest boundary vertex; a true DEM-backed nearest-neighbor
/// lookup can replace it without touching the sampler.
pub trait ElevationLookup {
    /// Elevation in meters for the given location.
    fn elevation_at(&self, lon: f64, lat: f64) -> f64;
}

/// Elevation lookup against boundary vertices and their positionally
/// aligned elevation samples.
///
/// The nearest vertex is chosen by Manhattan distance in degrees, a cheap
/// proxy for true nearest-neighbor search; ties go to the lowest vertex
/// index. The elevation-to-vertex association is purely positional, an
/// explicit approximation inherited from the source data layout.
#[derive(Debug, Clone)]
pub struct VertexAlignedLookup<'a> {
    vertices: &'a [Vertex],
    elevations: &'a [f64],
}

impl<'a> VertexAlignedLookup<'a> {
    /// Pair boundary vertices with their elevation samples.
    ///
    /// The sequences must be non-empty and of equal length.
    pub fn new(vertices: &'a [Vertex], elevations: &'a [f64]) -> Result<Self> {
        if vertices.is_empty() {
            return Err(CoreError::DegenerateGeometry { vertex_count: 0 });
        }
        if vertices.len() != elevations.len() {
            return Err(CoreError::ElevationCountMismatch {
                vertices: vertices.len(),
                samples: elevations.len(),
            });
        }
        Ok(Self {
            vertices,
            elevations,
        })
    }
}

impl ElevationLookup for VertexAlignedLookup<'_> {
    fn elevation_at(&self, lon: f64, lat: f64) -> f64 {
        let target = Vertex::new(lon, lat);
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;
        // Strict comparison keeps the lowest index on ties
        for (index, vertex) in self.vertices.iter().enumerate() {
            let distance = vertex.manhattan_distance(target);
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }
        self.elevations[best_index]
    }
}

/// Select approximately `target_count` GCPs by striding over centroids.
///
/// The spacing is `max(1, floor(len / target_count))` and indices 0,
/// spacing, 2*spacing, ... are selected until the sequence is exhausted,
/// yielding `ceil(len / spacing)` points. This rarely matches the target
/// exactly; the deviation is documented behavior, not corrected.
///
/// An empty centroid sequence yields an empty result, a valid "no GCPs
/// producible" outcome distinct from a processing error.
pub fn sample_gcps(
    centroids: &[Vertex],
    lookup: &dyn ElevationLookup,
    target_count: usize,
) -> Vec<GcpPoint> {
    if centroids.is_empty() {
        return Vec::new();
    }
    let spacing = (centroids.len() / target_count.max(1)).max(1);
    centroids
        .iter()
        .step_by(spacing)
        .map(|centroid| GcpPoint {
            lon: centroid.lon,
            lat: centroid.lat,
            elevation: lookup.elevation_at(centroid.lon, centroid.lat),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct ZeroLookup;

    impl ElevationLookup for ZeroLookup {
        fn elevation_at(&self, _lon: f64, _lat: f64) -> f64 {
            0.0
        }
    }

    fn centroid_row(count: usize) -> Vec<Vertex> {
        (0..count).map(|i| Vertex::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_empty_centroids_yield_empty_result() {
        let gcps = sample_gcps(&[], &ZeroLookup, 5);
        assert!(gcps.is_empty());
    }

    #[test]
    fn test_exact_match_case() {
        // 10 centroids at target 5: spacing 2, indices 0,2,4,6,8
        let centroids = centroid_row(10);
        let gcps = sample_gcps(&centroids, &ZeroLookup, 5);
        assert_eq!(gcps.len(), 5);
        for (gcp, expected) in gcps.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0]) {
            assert_relative_eq!(gcp.lon, expected);
        }
    }

    #[test]
    fn test_deviation_from_target_case() {
        // 7 centroids at target 5: spacing 1, all 7 selected
        let centroids = centroid_row(7);
        let gcps = sample_gcps(&centroids, &ZeroLookup, 5);
        assert_eq!(gcps.len(), 7);
    }

    #[test]
    fn test_large_spacing_overshoot() {
        // 12 centroids at target 5: spacing 2, indices 0,2,4,6,8,10 -> 6 GCPs
        let centroids = centroid_row(12);
        let gcps = sample_gcps(&centroids, &ZeroLookup, 5);
        assert_eq!(gcps.len(), 6);
    }

    #[test]
    fn test_nearest_vertex_elevation() {
        let vertices = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(10.0, 10.0),
        ];
        let elevations = vec![100.0, 200.0, 300.0];
        let lookup = VertexAlignedLookup::new(&vertices, &elevations).unwrap();

        assert_relative_eq!(lookup.elevation_at(1.0, 1.0), 100.0);
        assert_relative_eq!(lookup.elevation_at(9.0, 1.0), 200.0);
        assert_relative_eq!(lookup.elevation_at(9.5, 9.0), 300.0);
    }

    #[test]
    fn test_nearest_vertex_tie_goes_to_lowest_index() {
        // (5, 0) is Manhattan-equidistant from both vertices
        let vertices = vec![Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0)];
        let elevations = vec![1.0, 2.0];
        let lookup = VertexAlignedLookup::new(&vertices, &elevations).unwrap();
        assert_relative_eq!(lookup.elevation_at(5.0, 0.0), 1.0);
    }

    #[test]
    fn test_lookup_rejects_mismatched_lengths() {
        let vertices = vec![Vertex::new(0.0, 0.0)];
        let elevations = vec![1.0, 2.0];
        assert!(matches!(
            VertexAlignedLookup::new(&vertices, &elevations),
            Err(CoreError::ElevationCountMismatch {
                vertices: 1,
                samples: 2
            })
        ));
    }

    #[test]
    fn test_lookup_rejects_empty_vertices() {
        assert!(matches!(
            VertexAlignedLookup::new(&[], &[]),
            Err(CoreError::DegenerateGeometry { vertex_count: 0 })
        ));
    }
}
