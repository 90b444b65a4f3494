//! Area size and terrain complexity estimation.

use crate::geometry::{BoundingBox, Vertex};

/// Scalar summary of a surveyed area, consumed by the GCP count policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainEstimate {
    /// Bounding-box width x height over the boundary vertices, in square
    /// degrees.
    pub area_size: f64,
    /// Population standard deviation of the elevation samples, in meters.
    /// A proxy for how rugged the terrain is.
    pub terrain_complexity: f64,
}

/// Estimate area size and terrain complexity from a boundary ring and its
/// positionally aligned elevation samples.
///
/// Degenerate input yields degenerate zeros rather than an error: an empty
/// vertex sequence or one without two distinct longitudes and latitudes
/// gives `area_size == 0`, and fewer than two elevation samples give
/// `terrain_complexity == 0`.
pub fn estimate(vertices: &[Vertex], elevations: &[f64]) -> TerrainEstimate {
    let area_size = BoundingBox::from_vertices(vertices)
        .map(|bbox| bbox.area())
        .unwrap_or(0.0);

    TerrainEstimate {
        area_size,
        terrain_complexity: std_deviation(elevations),
    }
}

/// Population standard deviation. Empty input yields 0.
fn std_deviation(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_estimate_square() {
        let vertices = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(0.0, 10.0),
        ];
        // Population std dev of [2, 4, 4, 6] is sqrt(2)
        let estimate = estimate(&vertices, &[2.0, 4.0, 4.0, 6.0]);
        assert_relative_eq!(estimate.area_size, 100.0);
        assert_relative_eq!(estimate.terrain_complexity, 2.0_f64.sqrt());
    }

    #[test]
    fn test_collinear_boundary_has_zero_area() {
        let vertices = vec![
            Vertex::new(0.0, 5.0),
            Vertex::new(1.0, 5.0),
            Vertex::new(2.0, 5.0),
        ];
        let estimate = estimate(&vertices, &[1.0, 2.0, 3.0]);
        assert_eq!(estimate.area_size, 0.0);
    }

    #[test]
    fn test_single_elevation_sample_has_zero_complexity() {
        let vertices = vec![Vertex::new(0.0, 0.0)];
        let estimate = estimate(&vertices, &[123.4]);
        assert_eq!(estimate.terrain_complexity, 0.0);
    }

    #[test]
    fn test_empty_input_is_degenerate_not_an_error() {
        let estimate = estimate(&[], &[]);
        assert_eq!(estimate.area_size, 0.0);
        assert_eq!(estimate.terrain_complexity, 0.0);
    }

    #[test]
    fn test_uniform_elevations_have_zero_complexity() {
        let vertices = vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)];
        let estimate = estimate(&vertices, &[50.0, 50.0]);
        assert_eq!(estimate.terrain_complexity, 0.0);
    }
}
