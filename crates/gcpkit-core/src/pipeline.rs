//! End-to-end GCP selection over a boundary ring.

use crate::geometry::{GcpPoint, Vertex};
use crate::sampler::VertexAlignedLookup;
use crate::{estimator, mesh, policy, sampler};
use crate::{CoreError, Result};

/// Outcome of a GCP selection run.
///
/// Carries the target count alongside the selected points so callers can
/// observe how far integer striding deviated from the target.
#[derive(Debug, Clone, PartialEq)]
pub struct GcpSelection {
    /// The selected GCPs, in centroid walk order.
    pub gcp_points: Vec<GcpPoint>,
    /// The count the policy asked for.
    pub target_count: usize,
    /// Bounding-box area of the boundary, in square degrees.
    pub area_size: f64,
    /// Elevation standard deviation over the boundary vertices, in meters.
    pub terrain_complexity: f64,
    /// Number of triangles in the mesh the centroids were drawn from.
    pub triangle_count: usize,
}

impl GcpSelection {
    /// Number of GCPs actually selected. Approximates, but rarely equals,
    /// [`target_count`](Self::target_count).
    pub fn achieved_count(&self) -> usize {
        self.gcp_points.len()
    }
}

/// Select GCPs for a boundary ring with positionally aligned elevations.
///
/// Sequences estimation, count policy, triangulation, and sampling. The
/// boundary is borrowed read-only; all outputs are freshly allocated.
///
/// # Errors
///
/// [`CoreError::ElevationCountMismatch`] when the sequences disagree in
/// length, and [`CoreError::DegenerateGeometry`] when the boundary cannot
/// be triangulated. Both are fatal contract violations, never converted to
/// a soft result here.
pub fn select_gcps(boundary: &[Vertex], elevations: &[f64]) -> Result<GcpSelection> {
    if boundary.len() != elevations.len() {
        return Err(CoreError::ElevationCountMismatch {
            vertices: boundary.len(),
            samples: elevations.len(),
        });
    }

    let estimate = estimator::estimate(boundary, elevations);
    let target_count = policy::target_gcp_count(estimate.area_size, estimate.terrain_complexity);

    let mesh = mesh::triangulate(boundary)?;
    let centroids = mesh.centroids();

    let lookup = VertexAlignedLookup::new(boundary, elevations)?;
    let gcp_points = sampler::sample_gcps(&centroids, &lookup, target_count);

    Ok(GcpSelection {
        gcp_points,
        target_count,
        area_size: estimate.area_size,
        terrain_complexity: estimate.terrain_complexity,
        triangle_count: mesh.triangles.len(),
    })
}
