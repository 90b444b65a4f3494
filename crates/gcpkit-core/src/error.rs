//! Error types for GCP selection.

use thiserror::Error;

/// Errors that can occur during GCP selection.
///
/// All variants indicate input that cannot be meaningfully processed; none
/// are recoverable within the core. Callers converting failures to a
/// structured report should do so at their own boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Fewer than 3 non-collinear vertices reached the triangulator.
    #[error("degenerate boundary geometry: {vertex_count} vertices, need at least 3 non-collinear")]
    DegenerateGeometry {
        /// Number of distinct vertices the triangulator received.
        vertex_count: usize,
    },

    /// A vertex coordinate was rejected by the triangulation (NaN or infinite).
    #[error("invalid vertex coordinate: {0}")]
    InvalidCoordinate(String),

    /// Elevation samples are aligned with boundary vertices by position, so
    /// the two sequences must have the same length.
    #[error("elevation sample count {samples} does not match boundary vertex count {vertices}")]
    ElevationCountMismatch {
        /// Number of boundary vertices.
        vertices: usize,
        /// Number of elevation samples.
        samples: usize,
    },
}
