//! # gcpkit-core
//!
//! Ground Control Point (GCP) selection from a surveyed area's boundary
//! polygon and per-vertex elevation samples.
//!
//! A GCP is a reference location with known position and elevation, used to
//! calibrate photogrammetry and mapping workflows. This crate derives a
//! spatially well-distributed set of GCPs from a boundary ring:
//!
//! 1. Estimate the area size (bounding-box product) and terrain complexity
//!    (elevation standard deviation) from the boundary.
//! 2. Derive an adaptive target GCP count from both.
//! 3. Delaunay-triangulate the boundary vertices and take triangle centroids
//!    as candidate locations.
//! 4. Stride through the centroids at a spacing that yields approximately
//!    the target count, annotating each with a nearest-vertex elevation.
//!
//! The achieved count is reported alongside the target; integer striding
//! rarely lands on the target exactly and no attempt is made to force it.
//!
//! ## Example
//!
//! ```
//! use gcpkit_core::{select_gcps, Vertex};
//!
//! let boundary = vec![
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(10.0, 0.0),
//!     Vertex::new(10.0, 10.0),
//!     Vertex::new(0.0, 10.0),
//! ];
//! let elevations = vec![12.0, 12.5, 12.2, 12.4];
//!
//! let selection = select_gcps(&boundary, &elevations)?;
//! assert_eq!(selection.target_count, 10);
//! assert!(selection.achieved_count() >= 1);
//! # Ok::<(), gcpkit_core::CoreError>(())
//! ```

mod error;
mod estimator;
mod geometry;
mod mesh;
mod pipeline;
mod policy;
mod report;
mod sampler;

pub use error::CoreError;
pub use estimator::{estimate, TerrainEstimate};
pub use geometry::{BoundingBox, GcpPoint, Vertex};
pub use mesh::{triangulate, TriangleMesh};
pub use pipeline::{select_gcps, GcpSelection};
pub use policy::{target_gcp_count, MIN_GCP_COUNT};
pub use report::{GcpReport, ReportStatus};
pub use sampler::{sample_gcps, ElevationLookup, VertexAlignedLookup};

/// Result type for GCP selection operations.
pub type Result<T> = std::result::Result<T, CoreError>;
