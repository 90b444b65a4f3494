//! # gcpkit-kml
//!
//! Boundary vertex source for GCP selection: extracts the KML document
//! embedded in a KMZ archive and parses the outer boundary ring of the
//! first polygon placemark into an ordered `(longitude, latitude)` vertex
//! sequence.
//!
//! A KMZ file is a zip archive containing a KML document (conventionally
//! `doc.kml`) plus optional referenced assets. Only the first `.kml` member
//! is consulted, and only the first
//! `Placemark > Polygon > outerBoundaryIs > LinearRing > coordinates`
//! element within it. Multi-polygon and inner-ring (hole) geometries are
//! out of scope.
//!
//! ## Example
//!
//! ```no_run
//! use gcpkit_kml::read_boundary;
//!
//! let boundary = read_boundary("survey_area.kmz")?;
//! println!("boundary has {} vertices", boundary.len());
//! # Ok::<(), gcpkit_kml::KmlError>(())
//! ```

mod archive;
mod error;
mod parser;

pub use archive::{extract_kml, extract_kml_from_kmz};
pub use error::KmlError;
pub use parser::parse_boundary;

use gcpkit_core::Vertex;
use std::path::Path;

/// Result type for KMZ/KML operations.
pub type Result<T> = std::result::Result<T, KmlError>;

/// Read the boundary ring from a KMZ archive on disk.
///
/// Convenience wrapper over [`extract_kml_from_kmz`] and [`parse_boundary`].
pub fn read_boundary<P: AsRef<Path>>(path: P) -> Result<Vec<Vertex>> {
    let kml = extract_kml_from_kmz(path)?;
    parse_boundary(&kml)
}
