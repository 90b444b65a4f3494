//! KMZ-to-report orchestration.

use gcpkit_core::{select_gcps, CoreError, GcpReport};
use gcpkit_elevation::{ElevationError, ElevationProvider};
use gcpkit_kml::KmlError;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Fatal failures while processing a KMZ archive.
///
/// Soft conditions (no KML member, no boundary coordinates) do not appear
/// here; they are reported via [`GcpReport::error`] instead.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The archive or its markup could not be read.
    #[error("boundary source error: {0}")]
    Boundary(#[from] KmlError),

    /// The elevation provider failed.
    #[error("elevation fetch error: {0}")]
    Elevation(#[from] ElevationError),

    /// The boundary could not be processed by the selection core.
    #[error("selection error: {0}")]
    Selection(#[from] CoreError),
}

/// Process a KMZ archive into a GCP report.
///
/// Extracts the embedded KML document, parses the boundary ring, fetches
/// one elevation per boundary vertex from `provider` (a single blocking
/// call), and runs the selection pipeline.
pub fn process_kmz<P: AsRef<Path>>(
    path: P,
    provider: &dyn ElevationProvider,
) -> Result<GcpReport, ProcessError> {
    let path = path.as_ref();

    let kml = match gcpkit_kml::extract_kml_from_kmz(path) {
        Ok(kml) => kml,
        Err(KmlError::MissingKmlDocument) => {
            return Ok(GcpReport::error("No KML file found in KMZ"));
        }
        Err(e) => return Err(e.into()),
    };

    let boundary = match gcpkit_kml::parse_boundary(&kml) {
        Ok(boundary) => boundary,
        Err(KmlError::EmptyBoundary) => {
            return Ok(GcpReport::error("No coordinates found in KML file"));
        }
        Err(e) => return Err(e.into()),
    };
    debug!("parsed boundary with {} vertices", boundary.len());

    let locations: Vec<(f64, f64)> = boundary.iter().map(|v| (v.lat, v.lon)).collect();
    let elevations = provider.fetch_elevations(&locations)?;
    debug!("fetched {} elevation samples", elevations.len());

    let selection = select_gcps(&boundary, &elevations)?;
    info!(
        "selected {} GCPs (target {}) from {} triangles",
        selection.achieved_count(),
        selection.target_count,
        selection.triangle_count
    );

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("archive");
    Ok(GcpReport::success(format!("Processed {}", name), &selection))
}
