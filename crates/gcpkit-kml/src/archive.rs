//! KMZ archive member extraction.

use crate::{KmlError, Result};
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Extract the first `.kml` member from a KMZ archive on disk.
pub fn extract_kml_from_kmz<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = std::fs::File::open(path)?;
    extract_kml(file)
}

/// Extract the first `.kml` member from a KMZ archive reader.
///
/// Member names are matched case-insensitively on the `.kml` extension.
/// Returns [`KmlError::MissingKmlDocument`] when the archive holds no KML
/// member.
pub fn extract_kml<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)?;

    let kml_name = archive
        .file_names()
        .find(|name| name.to_ascii_lowercase().ends_with(".kml"))
        .map(String::from)
        .ok_or(KmlError::MissingKmlDocument)?;

    let mut member = archive.by_name(&kml_name)?;
    let mut contents = String::new();
    member.read_to_string(&mut contents)?;
    Ok(contents)
}
