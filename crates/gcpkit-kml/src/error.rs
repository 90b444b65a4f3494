//! Error types for KMZ/KML handling.

use thiserror::Error;

/// Errors that can occur while extracting and parsing boundary data.
#[derive(Debug, Error)]
pub enum KmlError {
    /// I/O error reading the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive could not be read as a zip file.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// No `.kml` member found in the archive.
    #[error("no KML document found in archive")]
    MissingKmlDocument,

    /// The KML document is not well-formed XML.
    #[error("malformed KML document: {0}")]
    Markup(#[from] roxmltree::Error),

    /// The document parsed but contained no boundary vertices.
    #[error("no boundary coordinates found in KML document")]
    EmptyBoundary,

    /// A coordinate tuple could not be parsed as numbers.
    #[error("invalid coordinate tuple: {0:?}")]
    InvalidCoordinate(String),
}
