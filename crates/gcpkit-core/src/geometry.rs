//! Geographic primitives shared across the selection stages.

use serde::{Deserialize, Serialize};

/// A boundary vertex in decimal degrees, longitude first (as stored in the
/// source markup).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
}

impl Vertex {
    /// Create a vertex from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Manhattan distance to another vertex in degrees.
    ///
    /// A deliberately cheap proxy for nearest-neighbor lookup; not a true
    /// great-circle or even Euclidean distance.
    pub fn manhattan_distance(&self, other: Vertex) -> f64 {
        (self.lon - other.lon).abs() + (self.lat - other.lat).abs()
    }
}

/// A selected Ground Control Point. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcpPoint {
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Elevation in meters.
    pub elevation: f64,
}

/// Axis-aligned bounding box over a set of vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum longitude (west edge).
    pub min_lon: f64,
    /// Maximum longitude (east edge).
    pub max_lon: f64,
    /// Minimum latitude (south edge).
    pub min_lat: f64,
    /// Maximum latitude (north edge).
    pub max_lat: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a vertex sequence.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bbox = BoundingBox {
            min_lon: first.lon,
            max_lon: first.lon,
            min_lat: first.lat,
            max_lat: first.lat,
        };
        for v in &vertices[1..] {
            bbox.min_lon = bbox.min_lon.min(v.lon);
            bbox.max_lon = bbox.max_lon.max(v.lon);
            bbox.min_lat = bbox.min_lat.min(v.lat);
            bbox.max_lat = bbox.max_lat.max(v.lat);
        }
        Some(bbox)
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Bounding-box area (width x height) in square degrees.
    ///
    /// This is the "area size" used by the count policy, not a true polygon
    /// area. Collapses to 0 when all vertices share a longitude or latitude.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}
