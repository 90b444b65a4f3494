//! Blocking Open-Elevation API client.

use crate::provider::ElevationProvider;
use crate::{ElevationError, Result};
use serde::{Deserialize, Serialize};

/// Public Open-Elevation lookup endpoint.
pub const DEFAULT_API_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Elevation provider backed by an Open-Elevation compatible HTTP API.
///
/// Issues a single blocking POST per [`fetch_elevations`] call with all
/// locations in the request body. Network latency and availability are the
/// caller's concern; there is no built-in timeout or retry.
///
/// [`fetch_elevations`]: ElevationProvider::fetch_elevations
#[derive(Debug)]
pub struct OpenElevationClient {
    client: reqwest::blocking::Client,
    url: String,
}

#[derive(Serialize)]
struct LookupRequest {
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
struct LookupResult {
    elevation: f64,
}

impl OpenElevationClient {
    /// Create a client against the public Open-Elevation endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Create a client against a custom lookup endpoint (such as a
    /// self-hosted Open-Elevation instance).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    /// The lookup endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for OpenElevationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevationProvider for OpenElevationClient {
    fn fetch_elevations(&self, locations: &[(f64, f64)]) -> Result<Vec<f64>> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }

        let request = LookupRequest {
            locations: locations
                .iter()
                .map(|&(latitude, longitude)| Location {
                    latitude,
                    longitude,
                })
                .collect(),
        };

        let response: LookupResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        if response.results.len() != locations.len() {
            return Err(ElevationError::ResponseCountMismatch {
                requested: locations.len(),
                received: response.results.len(),
            });
        }

        Ok(response.results.into_iter().map(|r| r.elevation).collect())
    }
}
