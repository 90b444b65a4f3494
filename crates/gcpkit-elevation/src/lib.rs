//! # gcpkit-elevation
//!
//! Elevation sources for GCP selection.
//!
//! The [`ElevationProvider`] trait models the elevation collaborator: one
//! blocking call mapping an ordered sequence of `(lat, lon)` locations to an
//! order-preserving sequence of elevations, one per location. No timeout or
//! retry is built in; callers wanting resilience wrap the provider
//! themselves.
//!
//! Two providers ship here:
//! - [`OpenElevationClient`] queries an Open-Elevation compatible HTTP API.
//! - [`SyntheticProvider`] generates deterministic seeded pseudo-elevations
//!   for offline runs and tests, standing in for real DEM data.
//!
//! [`interpolate_path`] densifies a boundary at a fixed interval for callers
//! that want elevation profiles along the ring rather than vertex-only
//! samples.
//!
//! ## Example
//!
//! ```
//! use gcpkit_elevation::{ElevationProvider, SyntheticProvider};
//!
//! let provider = SyntheticProvider::new(42);
//! let elevations = provider.fetch_elevations(&[(38.95, 35.37), (38.96, 35.38)])?;
//! assert_eq!(elevations.len(), 2);
//! # Ok::<(), gcpkit_elevation::ElevationError>(())
//! ```

mod error;
mod open_elevation;
mod path;
mod provider;

pub use error::ElevationError;
pub use open_elevation::{OpenElevationClient, DEFAULT_API_URL};
pub use path::{interpolate_path, interpolate_points};
pub use provider::{ElevationProvider, SyntheticProvider};

/// Result type for elevation operations.
pub type Result<T> = std::result::Result<T, ElevationError>;
