//! Elevation provider trait and the synthetic offline provider.

use crate::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplier of elevation values for geographic locations.
///
/// `locations` are `(latitude, longitude)` pairs in decimal degrees. The
/// returned sequence is order-preserving with exactly one elevation (in
/// meters) per queried location. Implementations block; no timeout or retry
/// is part of this contract.
pub trait ElevationProvider {
    /// Fetch one elevation per location, order-preserving.
    fn fetch_elevations(&self, locations: &[(f64, f64)]) -> Result<Vec<f64>>;
}

/// Deterministic pseudo-elevation provider for offline runs and tests.
///
/// Stands in for real DEM data: elevations are drawn uniformly from
/// 0 to 100 meters using a seeded ChaCha stream, so the same provider
/// configuration always produces the same profile for the same number of
/// locations.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    seed: u64,
    max_elevation_m: f64,
}

impl SyntheticProvider {
    /// Create a provider with the given seed and the default 100 m ceiling.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_elevation_m: 100.0,
        }
    }

    /// Create a provider with an explicit elevation ceiling in meters.
    pub fn with_max_elevation(seed: u64, max_elevation_m: f64) -> Self {
        Self {
            seed,
            max_elevation_m,
        }
    }
}

impl ElevationProvider for SyntheticProvider {
    fn fetch_elevations(&self, locations: &[(f64, f64)]) -> Result<Vec<f64>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        Ok(locations
            .iter()
            .map(|_| rng.gen_range(0.0..self.max_elevation_m))
            .collect())
    }
}
