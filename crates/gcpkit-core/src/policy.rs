//! Adaptive GCP count policy.

/// Minimum number of GCPs requested regardless of area size.
pub const MIN_GCP_COUNT: usize = 5;

/// Derive the target GCP count from area size and terrain complexity.
///
/// `base = max(5, floor(area_size / 10))`, then if `terrain_complexity > 1`
/// the count is inflated by `floor(base * (terrain_complexity - 1))`. The
/// floor of 5 guarantees enough reference points for small areas, the base
/// scales roughly linearly with area, and rough terrain (normalized
/// complexity above 1) raises the count super-linearly.
///
/// Total function: non-positive area or complexity simply yields the floor.
pub fn target_gcp_count(area_size: f64, terrain_complexity: f64) -> usize {
    let mut base = MIN_GCP_COUNT.max((area_size / 10.0).floor() as usize);
    if terrain_complexity > 1.0 {
        base += (base as f64 * (terrain_complexity - 1.0)).floor() as usize;
    }
    base
}
