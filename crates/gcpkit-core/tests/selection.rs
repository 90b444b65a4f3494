//! Integration tests for the full GCP selection pipeline.

use gcpkit_core::{select_gcps, CoreError, Vertex, VertexAlignedLookup};

/// A small surveyed field, roughly 230 x 210 meters, as a closed ring.
fn survey_ring() -> Vec<Vertex> {
    vec![
        Vertex::new(35.37595845788469, 38.9522538283185),
        Vertex::new(35.37859798212953, 38.95242226297977),
        Vertex::new(35.37879484832216, 38.9542421701009),
        Vertex::new(35.37591846319395, 38.95436793389439),
        Vertex::new(35.37595845788469, 38.9522538283185),
    ]
}

#[test]
fn test_small_survey_area_gets_floor_count() {
    let ring = survey_ring();
    // Gentle terrain: complexity below 1 leaves the policy floor in place
    let elevations = vec![612.3, 612.9, 613.1, 612.5, 612.3];

    let selection = select_gcps(&ring, &elevations).unwrap();

    // A fraction of a square degree: the area term contributes nothing
    assert!(selection.area_size < 1.0);
    assert_eq!(selection.target_count, 5);
    assert!(selection.achieved_count() >= 1);
    assert!(selection.triangle_count >= 2);

    // All selected points fall inside the boundary bounding box
    for gcp in &selection.gcp_points {
        assert!(gcp.lon > 35.375 && gcp.lon < 35.379);
        assert!(gcp.lat > 38.952 && gcp.lat < 38.955);
    }
}

#[test]
fn test_rough_terrain_inflates_target() {
    let ring = survey_ring();
    let calm = select_gcps(&ring, &[100.0, 100.2, 100.1, 100.3, 100.0]).unwrap();
    let rough = select_gcps(&ring, &[100.0, 180.0, 95.0, 210.0, 100.0]).unwrap();

    assert!(rough.terrain_complexity > 1.0);
    assert!(rough.target_count > calm.target_count);
}

#[test]
fn test_selected_elevations_match_nearest_vertex() {
    use gcpkit_core::ElevationLookup;

    let ring = survey_ring();
    let elevations = vec![610.0, 620.0, 630.0, 640.0, 610.0];
    let selection = select_gcps(&ring, &elevations).unwrap();

    let lookup = VertexAlignedLookup::new(&ring, &elevations).unwrap();
    for gcp in &selection.gcp_points {
        assert_eq!(gcp.elevation, lookup.elevation_at(gcp.lon, gcp.lat));
    }
}

#[test]
fn test_degenerate_boundary_is_fatal() {
    let collinear = vec![
        Vertex::new(0.0, 0.0),
        Vertex::new(1.0, 0.0),
        Vertex::new(2.0, 0.0),
    ];
    let result = select_gcps(&collinear, &[1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(CoreError::DegenerateGeometry { .. })));
}

#[test]
fn test_inputs_are_borrowed_unchanged() {
    let ring = survey_ring();
    let elevations = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let ring_before = ring.clone();
    let elevations_before = elevations.clone();

    let first = select_gcps(&ring, &elevations).unwrap();
    let second = select_gcps(&ring, &elevations).unwrap();

    assert_eq!(ring, ring_before);
    assert_eq!(elevations, elevations_before);
    // No hidden state between invocations
    assert_eq!(first, second);
}
