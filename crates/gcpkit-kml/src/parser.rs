//! KML boundary ring parsing.

use crate::{KmlError, Result};
use gcpkit_core::Vertex;
use roxmltree::{Document, Node};

/// Parse the outer boundary ring of the first polygon placemark.
///
/// Walks `Placemark > Polygon > outerBoundaryIs > LinearRing > coordinates`
/// and parses the whitespace-separated `lon,lat[,alt]` tuples, keeping the
/// first two comma fields of each. Elements are matched by local name so
/// both namespaced and bare KML parse.
///
/// Returns [`KmlError::EmptyBoundary`] when no such element with at least
/// one coordinate tuple exists.
pub fn parse_boundary(kml: &str) -> Result<Vec<Vertex>> {
    let document = Document::parse(kml)?;

    for placemark in elements_named(document.root_element(), "Placemark") {
        for polygon in elements_named(placemark, "Polygon") {
            for outer in elements_named(polygon, "outerBoundaryIs") {
                for ring in elements_named(outer, "LinearRing") {
                    if let Some(coordinates) =
                        elements_named(ring, "coordinates").next().and_then(|n| n.text())
                    {
                        let vertices = parse_coordinates(coordinates)?;
                        if !vertices.is_empty() {
                            return Ok(vertices);
                        }
                    }
                }
            }
        }
    }

    Err(KmlError::EmptyBoundary)
}

/// Descendant elements with the given local tag name, ignoring namespaces.
fn elements_named<'a>(
    node: Node<'a, 'a>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'a>> + 'a {
    node.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Parse whitespace-separated `lon,lat[,alt]` tuples.
fn parse_coordinates(text: &str) -> Result<Vec<Vertex>> {
    text.split_whitespace()
        .map(|tuple| {
            let mut fields = tuple.split(',');
            let lon = parse_field(fields.next(), tuple)?;
            let lat = parse_field(fields.next(), tuple)?;
            Ok(Vertex::new(lon, lat))
        })
        .collect()
}

fn parse_field(field: Option<&str>, tuple: &str) -> Result<f64> {
    field
        .and_then(|f| f.trim().parse::<f64>().ok())
        .ok_or_else(|| KmlError::InvalidCoordinate(tuple.to_string()))
}
