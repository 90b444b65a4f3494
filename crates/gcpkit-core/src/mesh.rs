//! Delaunay triangulation of the boundary vertex set.

use crate::geometry::Vertex;
use crate::{CoreError, Result};
use spade::{DelaunayTriangulation, Point2, Triangulation};

/// A triangulated boundary vertex set.
///
/// Triangles are index-triples into `vertices` and together cover the convex
/// hull of the input set (a standard triangulation property; not necessarily
/// the interior of a concave boundary polygon).
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// The retriangulated vertex list. Usually matches the input, possibly
    /// reordered; exact duplicate input vertices (such as a repeated ring
    /// closure vertex) are merged.
    pub vertices: Vec<Vertex>,
    /// Triangles as index-triples into `vertices`.
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Arithmetic-mean centroid of a triangle (not area-weighted).
    pub fn centroid_of(&self, triangle: [usize; 3]) -> Vertex {
        let [a, b, c] = triangle.map(|i| self.vertices[i]);
        Vertex::new(
            (a.lon + b.lon + c.lon) / 3.0,
            (a.lat + b.lat + c.lat) / 3.0,
        )
    }

    /// Centroids of all triangles, in triangle order.
    pub fn centroids(&self) -> Vec<Vertex> {
        self.triangles.iter().map(|&t| self.centroid_of(t)).collect()
    }
}

/// Delaunay-triangulate a boundary vertex set.
///
/// The triangle set is stable for a fixed input vertex order. Fewer than 3
/// distinct vertices, or an all-collinear set, cannot be triangulated and
/// yields [`CoreError::DegenerateGeometry`].
pub fn triangulate(vertices: &[Vertex]) -> Result<TriangleMesh> {
    if vertices.len() < 3 {
        return Err(CoreError::DegenerateGeometry {
            vertex_count: vertices.len(),
        });
    }

    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    for vertex in vertices {
        triangulation
            .insert(Point2::new(vertex.lon, vertex.lat))
            .map_err(|e| CoreError::InvalidCoordinate(e.to_string()))?;
    }

    // Collinear input produces a valid but face-free triangulation
    if triangulation.num_inner_faces() == 0 {
        return Err(CoreError::DegenerateGeometry {
            vertex_count: triangulation.num_vertices(),
        });
    }

    let mesh_vertices = triangulation
        .vertices()
        .map(|v| {
            let position = v.position();
            Vertex::new(position.x, position.y)
        })
        .collect();

    let triangles = triangulation
        .inner_faces()
        .map(|face| face.vertices().map(|v| v.fix().index()))
        .collect();

    Ok(TriangleMesh {
        vertices: mesh_vertices,
        triangles,
    })
}
