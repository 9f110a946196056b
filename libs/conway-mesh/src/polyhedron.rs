//! # Polyhedron Data Structure
//!
//! Polygonal mesh representation: vertex positions plus faces given as
//! counter-clockwise lists of vertex indices (viewed from outside).

use std::collections::BTreeSet;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ConwayError, ConwayResult};

/// A polygonal mesh with vertices and CCW-ordered faces.
///
/// Faces reference vertices by position, so vertices are only ever appended
/// while an operator runs. Operators never mutate their input; they build a
/// fresh `Polyhedron`.
///
/// # Example
///
/// ```rust
/// use conway_mesh::Polyhedron;
/// use glam::DVec3;
///
/// let square = Polyhedron::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y],
///     vec![vec![0, 1, 2, 3]],
/// );
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.edge_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Faces as CCW vertex index cycles
    faces: Vec<Vec<usize>>,
}

impl Polyhedron {
    /// Creates a polyhedron from vertices and faces.
    ///
    /// No validation happens here; operators call [`Polyhedron::validate`]
    /// before touching the topology.
    pub fn new(vertices: Vec<DVec3>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns true if the polyhedron has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Returns the distinct undirected edges as `(min, max)` index pairs,
    /// sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = BTreeSet::new();
        for face in &self.faces {
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.into_iter().collect()
    }

    /// Returns the Euler characteristic `V - E + F`.
    ///
    /// Only vertices referenced by at least one face are counted, so unused
    /// entries in the vertex list do not skew the result.
    pub fn euler_characteristic(&self) -> i64 {
        let used: BTreeSet<usize> = self.faces.iter().flatten().copied().collect();
        used.len() as i64 - self.edge_count() as i64 + self.faces.len() as i64
    }

    /// Returns the number of sides of every face.
    pub fn face_sides(&self) -> Vec<usize> {
        self.faces.iter().map(Vec::len).collect()
    }

    /// Validates the face list.
    ///
    /// Checks:
    /// - Every face has at least three vertices
    /// - No face repeats a vertex index
    /// - Every index is inside the vertex list
    pub fn validate(&self) -> ConwayResult<()> {
        let vertex_count = self.vertices.len();

        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(ConwayError::invalid_face(
                    face_index,
                    format!("face has {} vertices, at least 3 required", face.len()),
                ));
            }

            let mut seen = BTreeSet::new();
            for &index in face {
                if index >= vertex_count {
                    return Err(ConwayError::IndexOutOfRange {
                        face: face_index,
                        index,
                        vertex_count,
                    });
                }
                if !seen.insert(index) {
                    return Err(ConwayError::invalid_face(
                        face_index,
                        format!("vertex {index} appears more than once"),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Returns the mean of all vertex positions.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polyhedron {
        Polyhedron::new(
            vec![
                DVec3::ZERO,
                DVec3::X,
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::Y,
            ],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn test_polyhedron_default_is_empty() {
        let poly = Polyhedron::default();
        assert!(poly.is_empty());
        assert_eq!(poly.vertex_count(), 0);
        assert_eq!(poly.edge_count(), 0);
    }

    #[test]
    fn test_edges_are_canonical_and_unique() {
        let poly = Polyhedron::new(
            vec![DVec3::ZERO; 4],
            vec![vec![0, 1, 2], vec![0, 2, 3]],
        );
        assert_eq!(poly.edges(), vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_euler_characteristic_of_disc() {
        // A single polygon is a disc: V - E + F = 1
        assert_eq!(square().euler_characteristic(), 1);
    }

    #[test]
    fn test_validate_valid() {
        assert!(square().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_index() {
        let poly = Polyhedron::new(vec![DVec3::ZERO; 3], vec![vec![0, 1, 5]]);
        assert_eq!(
            poly.validate(),
            Err(ConwayError::IndexOutOfRange {
                face: 0,
                index: 5,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_validate_short_face() {
        let poly = Polyhedron::new(vec![DVec3::ZERO; 3], vec![vec![0, 1]]);
        assert!(matches!(
            poly.validate(),
            Err(ConwayError::InvalidFace { face: 0, .. })
        ));
    }

    #[test]
    fn test_validate_repeated_index() {
        let poly = Polyhedron::new(vec![DVec3::ZERO; 3], vec![vec![0, 1, 2, 1]]);
        assert!(matches!(
            poly.validate(),
            Err(ConwayError::InvalidFace { face: 0, .. })
        ));
    }

    #[test]
    fn test_centroid_is_vertex_mean() {
        assert_eq!(square().centroid(), DVec3::new(0.5, 0.5, 0.0));
        assert_eq!(Polyhedron::default().centroid(), DVec3::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_mesh() {
        let poly = square();
        let json = serde_json::to_string(&poly).unwrap();
        let back: Polyhedron = serde_json::from_str(&json).unwrap();
        assert_eq!(back, poly);
    }
}
