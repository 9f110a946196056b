//! Ambo: truncate every vertex down to the edge midpoints.

use crate::error::ConwayResult;
use crate::flags::{cyclic_triples, FaceTag, Flag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::edge_center;
use crate::polyhedron::Polyhedron;

use super::{closed_edges, finish, Operator};

/// Builds the rectification: one vertex per edge midpoint, one face per
/// input face (shrunk onto its midpoints) and one face per input vertex.
///
/// Every face is processed; midpoints are created the first time either
/// direction of their edge is visited.
///
/// # Errors
///
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` / `OpenEdge` if the input is not a closed manifold
///
/// # Example
///
/// ```rust
/// use conway_mesh::ops::ambo;
/// use conway_mesh::seeds::cube;
///
/// // cuboctahedron
/// let cuboct = ambo(&cube()).unwrap();
/// assert_eq!((cuboct.vertex_count(), cuboct.edge_count(), cuboct.face_count()), (12, 24, 14));
/// ```
pub fn ambo(poly: &Polyhedron) -> ConwayResult<Polyhedron> {
    closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::empty();
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in cyclic_triples(face) {
            let a = VertexTag::midpoint(v1, v2);
            let b = VertexTag::midpoint(v2, v3);
            if !vertices.contains(a) {
                vertices.push(a, edge_center(verts, (v1, v2))?)?;
            }

            flags.insert(Flag::new(FaceTag::Original(i), a, b))?;
            flags.insert(Flag::new(FaceTag::Vertex(v2), b, a))?;
        }
    }

    finish(Operator::Ambo, poly, vertices, flags)
}
