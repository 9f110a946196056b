//! Dual: swap the roles of faces and vertices.

use crate::error::{ConwayError, ConwayResult};
use crate::flags::{cyclic_pairs, FaceTag, Flag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::face_center;
use crate::polyhedron::Polyhedron;

use super::{closed_edges, finish, Operator};

/// Builds the dual: one vertex per input face (at its centroid) and one
/// face per input vertex.
///
/// Vertex `i` of the result is the center of input face `i`. The face for
/// input vertex `v` visits the centers of the faces around `v`; the
/// output faces are ordered by `v`.
///
/// # Errors
///
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` if a directed edge is used twice
/// - `OpenEdge` if an edge has no face across it
pub fn dual(poly: &Polyhedron) -> ConwayResult<Polyhedron> {
    let edges = closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::empty();
    for (i, face) in poly.faces().iter().enumerate() {
        vertices.push(VertexTag::FaceCenter(i), face_center(verts, face, 0.0)?)?;
    }

    let mut flags = FlagSet::new();
    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2) in cyclic_pairs(face) {
            let j = match edges.across(v1, v2)? {
                FaceTag::Original(j) => j,
                other => {
                    return Err(ConwayError::inconsistent(format!(
                        "edge {v1} -> {v2} borders derived face {other}"
                    )))
                }
            };
            flags.insert(Flag::new(
                FaceTag::Vertex(v1),
                VertexTag::FaceCenter(j),
                VertexTag::FaceCenter(i),
            ))?;
        }
    }

    finish(Operator::Dual, poly, vertices, flags)
}
