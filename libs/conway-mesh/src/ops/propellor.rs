//! Propellor: twist every face and fill the corners with quads.

use crate::error::ConwayResult;
use crate::flags::{cyclic_triples, FaceTag, Flag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::edge_third;
use crate::polyhedron::Polyhedron;

use super::{closed_edges, finish, Operator};

/// Replaces every n-gon with a rotated n-gon and n quadrilaterals.
///
/// Uses the same edge-third points as [`gyro`](super::gyro) but keeps a
/// central face instead of a center vertex.
///
/// # Errors
///
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` / `OpenEdge` if the input is not a closed manifold
pub fn propellor(poly: &Polyhedron) -> ConwayResult<Polyhedron> {
    closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::with_originals(verts);
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        for (v1, v2, v3) in cyclic_triples(face) {
            vertices.push(VertexTag::EdgeThird(v1, v2), edge_third(verts, (v1, v2))?)?;

            flags.insert(Flag::new(
                FaceTag::Original(i),
                VertexTag::EdgeThird(v1, v2),
                VertexTag::EdgeThird(v2, v3),
            ))?;
            flags.add_face(
                FaceTag::Corner(i, v2),
                &[
                    VertexTag::EdgeThird(v1, v2),
                    VertexTag::EdgeThird(v2, v1),
                    VertexTag::Original(v2),
                    VertexTag::EdgeThird(v2, v3),
                ],
            )?;
        }
    }

    finish(Operator::Propellor, poly, vertices, flags)
}
