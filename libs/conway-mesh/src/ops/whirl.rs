//! Whirl: gyro with a rotated copy of every face kept in the middle.

use config::constants::WHIRL_INSET_RATIO;

use crate::error::ConwayResult;
use crate::flags::{cyclic_triples, FaceTag, Flag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::{edge_third, face_center};
use crate::polyhedron::Polyhedron;

use super::{closed_edges, finish, Operator};

/// Replaces every n-gon with a smaller central n-gon ringed by n hexagons.
///
/// Corner `(f, v)` gets an inset vertex `v` moved [`WHIRL_INSET_RATIO`] of
/// the way to the face center; the hexagon at corner `v2` runs
/// `[f:v1, v1>v2, v2>v1, v2, v2>v3, f:v2]`.
///
/// # Errors
///
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` / `OpenEdge` if the input is not a closed manifold
pub fn whirl(poly: &Polyhedron) -> ConwayResult<Polyhedron> {
    closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::with_originals(verts);
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        let center = face_center(verts, face, 0.0)?;

        for (v1, v2, v3) in cyclic_triples(face) {
            vertices.push(
                VertexTag::FaceCorner(i, v1),
                verts[v1].lerp(center, WHIRL_INSET_RATIO),
            )?;
            vertices.push(VertexTag::EdgeThird(v1, v2), edge_third(verts, (v1, v2))?)?;

            flags.add_face(
                FaceTag::Corner(i, v2),
                &[
                    VertexTag::FaceCorner(i, v1),
                    VertexTag::EdgeThird(v1, v2),
                    VertexTag::EdgeThird(v2, v1),
                    VertexTag::Original(v2),
                    VertexTag::EdgeThird(v2, v3),
                    VertexTag::FaceCorner(i, v2),
                ],
            )?;
            flags.insert(Flag::new(
                FaceTag::Original(i),
                VertexTag::FaceCorner(i, v1),
                VertexTag::FaceCorner(i, v2),
            ))?;
        }
    }

    finish(Operator::Whirl, poly, vertices, flags)
}
