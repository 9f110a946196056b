//! Chamfer: bevel every edge into a hexagon.

use glam::DVec3;

use crate::error::ConwayResult;
use crate::flags::{cyclic_pairs, FaceTag, Flag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::{face_center, face_normal};
use crate::polyhedron::Polyhedron;

use super::{check_finite, closed_edges, finish, Operator};

/// Shrinks every face towards its center and fills each edge with a
/// hexagon.
///
/// Every input face corner `(f, v)` gets a new vertex
/// `v + (center - v) * thickness + normal * height`. The input vertices
/// are kept. `thickness` is not clamped: `1` puts every inset vertex of a
/// face on its center and values outside `[0, 1]` overshoot. Each input
/// face becomes a smaller copy of itself, each input
/// edge a hexagon joining the two copies and the two original endpoints.
///
/// # Errors
///
/// - `InvalidParameter` if either parameter is not finite
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` / `OpenEdge` if the input is not a closed manifold
/// - `DegenerateGeometry` if `height != 0` and a face has no normal
pub fn chamfer(poly: &Polyhedron, thickness: f64, height: f64) -> ConwayResult<Polyhedron> {
    check_finite("chamfer thickness", thickness)?;
    check_finite("chamfer height", height)?;
    closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::with_originals(verts);
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        let center = face_center(verts, face, 0.0)?;
        let normal = if height != 0.0 {
            face_normal(verts, face)?
        } else {
            DVec3::ZERO
        };

        for (v1, v2) in cyclic_pairs(face) {
            let p2 = verts[v2];
            let b = VertexTag::FaceCorner(i, v2);
            vertices.push(b, p2 + (center - p2) * thickness + normal * height)?;
            let c = VertexTag::FaceCorner(i, v1);

            let edge_face = FaceTag::edge(v1, v2);
            flags.insert(Flag::new(edge_face, VertexTag::Original(v2), b))?;
            flags.insert(Flag::new(edge_face, b, c))?;
            flags.insert(Flag::new(edge_face, c, VertexTag::Original(v1)))?;
            flags.insert(Flag::new(FaceTag::Original(i), c, b))?;
        }
    }

    finish(Operator::Chamfer, poly, vertices, flags)
}
