//! Gyro: pentagonal rotation of every face.

use crate::error::ConwayResult;
use crate::flags::{cyclic_triples, FaceTag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::{edge_third, face_center};
use crate::polyhedron::Polyhedron;

use super::{closed_edges, finish, Operator};

/// Splits every n-gon into n pentagons meeting at the face center.
///
/// Each directed edge `(a, b)` contributes the point a third of the way
/// from `a` to `b`, so every undirected edge is cut in three. The pentagon
/// at corner `v2` of face `f` with neighbours `v1, v3` is
/// `[v1>v2, v2>v1, v2, v2>v3, center(f)]`.
///
/// # Errors
///
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `NonManifoldEdge` / `OpenEdge` if the input is not a closed manifold
pub fn gyro(poly: &Polyhedron) -> ConwayResult<Polyhedron> {
    closed_edges(poly)?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::with_originals(verts);
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        let center = VertexTag::FaceCenter(i);
        vertices.push(center, face_center(verts, face, 0.0)?)?;

        for (v1, v2, v3) in cyclic_triples(face) {
            vertices.push(VertexTag::EdgeThird(v1, v2), edge_third(verts, (v1, v2))?)?;

            flags.add_face(
                FaceTag::Corner(i, v2),
                &[
                    VertexTag::EdgeThird(v1, v2),
                    VertexTag::EdgeThird(v2, v1),
                    VertexTag::Original(v2),
                    VertexTag::EdgeThird(v2, v3),
                    center,
                ],
            )?;
        }
    }

    finish(Operator::Gyro, poly, vertices, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::{cube, tetrahedron};
    use glam::DVec3;

    #[test]
    fn test_gyro_cube_is_pentagonal_icositetrahedron() {
        let result = gyro(&cube()).unwrap();

        assert_eq!(result.vertex_count(), 38);
        assert_eq!(result.edge_count(), 60);
        assert_eq!(result.face_count(), 24);
        assert!(result.face_sides().iter().all(|&s| s == 5));
    }

    #[test]
    fn test_gyro_tetrahedron_is_dodecahedral() {
        let result = gyro(&tetrahedron()).unwrap();
        assert_eq!(result.vertex_count(), 20);
        assert_eq!(result.face_count(), 12);
        assert!(result.face_sides().iter().all(|&s| s == 5));
    }

    #[test]
    fn test_gyro_edge_thirds_are_directional() {
        let input = cube();
        let result = gyro(&input).unwrap();
        let v = input.vertices();

        // Face 0 = [0, 3, 2, 1]: center first, then 0>3
        assert_eq!(result.vertices()[8], DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(result.vertices()[9], v[0].lerp(v[3], 1.0 / 3.0));
        assert!(result.vertices().contains(&v[3].lerp(v[0], 1.0 / 3.0)));
    }
}
