//! Kis: raise a pyramid on every face.

use crate::error::ConwayResult;
use crate::flags::{cyclic_pairs, FaceTag, FlagSet, TaggedVertices, VertexTag};
use crate::geometry::face_center;
use crate::polyhedron::Polyhedron;

use super::{check_finite, finish, Operator};

/// Replaces every n-gon with n triangles meeting at the face center.
///
/// The apex is the face centroid moved `height` along the face normal.
/// Kis is defined on any valid face list, open or closed.
///
/// # Errors
///
/// - `InvalidParameter` if `height` is not finite
/// - `IndexOutOfRange` / `InvalidFace` from validation
/// - `DegenerateGeometry` if `height != 0` and a face has no normal
///
/// # Example
///
/// ```rust
/// use conway_mesh::ops::kis;
/// use conway_mesh::seeds::cube;
///
/// let kc = kis(&cube(), 0.0).unwrap();
/// assert_eq!((kc.vertex_count(), kc.face_count()), (14, 24));
/// ```
pub fn kis(poly: &Polyhedron, height: f64) -> ConwayResult<Polyhedron> {
    check_finite("kis height", height)?;
    poly.validate()?;

    let verts = poly.vertices();
    let mut vertices = TaggedVertices::with_originals(verts);
    let mut flags = FlagSet::new();

    for (i, face) in poly.faces().iter().enumerate() {
        let apex = VertexTag::FaceCenter(i);
        vertices.push(apex, face_center(verts, face, height)?)?;

        for (v1, v2) in cyclic_pairs(face) {
            flags.add_face(
                FaceTag::Corner(i, v1),
                &[VertexTag::Original(v1), VertexTag::Original(v2), apex],
            )?;
        }
    }

    finish(Operator::Kis, poly, vertices, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConwayError;
    use crate::seeds::{cube, tetrahedron};
    use glam::DVec3;

    fn unit_square() -> Polyhedron {
        Polyhedron::new(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn test_kis_square_fans_around_center() {
        let result = kis(&unit_square(), 0.0).unwrap();

        assert_eq!(result.vertex_count(), 5);
        assert_eq!(result.vertices()[4], DVec3::new(0.5, 0.5, 0.0));
        assert_eq!(
            result.faces(),
            &[vec![0, 1, 4], vec![1, 2, 4], vec![2, 3, 4], vec![0, 4, 3]]
        );
    }

    #[test]
    fn test_kis_height_lifts_apex_along_normal() {
        let result = kis(&unit_square(), 2.0).unwrap();
        assert_eq!(result.vertices()[4], DVec3::new(0.5, 0.5, 2.0));
    }

    #[test]
    fn test_kis_keeps_original_vertices_first() {
        let input = cube();
        let result = kis(&input, 0.0).unwrap();
        assert_eq!(&result.vertices()[..8], input.vertices());
    }

    #[test]
    fn test_kis_tetrahedron_counts() {
        let result = kis(&tetrahedron(), 0.0).unwrap();
        assert_eq!(result.vertex_count(), 8);
        assert_eq!(result.edge_count(), 18);
        assert_eq!(result.face_count(), 12);
    }

    #[test]
    fn test_kis_rejects_non_finite_height() {
        let result = kis(&cube(), f64::NAN);
        assert!(matches!(result, Err(ConwayError::InvalidParameter { .. })));
    }

    #[test]
    fn test_kis_degenerate_face_with_height() {
        let flat = Polyhedron::new(
            vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0],
            vec![vec![0, 1, 2]],
        );
        assert!(kis(&flat, 0.0).is_ok());
        assert!(matches!(
            kis(&flat, 1.0),
            Err(ConwayError::DegenerateGeometry { .. })
        ));
    }
}
