//! # Platonic Solids
//!
//! Hard-coded vertex and face tables for the five regular polyhedra.

use glam::DVec3;

use crate::polyhedron::Polyhedron;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

fn build(vertices: &[[f64; 3]], faces: &[&[usize]]) -> Polyhedron {
    Polyhedron::new(
        vertices.iter().map(|&v| DVec3::from_array(v)).collect(),
        faces.iter().map(|f| f.to_vec()).collect(),
    )
}

/// Tetrahedron inscribed in the cube `[-1, 1]³`.
///
/// # Example
///
/// ```rust
/// use conway_mesh::seeds::tetrahedron;
///
/// let t = tetrahedron();
/// assert_eq!((t.vertex_count(), t.edge_count(), t.face_count()), (4, 6, 4));
/// ```
pub fn tetrahedron() -> Polyhedron {
    build(
        &[
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
        ],
        &[&[0, 1, 2], &[0, 2, 3], &[0, 3, 1], &[1, 3, 2]],
    )
}

/// Cube `[-1, 1]³`.
pub fn cube() -> Polyhedron {
    build(
        &[
            [-1.0, -1.0, -1.0], // 0: left-front-bottom
            [1.0, -1.0, -1.0],  // 1: right-front-bottom
            [1.0, 1.0, -1.0],   // 2: right-back-bottom
            [-1.0, 1.0, -1.0],  // 3: left-back-bottom
            [-1.0, -1.0, 1.0],  // 4: left-front-top
            [1.0, -1.0, 1.0],   // 5: right-front-top
            [1.0, 1.0, 1.0],    // 6: right-back-top
            [-1.0, 1.0, 1.0],   // 7: left-back-top
        ],
        &[
            &[0, 3, 2, 1], // bottom
            &[4, 5, 6, 7], // top
            &[0, 1, 5, 4], // front
            &[2, 3, 7, 6], // back
            &[3, 0, 4, 7], // left
            &[1, 2, 6, 5], // right
        ],
    )
}

/// Octahedron with vertices on the coordinate axes.
pub fn octahedron() -> Polyhedron {
    build(
        &[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
        &[
            &[0, 2, 4],
            &[2, 1, 4],
            &[1, 3, 4],
            &[3, 0, 4],
            &[2, 0, 5],
            &[1, 2, 5],
            &[3, 1, 5],
            &[0, 3, 5],
        ],
    )
}

/// Dodecahedron with the cube `[-1, 1]³` among its vertices.
pub fn dodecahedron() -> Polyhedron {
    let a = 1.0 / PHI;
    let b = PHI;
    build(
        &[
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [0.0, -a, -b],
            [0.0, -a, b],
            [0.0, a, -b],
            [0.0, a, b],
            [-a, -b, 0.0],
            [-a, b, 0.0],
            [a, -b, 0.0],
            [a, b, 0.0],
            [-b, 0.0, -a],
            [-b, 0.0, a],
            [b, 0.0, -a],
            [b, 0.0, a],
        ],
        &[
            &[0, 8, 4, 14, 12],
            &[0, 12, 1, 17, 16],
            &[0, 16, 2, 10, 8],
            &[1, 9, 11, 3, 17],
            &[1, 12, 14, 5, 9],
            &[2, 13, 15, 6, 10],
            &[2, 16, 17, 3, 13],
            &[3, 11, 7, 15, 13],
            &[4, 8, 10, 6, 18],
            &[4, 18, 19, 5, 14],
            &[5, 19, 7, 11, 9],
            &[6, 15, 7, 19, 18],
        ],
    )
}

/// Icosahedron with edge length 2.
pub fn icosahedron() -> Polyhedron {
    let p = PHI;
    build(
        &[
            [-1.0, p, 0.0],
            [1.0, p, 0.0],
            [-1.0, -p, 0.0],
            [1.0, -p, 0.0],
            [0.0, -1.0, p],
            [0.0, 1.0, p],
            [0.0, -1.0, -p],
            [0.0, 1.0, -p],
            [p, 0.0, -1.0],
            [p, 0.0, 1.0],
            [-p, 0.0, -1.0],
            [-p, 0.0, 1.0],
        ],
        &[
            &[0, 5, 1],
            &[0, 1, 7],
            &[0, 11, 5],
            &[0, 7, 10],
            &[0, 10, 11],
            &[1, 5, 9],
            &[1, 8, 7],
            &[1, 9, 8],
            &[2, 3, 4],
            &[2, 6, 3],
            &[2, 4, 11],
            &[2, 10, 6],
            &[2, 11, 10],
            &[3, 9, 4],
            &[3, 6, 8],
            &[3, 8, 9],
            &[4, 9, 5],
            &[4, 5, 11],
            &[6, 7, 8],
            &[6, 10, 7],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(poly: &Polyhedron) -> (usize, usize, usize) {
        (poly.vertex_count(), poly.edge_count(), poly.face_count())
    }

    #[test]
    fn test_platonic_counts() {
        assert_eq!(counts(&tetrahedron()), (4, 6, 4));
        assert_eq!(counts(&cube()), (8, 12, 6));
        assert_eq!(counts(&octahedron()), (6, 12, 8));
        assert_eq!(counts(&dodecahedron()), (20, 30, 12));
        assert_eq!(counts(&icosahedron()), (12, 30, 20));
    }

    #[test]
    fn test_platonic_solids_validate() {
        for poly in [
            tetrahedron(),
            cube(),
            octahedron(),
            dodecahedron(),
            icosahedron(),
        ] {
            assert!(poly.validate().is_ok());
            assert_eq!(poly.euler_characteristic(), 2);
        }
    }

    #[test]
    fn test_platonic_faces_point_outward() {
        for poly in [
            tetrahedron(),
            cube(),
            octahedron(),
            dodecahedron(),
            icosahedron(),
        ] {
            let verts = poly.vertices();
            for face in poly.faces() {
                let n = (verts[face[1]] - verts[face[0]]).cross(verts[face[2]] - verts[face[0]]);
                assert!(n.dot(verts[face[0]]) > 0.0, "face {face:?} faces inward");
            }
        }
    }

    #[test]
    fn test_dodecahedron_edges_are_equal() {
        let poly = dodecahedron();
        let verts = poly.vertices();
        let expected = 2.0 / PHI;
        for (a, b) in poly.edges() {
            let len = verts[a].distance(verts[b]);
            assert!((len - expected).abs() < 1e-9, "edge {a}-{b} has length {len}");
        }
    }
}
