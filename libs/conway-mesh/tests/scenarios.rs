use approx::assert_relative_eq;
use conway_mesh::flags::{faces_to_flags, flags_to_faces};
use conway_mesh::geometry::tangent_point;
use conway_mesh::seeds::{cube, icosahedron, tetrahedron};
use conway_mesh::{ambo, apply, chamfer, dual, kis, ConwayError, Operator, Polyhedron};
use glam::DVec3;

/// Rotates a face so its smallest index comes first.
fn canonical(face: &[usize]) -> Vec<usize> {
    let start = (0..face.len()).min_by_key(|&i| face[i]).unwrap_or(0);
    face[start..].iter().chain(&face[..start]).copied().collect()
}

fn counts(poly: &Polyhedron) -> (usize, usize, usize) {
    (poly.vertex_count(), poly.edge_count(), poly.face_count())
}

#[test]
fn dual_of_dual_tetrahedron_is_tetrahedron() {
    let twice = dual(&dual(&tetrahedron()).unwrap()).unwrap();
    assert_eq!(counts(&twice), (4, 6, 4));
    assert_eq!(twice.euler_characteristic(), 2);
}

#[test]
fn kis_single_square_fans_four_triangles() {
    let square = Polyhedron::new(
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
    );
    let result = kis(&square, 0.0).unwrap();

    assert_eq!(result.vertex_count(), 5);
    assert_eq!(result.face_count(), 4);
    let apex = result.vertices()[4];
    assert_relative_eq!(apex.x, 0.5);
    assert_relative_eq!(apex.y, 0.5);
    assert_relative_eq!(apex.z, 0.0);

    let original_edges = [(0, 1), (1, 2), (2, 3), (3, 0)];
    for face in result.faces() {
        assert_eq!(face.len(), 3);
        assert!(face.contains(&4));
        let has_edge = original_edges
            .iter()
            .any(|&(a, b)| face.contains(&a) && face.contains(&b));
        assert!(has_edge, "{face:?} has no original edge");
    }
}

#[test]
fn ambo_tetrahedron_is_octahedron() {
    let result = ambo(&tetrahedron()).unwrap();
    assert_eq!(counts(&result), (6, 12, 8));
    assert!(result.face_sides().iter().all(|&s| s == 3));
}

#[test]
fn chamfer_cube_has_thirty_two_vertices() {
    let result = chamfer(&cube(), 0.1, 0.1).unwrap();
    assert_eq!(counts(&result), (32, 48, 18));
}

#[test]
fn notation_and_operators_agree() {
    let by_hand = Operator::Ambo.apply(&Operator::Dual.apply(&icosahedron()).unwrap()).unwrap();
    assert_eq!(apply("adI").unwrap(), by_hand);
    // icosidodecahedron
    assert_eq!(counts(&by_hand), (30, 60, 32));
}

#[test]
fn out_of_range_index_is_reported() {
    let poly = Polyhedron::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![vec![0, 1, 5]]);
    let err = dual(&poly).unwrap_err();
    assert_eq!(
        err,
        ConwayError::IndexOutOfRange {
            face: 0,
            index: 5,
            vertex_count: 3
        }
    );
    assert!(err.to_string().contains("vertex 5"));
}

#[test]
fn open_edge_is_reported() {
    let triangle = Polyhedron::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![vec![0, 1, 2]]);
    match ambo(&triangle) {
        Err(ConwayError::OpenEdge { .. }) => {}
        other => panic!("expected open edge, got {other:?}"),
    }
}

#[test]
fn zero_length_tangent_edge_is_degenerate() {
    let verts = [DVec3::ONE, DVec3::ONE];
    match tangent_point(&verts, (0, 1)) {
        Err(ConwayError::DegenerateGeometry { .. }) => {}
        other => panic!("expected degenerate geometry, got {other:?}"),
    }
}

#[test]
fn flag_round_trip_preserves_seed_faces() {
    let seed = cube();
    let (flags, table) = faces_to_flags(seed.faces(), None).unwrap();
    let (faces, _) = flags_to_faces(&flags, &table).unwrap();

    let expected: Vec<_> = seed.faces().iter().map(|f| canonical(f)).collect();
    assert_eq!(faces, expected);
}
