use approx::assert_relative_eq;
use conway_mesh::{apply, Polyhedron};

#[test]
fn polyhedron_survives_json() {
    let poly = apply("gT").unwrap();
    let json = serde_json::to_string(&poly).unwrap();
    let back: Polyhedron = serde_json::from_str(&json).unwrap();

    assert_eq!(back.faces(), poly.faces());
    assert_eq!(back.vertex_count(), poly.vertex_count());
    for (a, b) in back.vertices().iter().zip(poly.vertices()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }
}

#[test]
fn json_input_is_checked_before_use() {
    let json = r#"{"vertices":[[0,0,0],[1,0,0],[0,1,0]],"faces":[[0,1]]}"#;
    let poly: Polyhedron = serde_json::from_str(json).unwrap();
    assert!(poly.validate().is_err());
    assert!(conway_mesh::kis(&poly, 0.0).is_err());
}
