//! # Seed Families
//!
//! Prisms, antiprisms and pyramids over a regular n-gon inscribed in the
//! unit circle. Side faces are squares or equilateral triangles where the
//! side count allows it.

use std::f64::consts::PI;

use config::constants::MAX_SEED_SIDES;
use glam::DVec3;

use crate::error::{ConwayError, ConwayResult};
use crate::polyhedron::Polyhedron;

fn check_sides(kind: &str, n: usize) -> ConwayResult<()> {
    if !(3..=MAX_SEED_SIDES).contains(&n) {
        return Err(ConwayError::invalid_parameter(format!(
            "{kind} needs between 3 and {MAX_SEED_SIDES} sides, got {n}"
        )));
    }
    Ok(())
}

/// Point on the unit circle at `turns` fractions of a full turn, at height `z`.
fn ring_point(turns: f64, z: f64) -> DVec3 {
    let angle = 2.0 * PI * turns;
    DVec3::new(angle.cos(), angle.sin(), z)
}

/// Bottom face: the ring `0..n` reversed so it faces down.
fn bottom_face(n: usize) -> Vec<usize> {
    (0..n).rev().collect()
}

/// Top face: the ring `n..2n`, CCW seen from above.
fn top_face(n: usize) -> Vec<usize> {
    (n..2 * n).collect()
}

/// Creates a prism with square sides.
///
/// # Example
///
/// ```rust
/// use conway_mesh::seeds::prism;
///
/// let p = prism(5).unwrap();
/// assert_eq!((p.vertex_count(), p.edge_count(), p.face_count()), (10, 15, 7));
/// ```
pub fn prism(n: usize) -> ConwayResult<Polyhedron> {
    check_sides("prism", n)?;

    let half_height = (PI / n as f64).sin();
    let nf = n as f64;

    let mut vertices = Vec::with_capacity(2 * n);
    vertices.extend((0..n).map(|i| ring_point(i as f64 / nf, -half_height)));
    vertices.extend((0..n).map(|i| ring_point(i as f64 / nf, half_height)));

    let mut faces = Vec::with_capacity(n + 2);
    faces.push(bottom_face(n));
    faces.push(top_face(n));
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + j, n + i]);
    }

    Ok(Polyhedron::new(vertices, faces))
}

/// Creates an antiprism with equilateral triangle sides.
///
/// The top ring is rotated half a step against the bottom ring.
pub fn antiprism(n: usize) -> ConwayResult<Polyhedron> {
    check_sides("antiprism", n)?;

    let nf = n as f64;
    let side = 2.0 * (PI / nf).sin();
    let chord = 2.0 * (PI / (2.0 * nf)).sin();
    let half_height = (side * side - chord * chord).max(0.0).sqrt() / 2.0;

    let mut vertices = Vec::with_capacity(2 * n);
    vertices.extend((0..n).map(|i| ring_point(i as f64 / nf, -half_height)));
    vertices.extend((0..n).map(|i| ring_point((i as f64 + 0.5) / nf, half_height)));

    let mut faces = Vec::with_capacity(2 * n + 2);
    faces.push(bottom_face(n));
    faces.push(top_face(n));
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + i]);
        faces.push(vec![j, n + j, n + i]);
    }

    Ok(Polyhedron::new(vertices, faces))
}

/// Creates a pyramid over a regular n-gon.
///
/// Lateral edges match the base edges when `n < 6`; flatter polygons get
/// an apex height of 0.5.
pub fn pyramid(n: usize) -> ConwayResult<Polyhedron> {
    check_sides("pyramid", n)?;

    let nf = n as f64;
    let side = 2.0 * (PI / nf).sin();
    let height = (side * side - 1.0).max(0.25).sqrt();

    let mut vertices = Vec::with_capacity(n + 1);
    vertices.extend((0..n).map(|i| ring_point(i as f64 / nf, -height / 2.0)));
    vertices.push(DVec3::new(0.0, 0.0, height / 2.0));

    let mut faces = Vec::with_capacity(n + 1);
    faces.push(bottom_face(n));
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, n]);
    }

    Ok(Polyhedron::new(vertices, faces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_prism_counts_and_squares() {
        let poly = prism(6).unwrap();
        assert_eq!(poly.vertex_count(), 12);
        assert_eq!(poly.edge_count(), 18);
        assert_eq!(poly.face_count(), 8);
        assert_eq!(poly.euler_characteristic(), 2);

        let v = poly.vertices();
        let base = v[0].distance(v[1]);
        let lateral = v[0].distance(v[6]);
        assert_relative_eq!(base, lateral, epsilon = 1e-12);
    }

    #[test]
    fn test_antiprism_has_equilateral_sides() {
        let poly = antiprism(5).unwrap();
        assert_eq!(poly.face_count(), 12);
        assert_eq!(poly.edge_count(), 20);
        assert_eq!(poly.euler_characteristic(), 2);

        let v = poly.vertices();
        // Triangle [0, 1, 5]
        assert_relative_eq!(v[0].distance(v[1]), v[1].distance(v[5]), epsilon = 1e-12);
        assert_relative_eq!(v[0].distance(v[1]), v[0].distance(v[5]), epsilon = 1e-12);
    }

    #[test]
    fn test_pyramid_counts() {
        let poly = pyramid(4).unwrap();
        assert_eq!(poly.vertex_count(), 5);
        assert_eq!(poly.edge_count(), 8);
        assert_eq!(poly.face_count(), 5);
        assert_eq!(poly.euler_characteristic(), 2);
    }

    #[test]
    fn test_side_faces_point_outward() {
        for poly in [prism(7).unwrap(), antiprism(7).unwrap(), pyramid(7).unwrap()] {
            let v = poly.vertices();
            for face in poly.faces() {
                let n = (v[face[1]] - v[face[0]]).cross(v[face[2]] - v[face[0]]);
                let center = face.iter().map(|&i| v[i]).sum::<DVec3>() / face.len() as f64;
                assert!(n.dot(center - poly.centroid()) > 0.0, "face {face:?} faces inward");
            }
        }
    }

    #[test]
    fn test_side_count_is_checked() {
        assert!(matches!(prism(2), Err(ConwayError::InvalidParameter { .. })));
        assert!(antiprism(MAX_SEED_SIDES + 1).is_err());
        assert!(pyramid(0).is_err());
        assert!(pyramid(3).is_ok());
    }
}
