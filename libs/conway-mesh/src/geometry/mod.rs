//! # Geometry Kernel
//!
//! Derived quantities the operators place new vertices with: face
//! centroids and normals, edge interpolation points, and the point of an
//! edge's line closest to the origin.
//!
//! Edges are `(from, to)` index pairs. Interpolation is measured from `from`
//! towards `to`, so [`edge_third`] is direction dependent while
//! [`edge_center`] is not.


use config::constants::{EDGE_THIRD_RATIO, EPSILON};
use glam::DVec3;

use crate::error::{ConwayError, ConwayResult};

#[inline]
fn vertex_at(verts: &[DVec3], index: usize) -> ConwayResult<DVec3> {
    verts
        .get(index)
        .copied()
        .ok_or(ConwayError::VertexOutOfRange {
            index,
            vertex_count: verts.len(),
        })
}

/// Gathers the coordinates of a face's vertices in face order.
///
/// # Errors
///
/// `VertexOutOfRange` if any index is outside `verts`.
pub fn face_vertices(verts: &[DVec3], face: &[usize]) -> ConwayResult<Vec<DVec3>> {
    face.iter().map(|&i| vertex_at(verts, i)).collect()
}

/// Computes the unit normal of a face from its first three vertices.
///
/// The normal is `(v1 - v0) × (v2 - v0)`, normalized over all three
/// components. For a CCW face it points outward.
///
/// # Errors
///
/// - `DegenerateGeometry` if the face has fewer than three vertices or its
///   first three vertices are collinear
/// - `VertexOutOfRange` for an index outside `verts`
///
/// # Example
///
/// ```rust
/// use conway_mesh::geometry::face_normal;
/// use glam::DVec3;
///
/// let verts = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// let n = face_normal(&verts, &[0, 1, 2]).unwrap();
/// assert_eq!(n, DVec3::Z);
/// ```
pub fn face_normal(verts: &[DVec3], face: &[usize]) -> ConwayResult<DVec3> {
    if face.len() < 3 {
        return Err(ConwayError::degenerate(format!(
            "normal needs 3 vertices, face has {}",
            face.len()
        )));
    }

    let v0 = vertex_at(verts, face[0])?;
    let v1 = vertex_at(verts, face[1])?;
    let v2 = vertex_at(verts, face[2])?;

    let perp = (v1 - v0).cross(v2 - v0);
    let length = perp.length();
    if length < EPSILON {
        return Err(ConwayError::degenerate(format!(
            "zero-area corner at vertices {:?}",
            &face[..3]
        )));
    }

    Ok(perp / length)
}

/// Computes the centroid of a face, optionally lifted off its plane.
///
/// With `height != 0` the centroid is moved along the unit face normal by
/// `height` (negative values push it inward).
///
/// # Example
///
/// ```rust
/// use conway_mesh::geometry::face_center;
/// use glam::DVec3;
///
/// let verts = [DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(2.0, 2.0, 0.0), DVec3::new(0.0, 2.0, 0.0)];
/// let c = face_center(&verts, &[0, 1, 2, 3], 1.0).unwrap();
/// assert_eq!(c, DVec3::new(1.0, 1.0, 1.0));
/// ```
pub fn face_center(verts: &[DVec3], face: &[usize], height: f64) -> ConwayResult<DVec3> {
    if face.is_empty() {
        return Err(ConwayError::degenerate("face has no vertices"));
    }

    let points = face_vertices(verts, face)?;
    let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;

    if height != 0.0 {
        let normal = face_normal(verts, face)?;
        return Ok(center + normal * height);
    }

    Ok(center)
}

/// Returns the midpoint of an edge.
///
/// Computed as `(a + b) / 2` so both edge directions give the same bits.
pub fn edge_center(verts: &[DVec3], edge: (usize, usize)) -> ConwayResult<DVec3> {
    let a = vertex_at(verts, edge.0)?;
    let b = vertex_at(verts, edge.1)?;
    Ok((a + b) * 0.5)
}

/// Returns the point one third of the way from `edge.0` to `edge.1`.
pub fn edge_third(verts: &[DVec3], edge: (usize, usize)) -> ConwayResult<DVec3> {
    edge_point(verts, edge, EDGE_THIRD_RATIO)
}

/// Linear interpolation along an edge at parameter `t`.
pub fn edge_point(verts: &[DVec3], edge: (usize, usize), t: f64) -> ConwayResult<DVec3> {
    let a = vertex_at(verts, edge.0)?;
    let b = vertex_at(verts, edge.1)?;
    Ok(a.lerp(b, t))
}

/// Projects `point` onto the infinite line through `l1` and `l2`.
///
/// Returns the projected point and its line parameter
/// `λ = ((p - l1)·(l2 - l1)) / ((l2 - l1)·(l2 - l1))`. λ is not clamped.
///
/// # Errors
///
/// `DegenerateGeometry` if `l1` and `l2` coincide.
pub fn closest_point_on_line(point: DVec3, l1: DVec3, l2: DVec3) -> ConwayResult<(DVec3, f64)> {
    let u = l2 - l1;
    let denom = u.dot(u);
    if denom < EPSILON {
        return Err(ConwayError::degenerate(format!(
            "line through {l1} and {l2} has zero length"
        )));
    }

    let lambda = (point - l1).dot(u) / denom;
    Ok((l1 + u * lambda, lambda))
}

/// Returns the point closest to the origin on the line through an edge.
///
/// The result may lie outside the segment.
///
/// # Example
///
/// ```rust
/// use conway_mesh::geometry::tangent_point;
/// use glam::DVec3;
///
/// let verts = [DVec3::new(2.0, 1.0, 0.0), DVec3::new(3.0, 1.0, 0.0)];
/// let p = tangent_point(&verts, (0, 1)).unwrap();
/// assert_eq!(p, DVec3::new(0.0, 1.0, 0.0));
/// ```
pub fn tangent_point(verts: &[DVec3], edge: (usize, usize)) -> ConwayResult<DVec3> {
    let a = vertex_at(verts, edge.0)?;
    let b = vertex_at(verts, edge.1)?;
    closest_point_on_line(DVec3::ZERO, a, b).map(|(p, _)| p)
}
