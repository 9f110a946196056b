//! # Tags
//!
//! Transient identities for the logical vertices and faces an operator
//! creates. Tags are plain `Copy` values with structural equality, ordering
//! and hashing; they live only for the duration of one operator call.

use std::fmt;

/// Identity of a vertex in the mesh an operator is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexTag {
    /// Vertex `i` of the input mesh.
    Original(usize),
    /// Centroid of input face `f`.
    FaceCenter(usize),
    /// Midpoint of an undirected edge, stored as `(min, max)`.
    EdgeMidpoint(usize, usize),
    /// Point a third of the way along the directed edge `(from, to)`.
    EdgeThird(usize, usize),
    /// Inset point near vertex `v` inside face `f`, stored as `(f, v)`.
    FaceCorner(usize, usize),
}

impl VertexTag {
    /// Midpoint tag of the undirected edge `{a, b}`.
    ///
    /// Both traversal directions resolve to the same tag.
    #[inline]
    pub fn midpoint(a: usize, b: usize) -> Self {
        Self::EdgeMidpoint(a.min(b), a.max(b))
    }
}

impl fmt::Display for VertexTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original(i) => write!(f, "v{i}"),
            Self::FaceCenter(face) => write!(f, "vf{face}"),
            Self::EdgeMidpoint(a, b) => write!(f, "v{a}:{b}"),
            Self::EdgeThird(from, to) => write!(f, "v{from}>{to}"),
            Self::FaceCorner(face, v) => write!(f, "vf{face}:{v}"),
        }
    }
}

/// Identity of a face in the mesh an operator is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceTag {
    /// The face derived from input face `f`.
    Original(usize),
    /// The face created in place of input vertex `v`.
    Vertex(usize),
    /// The face created at corner `v` of input face `f`, stored as `(f, v)`.
    Corner(usize, usize),
    /// The face created in place of an undirected edge, stored as `(min, max)`.
    Edge(usize, usize),
}

impl FaceTag {
    /// Face tag of the undirected edge `{a, b}`.
    #[inline]
    pub fn edge(a: usize, b: usize) -> Self {
        Self::Edge(a.min(b), a.max(b))
    }
}

impl fmt::Display for FaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original(i) => write!(f, "f{i}"),
            Self::Vertex(v) => write!(f, "fv{v}"),
            Self::Corner(face, v) => write!(f, "f{face}:{v}"),
            Self::Edge(a, b) => write!(f, "fe{a}:{b}"),
        }
    }
}
