//! # Conway Errors
//!
//! Error types for the flag engine and the operator suite.
//!
//! ## Error Policy
//!
//! - An operator either returns a complete, consistent mesh or fails
//! - No partial output, no silent repair
//! - Errors carry the indices needed to locate the offending input

use thiserror::Error;

/// Errors that can occur while encoding, decoding or rewriting a polyhedron.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConwayError {
    /// A face references a vertex index outside the vertex list.
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// A vertex lookup outside the vertex list, with no face to blame.
    #[error("Vertex {index} is out of range for {vertex_count} vertices")]
    VertexOutOfRange { index: usize, vertex_count: usize },

    /// A face is not a simple polygon index list (too short, repeated index).
    #[error("Invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    /// Zero-length edge or zero-area face where a direction is required.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A flag cycle failed to close, a flag key collided, or a vertex tag
    /// is missing from the vertex table.
    #[error("Inconsistent topology: {message}")]
    InconsistentTopology { message: String },

    /// The directed edge appears in more than one face.
    #[error("Non-manifold edge {from} -> {to}: directed edge used by more than one face")]
    NonManifoldEdge { from: usize, to: usize },

    /// No face lies across the edge.
    #[error("Open edge {from} -> {to}: no face owns the opposite half-edge")]
    OpenEdge { from: usize, to: usize },

    /// An operator or seed parameter is out of range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A Conway notation string could not be parsed.
    #[error("Invalid notation: {message}")]
    InvalidNotation { message: String },
}

impl ConwayError {
    /// Creates an inconsistent topology error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid face error.
    pub fn invalid_face(face: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFace {
            face,
            reason: reason.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid notation error.
    pub fn invalid_notation(message: impl Into<String>) -> Self {
        Self::InvalidNotation {
            message: message.into(),
        }
    }
}

/// Result type alias for Conway operations.
pub type ConwayResult<T> = Result<T, ConwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConwayError::IndexOutOfRange {
            face: 2,
            index: 9,
            vertex_count: 4,
        };
        let display = err.to_string();
        assert!(display.contains("Face 2"));
        assert!(display.contains("vertex 9"));
        assert!(display.contains("4 vertices"));

        let err = ConwayError::VertexOutOfRange {
            index: 7,
            vertex_count: 4,
        };
        assert!(!err.to_string().contains("Face"));
        assert!(err.to_string().contains("Vertex 7"));

        let err = ConwayError::NonManifoldEdge { from: 1, to: 3 };
        assert!(err.to_string().contains("1 -> 3"));

        let err = ConwayError::inconsistent("face f0 did not close");
        assert!(err.to_string().starts_with("Inconsistent topology"));
    }

    #[test]
    fn test_helpers_build_expected_variants() {
        assert!(matches!(
            ConwayError::degenerate("zero-length edge"),
            ConwayError::DegenerateGeometry { .. }
        ));
        assert!(matches!(
            ConwayError::invalid_face(0, "fewer than 3 vertices"),
            ConwayError::InvalidFace { face: 0, .. }
        ));
        assert!(matches!(
            ConwayError::invalid_parameter("sides"),
            ConwayError::InvalidParameter { .. }
        ));
        assert!(matches!(
            ConwayError::invalid_notation("q"),
            ConwayError::InvalidNotation { .. }
        ));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConwayError>();
    }
}
