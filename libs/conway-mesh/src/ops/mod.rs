//! # Conway Operators
//!
//! Topology rewrites of a polyhedron, each written against the flag engine:
//! place new vertices with the geometry kernel, describe the new faces as
//! flags, and let [`flags_to_faces`] reassemble them.
//!
//! | Operator | Symbol | (v, e, f) of a closed input |
//! |---|---|---|
//! | kis | `k` | v+f, 3e, 2e |
//! | dual | `d` | f, e, v |
//! | ambo | `a` | e, 2e, f+v |
//! | chamfer | `c` | v+2e, 4e, f+e |
//! | gyro | `g` | v+2e+f, 5e, 2e |
//! | propellor | `p` | v+2e, 5e, f+2e |
//! | whirl | `w` | v+4e, 7e, f+2e |
//!
//! Faces are always walked in their stored CCW order; neighbours come from
//! cyclic shifts of that order, never from sorting or angles.

mod ambo;
mod chamfer;
mod dual;
mod gyro;
mod kis;
mod propellor;
mod whirl;


pub use ambo::ambo;
pub use chamfer::chamfer;
pub use dual::dual;
pub use gyro::gyro;
pub use kis::kis;
pub use propellor::propellor;
pub use whirl::whirl;

use config::constants::OperatorConfig;
use tracing::debug;

use crate::error::{ConwayError, ConwayResult};
use crate::flags::{faces_to_edge_flags, flags_to_faces, EdgeFlags, FlagSet, TaggedVertices};
use crate::polyhedron::Polyhedron;

/// One of the primary Conway operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Kis,
    Dual,
    Ambo,
    Chamfer,
    Gyro,
    Propellor,
    Whirl,
}

impl Operator {
    /// Every primary operator, in table order.
    pub const ALL: [Operator; 7] = [
        Operator::Kis,
        Operator::Dual,
        Operator::Ambo,
        Operator::Chamfer,
        Operator::Gyro,
        Operator::Propellor,
        Operator::Whirl,
    ];

    /// Conway notation symbol.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Kis => 'k',
            Operator::Dual => 'd',
            Operator::Ambo => 'a',
            Operator::Chamfer => 'c',
            Operator::Gyro => 'g',
            Operator::Propellor => 'p',
            Operator::Whirl => 'w',
        }
    }

    /// Looks up a primary operator by symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Lower-case operator name.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Kis => "kis",
            Operator::Dual => "dual",
            Operator::Ambo => "ambo",
            Operator::Chamfer => "chamfer",
            Operator::Gyro => "gyro",
            Operator::Propellor => "propellor",
            Operator::Whirl => "whirl",
        }
    }

    /// Applies the operator with the default parameters.
    pub fn apply(self, poly: &Polyhedron) -> ConwayResult<Polyhedron> {
        self.apply_with(poly, &OperatorConfig::default())
    }

    /// Applies the operator with explicit parameters.
    pub fn apply_with(self, poly: &Polyhedron, config: &OperatorConfig) -> ConwayResult<Polyhedron> {
        match self {
            Operator::Kis => kis(poly, config.kis_height),
            Operator::Dual => dual(poly),
            Operator::Ambo => ambo(poly),
            Operator::Chamfer => chamfer(poly, config.chamfer_thickness, config.chamfer_height),
            Operator::Gyro => gyro(poly),
            Operator::Propellor => propellor(poly),
            Operator::Whirl => whirl(poly),
        }
    }

    /// Vertex, edge and face counts produced from a closed manifold with
    /// `(v, e, f)` counts.
    pub const fn expected_counts(self, v: usize, e: usize, f: usize) -> (usize, usize, usize) {
        match self {
            Operator::Kis => (v + f, 3 * e, 2 * e),
            Operator::Dual => (f, e, v),
            Operator::Ambo => (e, 2 * e, f + v),
            Operator::Chamfer => (v + 2 * e, 4 * e, f + e),
            Operator::Gyro => (v + 2 * e + f, 5 * e, 2 * e),
            Operator::Propellor => (v + 2 * e, 5 * e, f + 2 * e),
            Operator::Whirl => (v + 4 * e, 7 * e, f + 2 * e),
        }
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Rejects NaN and infinite operator parameters.
pub(crate) fn check_finite(name: &str, value: f64) -> ConwayResult<()> {
    if !value.is_finite() {
        return Err(ConwayError::invalid_parameter(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}

/// Validates the input and builds its edge-keyed flags, requiring every
/// edge to be shared by exactly two faces.
pub(crate) fn closed_edges(poly: &Polyhedron) -> ConwayResult<EdgeFlags> {
    poly.validate()?;
    let edges = faces_to_edge_flags(poly.faces(), None)?;
    edges.require_closed()?;
    Ok(edges)
}

/// Decodes the emitted flags into the output polyhedron.
///
/// A closed manifold input can still hold a vertex of valence two; its
/// vertex face decodes to a two-gon, which is rejected here.
pub(crate) fn finish(
    op: Operator,
    input: &Polyhedron,
    vertices: TaggedVertices,
    flags: FlagSet,
) -> ConwayResult<Polyhedron> {
    let (positions, table) = vertices.into_parts();
    let (faces, face_tags) = flags_to_faces(&flags, &table)?;

    if let Some((face, tag)) = faces.iter().zip(&face_tags).find(|(face, _)| face.len() < 3) {
        return Err(ConwayError::inconsistent(format!(
            "{} produced face {tag} with {} vertices",
            op.name(),
            face.len()
        )));
    }
    let output = Polyhedron::new(positions, faces);

    debug!(
        "{}: {} vertices, {} faces -> {} vertices, {} faces ({} flags)",
        op.name(),
        input.vertex_count(),
        input.face_count(),
        output.vertex_count(),
        output.face_count(),
        flags.len()
    );

    Ok(output)
}
