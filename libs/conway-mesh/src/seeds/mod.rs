//! # Seeds
//!
//! Base polyhedra that Conway notation starts from. Every seed is closed,
//! centred on the origin and wound counter-clockwise seen from outside.
//!
//! | Symbol | Seed |
//! |---|---|
//! | `T` | tetrahedron |
//! | `C` | cube |
//! | `O` | octahedron |
//! | `D` | dodecahedron |
//! | `I` | icosahedron |
//! | `P<n>` | n-gonal prism |
//! | `A<n>` | n-gonal antiprism |
//! | `Y<n>` | n-gonal pyramid |

mod families;
mod platonic;

pub use families::{antiprism, prism, pyramid};
pub use platonic::{cube, dodecahedron, icosahedron, octahedron, tetrahedron};

use std::fmt;

use crate::error::ConwayResult;
use crate::polyhedron::Polyhedron;

/// A seed polyhedron named by its notation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    Prism(usize),
    Antiprism(usize),
    Pyramid(usize),
}

impl Seed {
    /// Builds the seed polyhedron.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for prism, antiprism or pyramid side counts
    /// outside `3..=MAX_SEED_SIDES`.
    pub fn build(self) -> ConwayResult<Polyhedron> {
        match self {
            Seed::Tetrahedron => Ok(tetrahedron()),
            Seed::Cube => Ok(cube()),
            Seed::Octahedron => Ok(octahedron()),
            Seed::Dodecahedron => Ok(dodecahedron()),
            Seed::Icosahedron => Ok(icosahedron()),
            Seed::Prism(n) => prism(n),
            Seed::Antiprism(n) => antiprism(n),
            Seed::Pyramid(n) => pyramid(n),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Tetrahedron => write!(f, "T"),
            Seed::Cube => write!(f, "C"),
            Seed::Octahedron => write!(f, "O"),
            Seed::Dodecahedron => write!(f, "D"),
            Seed::Icosahedron => write!(f, "I"),
            Seed::Prism(n) => write!(f, "P{n}"),
            Seed::Antiprism(n) => write!(f, "A{n}"),
            Seed::Pyramid(n) => write!(f, "Y{n}"),
        }
    }
}
