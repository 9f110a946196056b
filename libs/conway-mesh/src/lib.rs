//! # Conway Mesh
//!
//! Conway polyhedron operators built on a flag-based topology engine.
//!
//! ## Architecture
//!
//! ```text
//! seeds / notation ─▶ Polyhedron ─▶ ops (kis, dual, ambo, ...) ─▶ Polyhedron
//!                                     │
//!                                     ├─ geometry: new vertex positions
//!                                     └─ flags: tagged half-edges → faces
//! ```
//!
//! Every operator borrows its input and returns a fresh [`Polyhedron`]; a
//! failed call returns an error and no mesh.
//!
//! ## Usage
//!
//! ```rust
//! use conway_mesh::{apply, dual, kis, seeds};
//!
//! let cube = seeds::cube();
//! let tetrakis = kis(&cube, 0.0)?;
//! let truncated_octahedron = dual(&tetrakis)?;
//! assert_eq!(truncated_octahedron.face_count(), 14);
//!
//! // Same thing in Conway notation
//! assert_eq!(apply("dkC")?, truncated_octahedron);
//! # Ok::<(), conway_mesh::ConwayError>(())
//! ```

pub mod error;
pub mod flags;
pub mod geometry;
pub mod notation;
pub mod ops;
pub mod polyhedron;
pub mod seeds;

pub use error::{ConwayError, ConwayResult};
pub use notation::{apply, parse, Recipe};
pub use ops::{ambo, chamfer, dual, gyro, kis, propellor, whirl, Operator};
pub use polyhedron::Polyhedron;
pub use seeds::Seed;
