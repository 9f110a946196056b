//! # Config Crate
//!
//! Centralized configuration constants for the Conway operator pipeline.
//! Operator defaults, numeric tolerances and safety limits are defined here so
//! the mesh crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CHAMFER_HEIGHT, DEFAULT_CHAMFER_THICKNESS, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Chamfer defaults
//! assert_eq!(DEFAULT_CHAMFER_THICKNESS, 0.1);
//! assert_eq!(DEFAULT_CHAMFER_HEIGHT, 0.1);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Usable from any crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
