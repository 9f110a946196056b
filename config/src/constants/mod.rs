//! Centralized configuration values shared across the Conway operator crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Cross products and squared edge lengths below this value are treated as
/// zero by the geometry kernel (zero-area faces, zero-length edges).
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// OPERATOR DEFAULTS
// =============================================================================

/// Default height of the kis apex above the face plane.
///
/// Zero keeps the new centroid vertex in the plane of its face.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_KIS_HEIGHT;
/// assert_eq!(DEFAULT_KIS_HEIGHT, 0.0);
/// ```
pub const DEFAULT_KIS_HEIGHT: f64 = 0.0;

/// Default fraction of the corner-to-centroid distance a chamfer inset
/// vertex moves towards its face centroid.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CHAMFER_THICKNESS;
/// assert!(DEFAULT_CHAMFER_THICKNESS > 0.0 && DEFAULT_CHAMFER_THICKNESS < 1.0);
/// ```
pub const DEFAULT_CHAMFER_THICKNESS: f64 = 0.1;

/// Default distance a chamfer inset vertex is raised along its face normal.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CHAMFER_HEIGHT;
/// assert_eq!(DEFAULT_CHAMFER_HEIGHT, 0.1);
/// ```
pub const DEFAULT_CHAMFER_HEIGHT: f64 = 0.1;

/// Interpolation parameter of the "edge third" point used by gyro,
/// propellor and whirl.
///
/// # Examples
/// ```
/// use config::constants::EDGE_THIRD_RATIO;
/// assert!((EDGE_THIRD_RATIO * 3.0 - 1.0).abs() < 1e-12);
/// ```
pub const EDGE_THIRD_RATIO: f64 = 1.0 / 3.0;

/// Fraction of the corner-to-centroid distance used for whirl's inset
/// face vertices.
///
/// # Examples
/// ```
/// use config::constants::WHIRL_INSET_RATIO;
/// assert_eq!(WHIRL_INSET_RATIO, 0.5);
/// ```
pub const WHIRL_INSET_RATIO: f64 = 0.5;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of operators a single notation string may chain.
///
/// Every operator multiplies the face count, so long chains explode quickly.
///
/// # Examples
/// ```
/// use config::constants::MAX_OPERATOR_CHAIN;
/// assert!(MAX_OPERATOR_CHAIN >= 8);
/// ```
pub const MAX_OPERATOR_CHAIN: usize = 16;

/// Maximum number of sides accepted for prism, antiprism and pyramid seeds.
///
/// # Examples
/// ```
/// use config::constants::MAX_SEED_SIDES;
/// assert!(MAX_SEED_SIDES >= 3);
/// ```
pub const MAX_SEED_SIDES: usize = 1024;

/// Immutable snapshot of the tunable operator parameters.
///
/// # Examples
/// ```
/// use config::constants::OperatorConfig;
/// let config = OperatorConfig::default();
/// assert_eq!(config.kis_height, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorConfig {
    /// Height of the kis apex above the face plane.
    pub kis_height: f64,
    /// Chamfer inset fraction towards the face centroid.
    pub chamfer_thickness: f64,
    /// Chamfer offset along the face normal.
    pub chamfer_height: f64,
}

impl OperatorConfig {
    /// Builds a configuration, rejecting NaN and infinite values.
    ///
    /// Any finite chamfer thickness is accepted: `1` collapses the inset
    /// onto the face center, values outside `[0, 1]` overshoot it.
    ///
    /// # Examples
    /// ```
    /// use config::constants::OperatorConfig;
    /// let cfg = OperatorConfig::new(0.2, 0.25, 0.0).expect("valid config");
    /// assert_eq!(cfg.chamfer_thickness, 0.25);
    /// assert!(OperatorConfig::new(0.0, 1.5, 0.0).is_ok());
    /// assert!(OperatorConfig::new(0.0, f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(
        kis_height: f64,
        chamfer_thickness: f64,
        chamfer_height: f64,
    ) -> Result<Self, ConfigError> {
        if !kis_height.is_finite() {
            return Err(ConfigError::NonFinite("kis_height", kis_height));
        }
        if !chamfer_height.is_finite() {
            return Err(ConfigError::NonFinite("chamfer_height", chamfer_height));
        }
        if !chamfer_thickness.is_finite() {
            return Err(ConfigError::NonFinite("chamfer_thickness", chamfer_thickness));
        }
        Ok(Self {
            kis_height,
            chamfer_thickness,
            chamfer_height,
        })
    }
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            kis_height: DEFAULT_KIS_HEIGHT,
            chamfer_thickness: DEFAULT_CHAMFER_THICKNESS,
            chamfer_height: DEFAULT_CHAMFER_HEIGHT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a parameter is NaN or infinite.
    NonFinite(&'static str, f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite(name, value) => {
                write!(f, "{name} must be finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
