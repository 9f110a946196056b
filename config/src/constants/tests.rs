//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the default snapshot mirrors the individual constants.
///
/// # Examples
/// ```
/// use config::constants::OperatorConfig;
/// let cfg = OperatorConfig::default();
/// assert!(cfg.chamfer_thickness > 0.0);
/// ```
#[test]
fn default_config_matches_constants() {
    let cfg = OperatorConfig::default();
    assert_eq!(cfg.kis_height, DEFAULT_KIS_HEIGHT);
    assert_eq!(cfg.chamfer_thickness, DEFAULT_CHAMFER_THICKNESS);
    assert_eq!(cfg.chamfer_height, DEFAULT_CHAMFER_HEIGHT);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::OperatorConfig;
/// assert!(OperatorConfig::new(f64::NAN, 0.1, 0.1).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert!(matches!(
        OperatorConfig::new(0.0, f64::NEG_INFINITY, 0.0),
        Err(ConfigError::NonFinite("chamfer_thickness", _))
    ));
    assert_eq!(
        OperatorConfig::new(f64::INFINITY, 0.1, 0.0).unwrap_err(),
        ConfigError::NonFinite("kis_height", f64::INFINITY)
    );
    assert!(matches!(
        OperatorConfig::new(0.0, 0.1, f64::NAN),
        Err(ConfigError::NonFinite("chamfer_height", _))
    ));
}

#[test]
fn config_error_display_names_the_field() {
    let err = ConfigError::NonFinite("chamfer_height", f64::INFINITY);
    assert!(err.to_string().contains("chamfer_height"));
}

#[test]
fn new_accepts_any_finite_thickness() {
    for thickness in [-0.2, 0.0, 1.0, 1.5] {
        let cfg = OperatorConfig::new(0.0, thickness, 0.1).unwrap();
        assert_eq!(cfg.chamfer_thickness, thickness);
    }
}
