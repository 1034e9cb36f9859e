//! Tests for the validated weld configuration.

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = WeldConfig::default();
    assert!(cfg.seam_epsilon > 0.0);
    assert!(cfg.grid_size >= 2);
    assert_eq!(WeldConfig::new(cfg.grid_size, cfg.seam_epsilon), Ok(cfg));
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        WeldConfig::new(1, 0.01).unwrap_err(),
        ConfigError::InvalidGridSize(1)
    );
    assert_eq!(
        WeldConfig::new(20, 0.0).unwrap_err(),
        ConfigError::InvalidEpsilon(0.0)
    );
    assert!(WeldConfig::new(20, f32::NAN).is_err());
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidGridSize(0).to_string().contains("grid_size"));
    assert!(ConfigError::InvalidEpsilon(-1.0).to_string().contains("seam_epsilon"));
}
