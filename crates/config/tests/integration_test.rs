//! Integration tests for configuration loading through the public API.

use glidepath_config::{
    ConfigError, ConfigLoader, GlidepathConfig, PointerStyle, Timing, env_var_or_none,
};
use std::time::Duration;

#[test]
fn test_config_loader_builder_overrides() {
    let config = ConfigLoader::new()
        .with_pointer_style(PointerStyle::Hand)
        .with_animation_speed(600)
        .build()
        .expect("should build with overrides");

    assert_eq!(config.pointer.pointer_style, PointerStyle::Hand);
    assert_eq!(config.pointer.animation_duration(), Duration::from_millis(600));
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("GLIDEPATH_COLOR");
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = GlidepathConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: GlidepathConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_json_object_is_all_defaults() {
    let parsed: GlidepathConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.timing, Timing::default());
    assert!(parsed.flow.keyboard_navigation);
}

#[test]
fn test_config_error_display_has_context() {
    let err = ConfigLoader::new()
        .with_pointer_size(1)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("between 8 and 256"));
}
