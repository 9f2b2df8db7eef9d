//! Environment variable tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::PointerStyle;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

use super::{env_lock, write_config_file};

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("GLIDEPATH_COLOR", Some("#112233")),
            ("GLIDEPATH_FONT_FAMILY", Some("serif")),
            ("GLIDEPATH_FONT_SIZE", Some("12px")),
            ("GLIDEPATH_ANIMATION_SPEED", Some("250")),
            ("GLIDEPATH_POINTER_SIZE", Some("40")),
            ("GLIDEPATH_POINTER_STYLE", Some("hand")),
            ("GLIDEPATH_KEYBOARD_NAVIGATION", Some("false")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.pointer.color, "#112233");
            assert_eq!(config.pointer.font_family, "serif");
            assert_eq!(config.pointer.font_size, "12px");
            assert_eq!(config.pointer.animation_speed, 250);
            assert_eq!(config.pointer.pointer_size, 40);
            assert_eq!(config.pointer.pointer_style, PointerStyle::Hand);
            assert!(!config.flow.keyboard_navigation);
        },
    );
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config_file(
        temp_dir.path(),
        r#"{"pointer": {"color": "red", "pointerSize": 20}}"#,
    );

    temp_env::with_vars([("GLIDEPATH_COLOR", Some("blue"))], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.pointer.color, "blue");
        assert_eq!(config.pointer.pointer_size, 20);
    });
}

#[test]
#[serial]
fn test_invalid_numeric_env_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("GLIDEPATH_ANIMATION_SPEED", Some("fast"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, .. } if var == "GLIDEPATH_ANIMATION_SPEED"
        ));
    });
}

#[test]
#[serial]
fn test_invalid_pointer_style_env_value() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("GLIDEPATH_POINTER_STYLE", Some("star"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(err.to_string().contains("unknown pointer style"));
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_var_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("GLIDEPATH_COLOR", Some("   "))], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config.pointer.color, "#0d9488");
    });
}

#[test]
#[serial]
fn test_config_path_env_does_not_override_explicit_path() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("GLIDEPATH_CONFIG_PATH", Some("/from/env.json"))], || {
        let loader = ConfigLoader::new()
            .with_config_path(PathBuf::from("/from/cli.json"))
            .from_env()
            .unwrap();
        assert_eq!(loader.config_path(), Some(&PathBuf::from("/from/cli.json")));

        let loader = ConfigLoader::new().from_env().unwrap();
        assert_eq!(loader.config_path(), Some(&PathBuf::from("/from/env.json")));
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
