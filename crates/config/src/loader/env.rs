//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GLIDEPATH_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over config file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::PointerStyle;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(color) = env_var_or_none("GLIDEPATH_COLOR") {
        loader.set_color(Some(color));
    }
    if let Some(family) = env_var_or_none("GLIDEPATH_FONT_FAMILY") {
        loader.set_font_family(Some(family));
    }
    if let Some(size) = env_var_or_none("GLIDEPATH_FONT_SIZE") {
        loader.set_font_size(Some(size));
    }
    if let Some(speed) = env_var_or_none("GLIDEPATH_ANIMATION_SPEED") {
        let ms: u64 = speed.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GLIDEPATH_ANIMATION_SPEED".to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_animation_speed(Some(ms));
    }
    if let Some(size) = env_var_or_none("GLIDEPATH_POINTER_SIZE") {
        let px: u32 = size.parse().map_err(|_| ConfigError::InvalidValue {
            var: "GLIDEPATH_POINTER_SIZE".to_string(),
            message: "must be a whole number of pixels".to_string(),
        })?;
        loader.set_pointer_size(Some(px));
    }
    if let Some(style) = env_var_or_none("GLIDEPATH_POINTER_STYLE") {
        let style: PointerStyle = style.parse().map_err(|message| ConfigError::InvalidValue {
            var: "GLIDEPATH_POINTER_STYLE".to_string(),
            message,
        })?;
        loader.set_pointer_style(Some(style));
    }
    if let Some(enabled) = env_var_or_none("GLIDEPATH_KEYBOARD_NAVIGATION") {
        loader.set_keyboard_navigation(Some(parse_bool(
            "GLIDEPATH_KEYBOARD_NAVIGATION",
            &enabled,
        )?));
    }

    // Config path from environment (only if not already set via CLI)
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none("GLIDEPATH_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
