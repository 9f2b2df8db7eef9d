//! Validation of a merged configuration.
//!
//! Invariants:
//! - Every rejected field is reported with the option name it was loaded under.

use super::error::ConfigError;
use crate::constants::{MAX_ANIMATION_SPEED_MS, MAX_POINTER_SIZE_PX, MIN_POINTER_SIZE_PX};
use crate::types::GlidepathConfig;
use crate::types::pointer::{parse_color, parse_css_length};

pub(crate) fn validate(config: &GlidepathConfig) -> Result<(), ConfigError> {
    let pointer = &config.pointer;

    if parse_color(&pointer.color).is_none() {
        return Err(ConfigError::InvalidValue {
            var: "color".to_string(),
            message: format!("'{}' is not a recognized color", pointer.color),
        });
    }
    if parse_css_length(&pointer.font_size).is_none() {
        return Err(ConfigError::InvalidValue {
            var: "font_size".to_string(),
            message: "must be a positive CSS length such as 14px or 1rem".to_string(),
        });
    }
    if pointer.font_family.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "font_family".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if !(MIN_POINTER_SIZE_PX..=MAX_POINTER_SIZE_PX).contains(&pointer.pointer_size) {
        return Err(ConfigError::InvalidValue {
            var: "pointer_size".to_string(),
            message: format!(
                "must be between {} and {} (got {})",
                MIN_POINTER_SIZE_PX, MAX_POINTER_SIZE_PX, pointer.pointer_size
            ),
        });
    }
    if pointer.animation_speed > MAX_ANIMATION_SPEED_MS {
        return Err(ConfigError::InvalidValue {
            var: "animation_speed".to_string(),
            message: format!(
                "must be at most {} ms (got {})",
                MAX_ANIMATION_SPEED_MS, pointer.animation_speed
            ),
        });
    }

    let timing = &config.timing;
    if !(timing.viewport_margin_px.is_finite() && timing.viewport_margin_px >= 0.0) {
        return Err(ConfigError::InvalidValue {
            var: "viewport_margin_px".to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }
    if !(timing.scroll_margin_px.is_finite() && timing.scroll_margin_px >= 0.0) {
        return Err(ConfigError::InvalidValue {
            var: "scroll_margin_px".to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }

    Ok(())
}
