//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a config file, environment variables, and direct builder methods.
//! - Build and validate the final `GlidepathConfig`.
//!
//! Invariants / Assumptions:
//! - Field overrides (env vars or builder methods) take precedence over the config file.
//! - When the same field is set twice, the later call wins; callers apply CLI
//!   overrides after `from_env()`.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use super::validate::validate;
use crate::types::{GlidepathConfig, PointerStyle};

/// Configuration loader that builds config from files and environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    file_config: Option<GlidepathConfig>,
    color: Option<String>,
    font_family: Option<String>,
    font_size: Option<String>,
    animation_speed: Option<u64>,
    pointer_size: Option<u32>,
    pointer_style: Option<PointerStyle>,
    keyboard_navigation: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_font_family(mut self, family: String) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn with_font_size(mut self, size: String) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_animation_speed(mut self, ms: u64) -> Self {
        self.animation_speed = Some(ms);
        self
    }

    pub fn with_pointer_size(mut self, px: u32) -> Self {
        self.pointer_size = Some(px);
        self
    }

    pub fn with_pointer_style(mut self, style: PointerStyle) -> Self {
        self.pointer_style = Some(style);
        self
    }

    pub fn with_keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = Some(enabled);
        self
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_file_config(&mut self, config: Option<GlidepathConfig>) {
        self.file_config = config;
    }

    pub(crate) fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    pub(crate) fn set_font_family(&mut self, family: Option<String>) {
        self.font_family = family;
    }

    pub(crate) fn set_font_size(&mut self, size: Option<String>) {
        self.font_size = size;
    }

    pub(crate) fn set_animation_speed(&mut self, ms: Option<u64>) {
        self.animation_speed = ms;
    }

    pub(crate) fn set_pointer_size(&mut self, px: Option<u32>) {
        self.pointer_size = px;
    }

    pub(crate) fn set_pointer_style(&mut self, style: Option<PointerStyle>) {
        self.pointer_style = style;
    }

    pub(crate) fn set_keyboard_navigation(&mut self, enabled: Option<bool>) {
        self.keyboard_navigation = enabled;
    }

    /// Merge all sources into the final configuration and validate it.
    pub fn build(self) -> Result<GlidepathConfig, ConfigError> {
        let mut config = self.file_config.unwrap_or_default();

        if let Some(color) = self.color {
            config.pointer.color = color;
        }
        if let Some(family) = self.font_family {
            config.pointer.font_family = family;
        }
        if let Some(size) = self.font_size {
            config.pointer.font_size = size;
        }
        if let Some(ms) = self.animation_speed {
            config.pointer.animation_speed = ms;
        }
        if let Some(px) = self.pointer_size {
            config.pointer.pointer_size = px;
        }
        if let Some(style) = self.pointer_style {
            config.pointer.pointer_style = style;
        }
        if let Some(enabled) = self.keyboard_navigation {
            config.flow.keyboard_navigation = enabled;
        }

        validate(&config)?;
        Ok(config)
    }
}
