//! Pointer appearance configuration.
//!
//! Responsibilities:
//! - Define the user-selectable pointer icon shape (`PointerStyle`).
//! - Define `PointerConfig` with defaults for every option.
//! - Resolve configured strings (color, font size) into runtime values.
//!
//! Does NOT handle:
//! - Validation of loaded values (see `loader::validate`).
//! - Drawing the icon (see the `glidepath` crate).
//!
//! Invariants:
//! - Option names accept both `snake_case` and the camelCase spelling
//!   (`fontFamily`, `animationSpeed`, ...) used by existing tour configs.
//! - `resolved_color()` never fails; unparseable colors fall back to the default teal.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ANIMATION_SPEED_MS, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_POINTER_COLOR,
    DEFAULT_POINTER_SIZE_PX,
};

/// Root font size used to resolve relative (`em`, `rem`, `%`) lengths.
const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Shape of the pointer icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerStyle {
    #[default]
    Arrow,
    Hand,
    Circle,
}

impl PointerStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Hand => "hand",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for PointerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrow" => Ok(Self::Arrow),
            "hand" => Ok(Self::Hand),
            "circle" => Ok(Self::Circle),
            other => Err(format!(
                "unknown pointer style '{other}' (expected arrow, hand, or circle)"
            )),
        }
    }
}

/// Appearance of a pointer instance. Immutable once the pointer is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Accent color of the icon and note border.
    pub color: String,
    /// Note font family.
    #[serde(alias = "fontFamily")]
    pub font_family: String,
    /// Note font size as a CSS length (e.g. `"14px"`).
    #[serde(alias = "fontSize")]
    pub font_size: String,
    /// Glide duration in milliseconds.
    #[serde(alias = "animationSpeed")]
    pub animation_speed: u64,
    /// Icon edge length in pixels.
    #[serde(alias = "pointerSize")]
    pub pointer_size: u32,
    /// Icon shape.
    #[serde(alias = "pointerStyle")]
    pub pointer_style: PointerStyle,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_POINTER_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            animation_speed: DEFAULT_ANIMATION_SPEED_MS,
            pointer_size: DEFAULT_POINTER_SIZE_PX,
            pointer_style: PointerStyle::default(),
        }
    }
}

impl PointerConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_speed)
    }

    /// Icon edge length as a layout value.
    pub fn size(&self) -> f64 {
        f64::from(self.pointer_size)
    }

    pub fn half_size(&self) -> f64 {
        self.size() / 2.0
    }

    /// Accent color, falling back to the default teal when `color` does not parse.
    pub fn resolved_color(&self) -> Color {
        parse_color(&self.color)
            .or_else(|| parse_color(DEFAULT_POINTER_COLOR))
            .unwrap_or(Color::Cyan)
    }

    /// Font size in pixels, falling back to the default size when `font_size`
    /// is not a recognized CSS length.
    pub fn font_size_px(&self) -> f64 {
        parse_css_length(&self.font_size)
            .or_else(|| parse_css_length(DEFAULT_FONT_SIZE))
            .unwrap_or(14.0)
    }
}

/// Parse a color string the way ratatui does (`"red"`, `"#0d9488"`, `"7"`).
pub(crate) fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Parse a CSS length into pixels. Supports `px`, `pt`, `em`, `rem`, `%`, and
/// unitless numbers.
pub(crate) fn parse_css_length(value: &str) -> Option<f64> {
    let value = value.trim().to_ascii_lowercase();
    let (number, scale) = if let Some(n) = value.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix("pt") {
        (n, 4.0 / 3.0)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = value.strip_suffix('%') {
        (n, ROOT_FONT_SIZE_PX / 100.0)
    } else {
        (value.as_str(), 1.0)
    };

    let parsed: f64 = number.trim().parse().ok()?;
    if parsed.is_finite() && parsed > 0.0 {
        Some(parsed * scale)
    } else {
        None
    }
}
