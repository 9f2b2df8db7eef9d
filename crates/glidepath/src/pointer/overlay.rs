//! Overlay styling and the render snapshot handed to hosts.
//!
//! Responsibilities:
//! - Derive the scoped overlay style from a `PointerConfig`.
//! - Describe icon shape and orientation (`PointerTransform`).
//! - Provide the read-only `OverlayFrame` hosts draw from.
//!
//! Invariants:
//! - The overlay sits above all page content (`z_index` is `i32::MAX`) and
//!   only the note accepts pointer events.

use bitflags::bitflags;
use glidepath_config::{PointerConfig, PointerStyle};
use ratatui::style::Color;

use crate::geometry::Point;

bitflags! {
    /// Orientation applied to the pointer icon.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PointerTransform: u8 {
        /// Mirror horizontally (note flipped to the pointer's left).
        const MIRROR_X = 1 << 0;
        /// Mirror vertically (note flipped above the pointer).
        const MIRROR_Y = 1 << 1;
    }
}

/// Scoped styles for one pointer overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub color: Color,
    /// Original color string, used when emitting a stylesheet.
    pub color_css: String,
    pub font_family: String,
    pub font_size_px: f64,
    pub pointer_size: f64,
    pub shape: PointerStyle,
    pub z_index: i32,
}

impl OverlayStyle {
    pub fn from_config(config: &PointerConfig) -> Self {
        Self {
            color: config.resolved_color(),
            color_css: config.color.clone(),
            font_family: config.font_family.clone(),
            font_size_px: config.font_size_px(),
            pointer_size: config.size(),
            shape: config.pointer_style,
            z_index: i32::MAX,
        }
    }

    /// Terminal glyph for the icon in the given orientation.
    pub fn glyph(&self, transform: PointerTransform) -> &'static str {
        match self.shape {
            PointerStyle::Circle => "●",
            PointerStyle::Hand => {
                if transform.contains(PointerTransform::MIRROR_Y) {
                    "☟"
                } else {
                    "☝"
                }
            }
            PointerStyle::Arrow => {
                let mirror_x = transform.contains(PointerTransform::MIRROR_X);
                let mirror_y = transform.contains(PointerTransform::MIRROR_Y);
                match (mirror_x, mirror_y) {
                    (false, false) => "↖",
                    (true, false) => "↗",
                    (false, true) => "↙",
                    (true, true) => "↘",
                }
            }
        }
    }

    /// Stylesheet scoped under `.{scope}` for hosts that render markup.
    pub fn stylesheet(&self, scope: &str) -> String {
        format!(
            ".{scope}{{position:fixed;inset:0;pointer-events:none;z-index:{z};}}\n\
             .{scope} .{scope}-icon{{width:{size}px;height:{size}px;color:{color};}}\n\
             .{scope} .{scope}-note{{pointer-events:auto;font-family:{font};font-size:{font_size}px;border:2px solid {color};}}\n",
            z = self.z_index,
            size = self.pointer_size,
            color = self.color_css,
            font = self.font_family,
            font_size = self.font_size_px,
        )
    }
}

/// Render snapshot of the note bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFrame {
    pub text: String,
    /// Top-left corner in viewport pixels.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub focused: bool,
}

/// Render snapshot of a pointer overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// Top-left corner of the icon in viewport pixels.
    pub pointer: Point,
    pub visible: bool,
    pub transform: PointerTransform,
    pub style: OverlayStyle,
    /// Present only while the note is revealed and the pointer is visible.
    pub note: Option<NoteFrame>,
}
