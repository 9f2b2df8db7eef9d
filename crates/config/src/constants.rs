//! Centralized constants for the Glidepath workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Pointer Appearance Defaults
// =============================================================================

/// Default pointer and note accent color (teal).
pub const DEFAULT_POINTER_COLOR: &str = "#0d9488";

/// Default note font family. `inherit` defers to the host's own font.
pub const DEFAULT_FONT_FAMILY: &str = "inherit";

/// Default note font size.
pub const DEFAULT_FONT_SIZE: &str = "14px";

/// Default pointer glide duration in milliseconds.
pub const DEFAULT_ANIMATION_SPEED_MS: u64 = 400;

/// Default pointer icon edge length in pixels.
pub const DEFAULT_POINTER_SIZE_PX: u32 = 32;

// =============================================================================
// Pointer Appearance Bounds
// =============================================================================

/// Smallest accepted pointer icon size in pixels.
pub const MIN_POINTER_SIZE_PX: u32 = 8;

/// Largest accepted pointer icon size in pixels.
pub const MAX_POINTER_SIZE_PX: u32 = 256;

/// Longest accepted glide duration in milliseconds.
pub const MAX_ANIMATION_SPEED_MS: u64 = 10_000;

// =============================================================================
// Timing & Layout
// =============================================================================

/// Pause after scrolling a target into view (or after a page load) before
/// geometry is measured again.
pub const SETTLE_DELAY_MS: u64 = 300;

/// Delay before a first-step note is revealed.
pub const NOTE_REVEAL_DELAY_MS: u64 = 10;

/// Margin kept around a target when it is scrolled into view.
pub const SCROLL_MARGIN_PX: f64 = 100.0;

/// Minimum distance kept between the pointer/note and the viewport edges.
pub const VIEWPORT_MARGIN_PX: f64 = 8.0;

/// Maximum rendered note width in pixels.
pub const NOTE_MAX_WIDTH_PX: f64 = 240.0;

/// Inner padding of the note bubble in pixels.
pub const NOTE_PADDING_PX: f64 = 10.0;

/// Gap between the pointer icon and its note in pixels.
pub const NOTE_GAP_PX: f64 = 6.0;

// =============================================================================
// Terminal Runtime Defaults
// =============================================================================

/// Default frame interval for the terminal runtime (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Default idle poll interval when no animation is in flight.
pub const DEFAULT_IDLE_TICK_MS: u64 = 250;

/// Default width of one terminal cell in pixels.
pub const DEFAULT_CELL_WIDTH_PX: f64 = 8.0;

/// Default height of one terminal cell in pixels.
pub const DEFAULT_CELL_HEIGHT_PX: f64 = 16.0;
