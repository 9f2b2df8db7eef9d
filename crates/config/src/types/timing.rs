//! Timing and layout constants carried as configuration.
//!
//! Invariants:
//! - Defaults mirror `crate::constants`; tests shrink them to zero for
//!   deterministic runs without real timers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    NOTE_REVEAL_DELAY_MS, SCROLL_MARGIN_PX, SETTLE_DELAY_MS, VIEWPORT_MARGIN_PX,
};

/// Delays and margins used by the pointer renderer and flow sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Pause after scroll-into-view or page load before geometry is re-measured.
    pub settle_delay_ms: u64,
    /// Delay before a first-step note becomes visible.
    pub note_reveal_delay_ms: u64,
    /// Margin kept around a target scrolled into view.
    pub scroll_margin_px: f64,
    /// Margin kept between pointer/note and the viewport edges.
    pub viewport_margin_px: f64,
}

impl Timing {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn note_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.note_reveal_delay_ms)
    }

    /// Timing with both delays removed. Margins keep their defaults.
    pub fn immediate() -> Self {
        Self {
            settle_delay_ms: 0,
            note_reveal_delay_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            note_reveal_delay_ms: NOTE_REVEAL_DELAY_MS,
            scroll_margin_px: SCROLL_MARGIN_PX,
            viewport_margin_px: VIEWPORT_MARGIN_PX,
        }
    }
}
