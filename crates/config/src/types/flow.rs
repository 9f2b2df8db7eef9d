//! Flow sequencer options.

use serde::{Deserialize, Serialize};

/// Behavior switches for the flow sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Install the ArrowLeft/ArrowRight/Enter/Escape handler while a flow runs.
    #[serde(alias = "keyboardNavigation")]
    pub keyboard_navigation: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            keyboard_navigation: true,
        }
    }
}
