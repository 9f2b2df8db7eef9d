//! Configuration types for Glidepath.
//!
//! Responsibilities:
//! - Define the pointer appearance, flow behavior, and timing configuration.
//! - Provide defaults for every option so configuration absence is never an error.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader`).
//! - Rendering (see the `glidepath` crate).

mod flow;
pub(crate) mod pointer;
mod timing;

pub use flow::FlowConfig;
pub use pointer::{PointerConfig, PointerStyle};
pub use timing::Timing;

use serde::{Deserialize, Serialize};

/// Complete configuration for a pointer and the flow that drives it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlidepathConfig {
    pub pointer: PointerConfig,
    pub flow: FlowConfig,
    pub timing: Timing,
}
