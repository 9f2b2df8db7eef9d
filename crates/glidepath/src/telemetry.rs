//! Tour telemetry for measuring where users drop out.
//!
//! Responsibilities:
//! - Emit low-cardinality counters for shown and skipped steps.
//! - Record how flows end (completed vs cancelled).
//! - Count move requests dropped while the pointer was busy.
//!
//! Non-goals:
//! - Exporting metrics (embedders install a `metrics` recorder).
//! - Selectors, note text or URLs in labels.

pub const METRIC_STEPS_SHOWN_TOTAL: &str = "glidepath_steps_shown_total";
pub const METRIC_STEPS_SKIPPED_TOTAL: &str = "glidepath_steps_skipped_total";
pub const METRIC_FLOWS_TOTAL: &str = "glidepath_flows_total";
pub const METRIC_MOVES_DROPPED_TOTAL: &str = "glidepath_moves_dropped_total";

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The last step was advanced past.
    Completed,
    /// `stop` or Escape ended the flow early, or a new `start` replaced it.
    Cancelled,
}

impl FlowOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Counter facade. Disabled by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Telemetry {
    enabled: bool,
}

impl Telemetry {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record_step_shown(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_STEPS_SHOWN_TOTAL).increment(1);
    }

    pub fn record_step_skipped(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_STEPS_SKIPPED_TOTAL).increment(1);
    }

    pub fn record_flow_finished(&self, outcome: FlowOutcome) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_FLOWS_TOTAL, "outcome" => outcome.as_str()).increment(1);
    }

    pub fn record_move_dropped(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_MOVES_DROPPED_TOTAL).increment(1);
    }
}
