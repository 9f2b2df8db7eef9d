//! Convenience entry point owning one flow and its pointer.
//!
//! Responsibilities:
//! - Lazily build a `FlowManager` on first use and reuse it on later calls.
//! - Seed the pointer at a triggering click before the first animation.
//!
//! Invariants:
//! - Pointer and flow configs only apply when the handle creates its manager;
//!   later calls reuse the existing manager until `destroy`.

use std::sync::Arc;

use glidepath_config::{FlowConfig, PointerConfig, Timing};

use crate::flow::{FlowEvent, FlowManager, Step, validate_steps};
use crate::page::Page;
use crate::scheduler::Scheduler;
use crate::telemetry::Telemetry;

/// Position of the click that triggered a tour, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEvent {
    pub x: f64,
    pub y: f64,
}

/// Caller-owned handle to a reusable onboarding flow.
pub struct OnboardingHandle {
    scheduler: Arc<dyn Scheduler>,
    timing: Timing,
    telemetry: Telemetry,
    manager: Option<FlowManager>,
}

impl std::fmt::Debug for OnboardingHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingHandle")
            .field("timing", &self.timing)
            .field("manager", &self.manager)
            .finish_non_exhaustive()
    }
}

impl OnboardingHandle {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            timing: Timing::default(),
            telemetry: Telemetry::default(),
            manager: None,
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Start (or restart) the tour over `steps`.
    pub fn start_onboarding(
        &mut self,
        page: &mut dyn Page,
        steps: Vec<Step>,
        pointer_config: Option<PointerConfig>,
        trigger: Option<TriggerEvent>,
        flow_config: Option<FlowConfig>,
    ) -> bool {
        let Self {
            scheduler,
            timing,
            telemetry,
            manager,
        } = self;
        let manager = manager.get_or_insert_with(|| {
            FlowManager::new(
                pointer_config.unwrap_or_default(),
                flow_config.unwrap_or_default(),
                *timing,
                Arc::clone(scheduler),
            )
            .with_telemetry(*telemetry)
        });

        if let Some(event) = trigger
            && validate_steps(&steps).is_ok()
        {
            let half = manager.pointer_config().half_size();
            manager.set_initial_position(page, event.x - half, event.y - half);
        }
        manager.start(page, steps)
    }

    pub fn manager(&self) -> Option<&FlowManager> {
        self.manager.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.manager.as_ref().is_some_and(FlowManager::is_running)
    }

    pub fn handle_event(&mut self, page: &mut dyn Page, event: FlowEvent) -> bool {
        self.manager
            .as_mut()
            .is_some_and(|m| m.handle_event(page, event))
    }

    pub fn tick(&mut self, page: &mut dyn Page) -> bool {
        self.manager.as_mut().is_some_and(|m| m.tick(page))
    }

    pub fn stop(&mut self, page: &mut dyn Page) {
        if let Some(manager) = self.manager.as_mut() {
            manager.stop(page);
        }
    }

    /// Stop the flow, unmount the pointer and forget the manager.
    pub fn destroy(&mut self, page: &mut dyn Page) {
        if let Some(mut manager) = self.manager.take() {
            manager.destroy(page);
        }
    }
}

/// Build a handle and start a tour in one call.
pub fn start_onboarding(
    page: &mut dyn Page,
    scheduler: Arc<dyn Scheduler>,
    steps: Vec<Step>,
    pointer_config: Option<PointerConfig>,
    trigger: Option<TriggerEvent>,
    flow_config: Option<FlowConfig>,
) -> OnboardingHandle {
    let mut handle = OnboardingHandle::new(scheduler);
    handle.start_onboarding(page, steps, pointer_config, trigger, flow_config);
    handle
}
