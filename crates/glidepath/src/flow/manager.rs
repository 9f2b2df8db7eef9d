//! Step sequencer driving one pointer through an ordered tour.
//!
//! Responsibilities:
//! - Walk steps in order, skipping steps whose target is missing.
//! - Navigate to a step's page first when its URL points elsewhere, resuming
//!   after the page loads and settles.
//! - Own the flow's side effects (scroll lock, keyboard and click listeners)
//!   and release them in one idempotent teardown.
//!
//! Does NOT handle:
//! - Pointer animation or placement (see `pointer`).
//! - Delivering host input (hosts call `handle_event`).
//!
//! Invariants:
//! - At most one click listener and one keyboard listener are live at a time.
//! - Step N+1 never starts before step N is advanced past.
//! - Nothing on this surface panics or returns an error; failures are logged.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use glidepath_config::{FlowConfig, PointerConfig, Timing};

use super::step::{Step, validate_steps};
use crate::input::{FlowCommand, command_for_key};
use crate::page::{ElementId, Listener, ListenerId, Page, is_same_page};
use crate::pointer::Pointer;
use crate::scheduler::Scheduler;
use crate::telemetry::{FlowOutcome, Telemetry};

/// Input a host delivers to a running flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// The user clicked an element.
    Click(ElementId),
    /// The user pressed a key.
    Key(KeyCode),
    /// A page requested through `Page::navigate` finished loading.
    PageLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// The current step is shown and waits for a click or key.
    Active,
    /// Navigated away; waiting for `FlowEvent::PageLoaded`.
    AwaitingLoad,
    /// Page loaded; the current step runs once `due` passes.
    Settling { due: Duration },
}

#[derive(Debug, Clone, Copy)]
struct ClickSubscription {
    listener: ListenerId,
    element: ElementId,
}

/// Sequencer for a single onboarding flow.
pub struct FlowManager {
    pointer_config: PointerConfig,
    flow_config: FlowConfig,
    timing: Timing,
    scheduler: Arc<dyn Scheduler>,
    telemetry: Telemetry,
    pointer: Option<Pointer>,
    steps: Vec<Step>,
    index: usize,
    running: bool,
    phase: Phase,
    saved_scroll: Option<bool>,
    keyboard: Option<ListenerId>,
    click: Option<ClickSubscription>,
}

impl std::fmt::Debug for FlowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowManager")
            .field("steps", &self.steps.len())
            .field("index", &self.index)
            .field("running", &self.running)
            .field("phase", &self.phase)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl FlowManager {
    pub fn new(
        pointer_config: PointerConfig,
        flow_config: FlowConfig,
        timing: Timing,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            pointer_config,
            flow_config,
            timing,
            scheduler,
            telemetry: Telemetry::default(),
            pointer: None,
            steps: Vec::new(),
            index: 0,
            running: false,
            phase: Phase::Idle,
            saved_scroll: None,
            keyboard: None,
            click: None,
        }
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn pointer_config(&self) -> &PointerConfig {
        &self.pointer_config
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn pointer(&self) -> Option<&Pointer> {
        self.pointer.as_ref()
    }

    pub fn keyboard_attached(&self) -> bool {
        self.keyboard.is_some()
    }

    /// Element the current step is waiting on a click for.
    pub fn current_target(&self) -> Option<ElementId> {
        self.click.map(|c| c.element)
    }

    /// Whether the flow is waiting for a navigated page to load.
    pub fn awaiting_page_load(&self) -> bool {
        self.phase == Phase::AwaitingLoad
    }

    fn ensure_pointer(&mut self, page: &mut dyn Page) -> &mut Pointer {
        let Self {
            pointer,
            pointer_config,
            timing,
            scheduler,
            telemetry,
            ..
        } = self;
        pointer.get_or_insert_with(|| {
            Pointer::new(page, pointer_config.clone(), *timing, Arc::clone(scheduler))
                .with_telemetry(*telemetry)
        })
    }

    /// Start a flow over `steps`, replacing any flow already running.
    ///
    /// Returns `false` (and logs a warning) when the step list is empty or
    /// contains a blank selector.
    pub fn start(&mut self, page: &mut dyn Page, steps: Vec<Step>) -> bool {
        if let Err(err) = validate_steps(&steps) {
            tracing::warn!(error = %err, "Onboarding flow not started");
            return false;
        }
        if self.running {
            self.finish(page, FlowOutcome::Cancelled);
        }

        self.steps = steps;
        self.index = 0;
        self.running = true;
        self.ensure_pointer(page);

        self.saved_scroll = Some(page.scroll_enabled());
        page.set_scroll_enabled(false);
        if self.flow_config.keyboard_navigation {
            self.keyboard = Some(page.add_listener(Listener::Keyboard));
        }

        tracing::info!(steps = self.steps.len(), "Onboarding flow started");
        self.run_step(page, true);
        true
    }

    /// Stop the flow, hide the pointer and release every side effect. Idempotent.
    pub fn stop(&mut self, page: &mut dyn Page) {
        if self.running {
            self.finish(page, FlowOutcome::Cancelled);
        }
    }

    /// Seed the pointer position, creating the pointer if needed.
    pub fn set_initial_position(&mut self, page: &mut dyn Page, x: f64, y: f64) {
        self.ensure_pointer(page).set_initial_position(x, y);
    }

    /// Stop the flow and unmount the pointer.
    pub fn destroy(&mut self, page: &mut dyn Page) {
        self.stop(page);
        if let Some(mut pointer) = self.pointer.take() {
            pointer.destroy(page);
        }
    }

    /// Deliver host input. Returns whether the flow consumed the event.
    pub fn handle_event(&mut self, page: &mut dyn Page, event: FlowEvent) -> bool {
        if !self.running {
            return false;
        }
        match event {
            FlowEvent::Click(element) => {
                if self.current_target() != Some(element) {
                    return false;
                }
                self.detach_click(page);
                self.advance_step(page);
                true
            }
            FlowEvent::Key(code) => {
                if self.keyboard.is_none() {
                    return false;
                }
                match command_for_key(code) {
                    Some(FlowCommand::Next) => self.advance_step(page),
                    Some(FlowCommand::Back) => self.go_back_step(page),
                    Some(FlowCommand::Stop) => self.stop(page),
                    None => return false,
                }
                true
            }
            FlowEvent::PageLoaded => {
                if self.phase != Phase::AwaitingLoad {
                    return false;
                }
                let due = self.scheduler.now() + self.timing.settle_delay();
                tracing::debug!(index = self.index, "Page loaded, settling before step");
                self.phase = Phase::Settling { due };
                self.scheduler.request_frame();
                true
            }
        }
    }

    /// Drive settle timers and the pointer. Returns whether more frames are needed.
    pub fn tick(&mut self, page: &mut dyn Page) -> bool {
        let mut pending = false;
        if let Phase::Settling { due } = self.phase {
            if self.scheduler.now() >= due {
                self.phase = Phase::Active;
                self.run_step(page, false);
            } else {
                pending = true;
                self.scheduler.request_frame();
            }
        }
        if let Some(pointer) = self.pointer.as_mut() {
            pending |= pointer.tick(page);
        }
        pending
    }

    fn advance_step(&mut self, page: &mut dyn Page) {
        self.index += 1;
        self.run_step(page, true);
    }

    fn go_back_step(&mut self, page: &mut dyn Page) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        self.run_step(page, true);
    }

    /// Run the step at `index`, skipping forward past missing targets.
    fn run_step(&mut self, page: &mut dyn Page, mut check_url: bool) {
        while self.running {
            let Some(step) = self.steps.get(self.index).cloned() else {
                self.finish(page, FlowOutcome::Completed);
                return;
            };

            if check_url
                && let Some(url) = step.target_url()
                && !is_same_page(url, &page.current_path())
            {
                self.detach_click(page);
                tracing::debug!(index = self.index, url, "Navigating to step page");
                self.phase = Phase::AwaitingLoad;
                page.navigate(url);
                return;
            }
            check_url = true;

            match page.query(&step.element) {
                Some(element) => {
                    self.show_step(page, element, &step);
                    return;
                }
                None => {
                    tracing::warn!(
                        index = self.index,
                        selector = %step.element,
                        "Onboarding target not found, skipping step"
                    );
                    self.telemetry.record_step_skipped();
                    self.index += 1;
                }
            }
        }
    }

    fn show_step(&mut self, page: &mut dyn Page, element: ElementId, step: &Step) {
        self.detach_click(page);
        self.phase = Phase::Active;

        let is_first_step = self.index == 0;
        let pointer = self.ensure_pointer(page);
        pointer.move_to_element(page, element, step.note_text(), is_first_step);
        pointer.show(page);

        self.telemetry.record_step_shown();
        tracing::debug!(index = self.index, selector = %step.element, "Step shown");

        let listener = page.add_listener(Listener::Click(element));
        self.click = Some(ClickSubscription { listener, element });
    }

    fn detach_click(&mut self, page: &mut dyn Page) {
        if let Some(click) = self.click.take() {
            page.remove_listener(click.listener);
        }
    }

    /// Release listeners and restore scrolling. Safe to call repeatedly.
    fn teardown(&mut self, page: &mut dyn Page) {
        self.detach_click(page);
        if let Some(keyboard) = self.keyboard.take() {
            page.remove_listener(keyboard);
        }
        if let Some(previous) = self.saved_scroll.take() {
            page.set_scroll_enabled(previous);
        }
    }

    fn finish(&mut self, page: &mut dyn Page, outcome: FlowOutcome) {
        self.running = false;
        self.phase = Phase::Idle;
        self.teardown(page);
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.hide();
        }
        tracing::info!(
            outcome = outcome.as_str(),
            index = self.index,
            "Onboarding flow finished"
        );
        self.telemetry.record_flow_finished(outcome);
    }
}
