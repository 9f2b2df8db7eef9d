//! Demo application hosting a tour over two terminal screens.
//!
//! Responsibilities:
//! - Draw the home (`/`) and settings (`/settings`) screens, registering each
//!   widget with the `TerminalPage` so tour selectors resolve against it.
//! - Route keys and mouse clicks to the running flow before the app itself.
//! - Turn page navigations requested by the flow into screen switches followed
//!   by `FlowEvent::PageLoaded`.
//!
//! Does NOT handle:
//! - Terminal setup or the event loop (see `main.rs`).
//!
//! Invariants:
//! - Tours start after a draw, so the first step sees this frame's regions.
//! - `PageLoaded` is delivered only after the new screen has been drawn once.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use glidepath_config::{FlowConfig, GlidepathConfig, PointerConfig};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
};

use crate::flow::{FlowEvent, FlowManager, Step};
use crate::onboarding::{OnboardingHandle, TriggerEvent};
use crate::page::{CellMetrics, Page, TerminalPage};
use crate::pointer::Pointer;
use crate::scheduler::Scheduler;
use crate::telemetry::Telemetry;
use crate::ui::PointerOverlay;

/// Rows scrolled per wheel notch.
const WHEEL_ROWS: i32 = 3;

/// A widget on a demo screen, laid out in document cells.
#[derive(Debug, Clone, Copy)]
struct Element {
    id: &'static str,
    classes: &'static [&'static str],
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    label: &'static str,
    bordered: bool,
}

const HOME: &[Element] = &[
    Element {
        id: "title",
        classes: &["heading"],
        x: 2,
        y: 1,
        width: 36,
        height: 1,
        label: "Glidepath Projects",
        bordered: false,
    },
    Element {
        id: "new-project",
        classes: &["button"],
        x: 2,
        y: 4,
        width: 18,
        height: 3,
        label: "New project",
        bordered: true,
    },
    Element {
        id: "open-project",
        classes: &["button"],
        x: 22,
        y: 4,
        width: 18,
        height: 3,
        label: "Open project",
        bordered: true,
    },
    Element {
        id: "help-text",
        classes: &["help"],
        x: 2,
        y: 9,
        width: 50,
        height: 2,
        label: "Press t to replay this tour, 2 for settings.",
        bordered: false,
    },
];

const SETTINGS: &[Element] = &[
    Element {
        id: "settings-title",
        classes: &["heading"],
        x: 2,
        y: 1,
        width: 36,
        height: 1,
        label: "Settings",
        bordered: false,
    },
    Element {
        id: "theme",
        classes: &["field"],
        x: 2,
        y: 3,
        width: 30,
        height: 3,
        label: "Theme: dark",
        bordered: true,
    },
    Element {
        id: "notifications",
        classes: &["field"],
        x: 2,
        y: 7,
        width: 30,
        height: 3,
        label: "Notifications: on",
        bordered: true,
    },
    Element {
        id: "save",
        classes: &["button"],
        x: 2,
        y: 44,
        width: 14,
        height: 3,
        label: "Save",
        bordered: true,
    },
];

/// Tour shown when no `--tour` file is given.
pub fn default_tour() -> Vec<Step> {
    vec![
        Step::new("#title", "Welcome! This short tour shows you around."),
        Step::new("#new-project", "Start here to create your first project."),
        Step::new(".help", "Shortcuts live down here."),
        Step::new("#theme", "Pick a color theme that suits you.").with_url("/settings"),
        Step::new("#save", "Remember to save your changes.").with_url("/settings"),
    ]
}

/// Host application: screens, tour handle, and input routing.
#[derive(Debug)]
pub struct DemoApp {
    page: TerminalPage,
    handle: OnboardingHandle,
    steps: Vec<Step>,
    pointer_config: PointerConfig,
    flow_config: FlowConfig,
    /// Tour start requested by input, with the triggering click if any.
    pending_start: Option<Option<TriggerEvent>>,
    loading: bool,
    quit: bool,
}

impl DemoApp {
    pub fn new(
        scheduler: Arc<dyn Scheduler>,
        config: GlidepathConfig,
        steps: Vec<Step>,
        metrics: CellMetrics,
    ) -> Self {
        let GlidepathConfig {
            pointer,
            flow,
            timing,
        } = config;
        let handle = OnboardingHandle::new(scheduler)
            .with_timing(timing)
            .with_telemetry(Telemetry::new(true));
        Self {
            page: TerminalPage::new(Rect::default(), metrics),
            handle,
            steps,
            pointer_config: pointer,
            flow_config: flow,
            pending_start: Some(None),
            loading: false,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn page(&self) -> &TerminalPage {
        &self.page
    }

    pub fn handle(&self) -> &OnboardingHandle {
        &self.handle
    }

    /// Request a tour restart on the next frame.
    pub fn restart_tour(&mut self, trigger: Option<TriggerEvent>) {
        self.pending_start = Some(trigger);
    }

    /// Draw the current screen, the pointer overlay and the status line.
    pub fn render(&mut self, frame: &mut Frame) {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.page.resize(body);
        self.page.begin_frame();

        let elements = match self.page.current_path().as_str() {
            "/settings" => SETTINGS,
            _ => HOME,
        };
        for element in elements {
            self.draw_element(frame, element);
        }

        if let Some(overlay) = self
            .handle
            .manager()
            .and_then(FlowManager::pointer)
            .and_then(Pointer::frame)
        {
            frame.render_widget(PointerOverlay::new(&overlay, self.page.metrics()), body);
        }

        frame.render_widget(Paragraph::new(self.status_line()), status);
    }

    fn draw_element(&mut self, frame: &mut Frame, element: &Element) {
        let id = self.page.register_with_classes(
            element.id,
            element.classes,
            Rect::new(element.x, element.y, element.width, element.height),
        );
        let Some(rect) = self.page.screen_rect(id) else {
            return;
        };

        let mut paragraph = Paragraph::new(element.label).wrap(Wrap { trim: true });
        if element.bordered {
            paragraph = paragraph.block(Block::bordered());
        } else {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::BOLD));
        }
        frame.render_widget(paragraph, rect);
    }

    fn status_line(&self) -> String {
        let keys = "q quit  t tour  1/2 screens  \u{2190}/\u{2192} steps  Esc stop";
        match self.handle.manager().filter(|m| m.is_running()) {
            Some(manager) => format!(
                "step {}/{}  |  {keys}",
                manager.current_index() + 1,
                manager.steps().len()
            ),
            None => keys.to_string(),
        }
    }

    /// Work that needs this frame's regions: starting tours and reporting loads.
    pub fn after_draw(&mut self) {
        if let Some(trigger) = self.pending_start.take() {
            self.handle.start_onboarding(
                &mut self.page,
                self.steps.clone(),
                Some(self.pointer_config.clone()),
                trigger,
                Some(self.flow_config),
            );
        }
        if self.loading {
            self.loading = false;
            self.handle.handle_event(&mut self.page, FlowEvent::PageLoaded);
        }
    }

    /// Apply pending navigation and advance animations.
    ///
    /// Returns whether another frame is needed soon.
    pub fn tick(&mut self) -> bool {
        if let Some(url) = self.page.take_navigation() {
            tracing::debug!(url = %url, "Switching screen for tour step");
            self.loading = true;
        }
        let animating = self.handle.tick(&mut self.page);
        animating || self.loading || self.pending_start.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.page.keyboard_active()
            && self
                .handle
                .handle_event(&mut self.page, FlowEvent::Key(key.code))
        {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('t') => self.restart_tour(None),
            KeyCode::Char('1') => self.page.set_path("/"),
            KeyCode::Char('2') => self.page.set_path("/settings"),
            KeyCode::Up => self.page.scroll_by(-1),
            KeyCode::Down => self.page.scroll_by(1),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(element) = self.page.hit_test(mouse.column, mouse.row) {
                    self.handle
                        .handle_event(&mut self.page, FlowEvent::Click(element));
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                let trigger = self.trigger_at(mouse.column, mouse.row);
                self.restart_tour(Some(trigger));
            }
            MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_ROWS),
            _ => {}
        }
    }

    /// Center of a screen cell in page pixels.
    fn trigger_at(&self, column: u16, row: u16) -> TriggerEvent {
        let area = self.page.area();
        let metrics = self.page.metrics();
        TriggerEvent {
            x: (f64::from(column.saturating_sub(area.x)) + 0.5) * metrics.width_px,
            y: (f64::from(row.saturating_sub(area.y)) + 0.5) * metrics.height_px,
        }
    }
}
