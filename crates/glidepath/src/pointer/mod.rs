//! Animated pointer renderer.
//!
//! Responsibilities:
//! - Own one overlay on a page: icon position, visibility, and note bubble.
//! - Scroll off-screen targets into view, wait for layout to settle, then glide.
//! - Flip and clamp the note against the viewport (see `placement`).
//!
//! Does NOT handle:
//! - Step sequencing or listeners (see `flow`).
//! - Drawing pixels or cells (hosts draw from `Pointer::frame`).
//!
//! Invariants:
//! - At most one move is in flight. A `move_to_element` call while busy
//!   (settling or gliding) is dropped, not queued.
//! - After `destroy`, every method is a no-op and `frame()` returns `None`.

mod motion;
mod overlay;
mod placement;

pub use motion::Motion;
pub use overlay::{NoteFrame, OverlayFrame, OverlayStyle, PointerTransform};
pub use placement::{NoteSize, Placement, PlacementInput, estimate_note_size, place};

use std::sync::Arc;
use std::time::Duration;

use glidepath_config::{PointerConfig, Timing};

use crate::geometry::{Point, Rect};
use crate::page::{ElementId, OverlayId, Page};
use crate::scheduler::Scheduler;
use crate::telemetry::Telemetry;

/// Observable pointer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Top-left corner of the icon in viewport pixels.
    pub position: Point,
    pub animating: bool,
    pub visible: bool,
}

/// Result of a `move_to_element` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The glide started immediately.
    Started,
    /// The target was scrolled into view; the glide starts after the settle delay.
    Deferred,
    /// Another move is in flight; this request was dropped.
    Busy,
    /// The target has no geometry (removed from the page).
    TargetGone,
    /// The pointer was destroyed.
    Destroyed,
}

#[derive(Debug, Clone)]
struct Note {
    text: String,
    /// Note top-left relative to the pointer's top-left.
    offset: Point,
    size: NoteSize,
    revealed: bool,
    focused: bool,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Settling {
        element: ElementId,
        note: Option<String>,
        is_first_step: bool,
        due: Duration,
    },
    Gliding(Motion),
}

/// The on-screen pointer and its note.
pub struct Pointer {
    config: PointerConfig,
    style: OverlayStyle,
    timing: Timing,
    scheduler: Arc<dyn Scheduler>,
    telemetry: Telemetry,
    overlay: Option<OverlayId>,
    state: PointerState,
    transform: PointerTransform,
    note: Option<Note>,
    reveal_at: Option<Duration>,
    phase: Phase,
    move_requests: u64,
}

impl std::fmt::Debug for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pointer")
            .field("overlay", &self.overlay)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Pointer {
    /// Mount a new pointer overlay on `page`, centered in the viewport.
    pub fn new(
        page: &mut dyn Page,
        config: PointerConfig,
        timing: Timing,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let style = OverlayStyle::from_config(&config);
        let overlay = page.mount_overlay(&style);
        let center = page.viewport().center();
        let half = config.half_size();

        tracing::debug!(overlay = overlay.0, style = %config.pointer_style, "Pointer overlay mounted");

        Self {
            config,
            style,
            timing,
            scheduler,
            telemetry: Telemetry::default(),
            overlay: Some(overlay),
            state: PointerState {
                position: center.offset(-half, -half),
                animating: false,
                visible: true,
            },
            transform: PointerTransform::empty(),
            note: None,
            reveal_at: None,
            phase: Phase::Idle,
            move_requests: 0,
        }
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_destroyed(&self) -> bool {
        self.overlay.is_none()
    }

    /// Text of the current note, if any.
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_ref().map(|n| n.text.as_str())
    }

    /// Whether the current note has been revealed.
    pub fn note_revealed(&self) -> bool {
        self.note.as_ref().is_some_and(|n| n.revealed)
    }

    pub fn transform(&self) -> PointerTransform {
        self.transform
    }

    /// Number of move requests accepted (not dropped) so far.
    pub fn move_requests(&self) -> u64 {
        self.move_requests
    }

    /// Destination of the glide in flight, if any.
    pub fn destination(&self) -> Option<Point> {
        match &self.phase {
            Phase::Gliding(motion) => Some(motion.to),
            _ => None,
        }
    }

    /// Request a glide to `target`, optionally showing `note` beside it.
    pub fn move_to_element(
        &mut self,
        page: &mut dyn Page,
        target: ElementId,
        note: Option<&str>,
        is_first_step: bool,
    ) -> MoveOutcome {
        if self.overlay.is_none() {
            return MoveOutcome::Destroyed;
        }
        if self.state.animating {
            tracing::debug!(element = target.0, "Pointer busy, move request dropped");
            self.telemetry.record_move_dropped();
            return MoveOutcome::Busy;
        }
        let Some(rect) = page.bounding_rect(target) else {
            return MoveOutcome::TargetGone;
        };

        self.state.animating = true;
        self.move_requests += 1;

        if !page.viewport().contains(&rect) {
            page.scroll_into_view(target, self.timing.scroll_margin_px);
            let due = self.scheduler.now() + self.timing.settle_delay();
            tracing::debug!(element = target.0, "Target off-screen, scrolled into view");
            self.phase = Phase::Settling {
                element: target,
                note: note.map(str::to_string),
                is_first_step,
                due,
            };
            self.scheduler.request_frame();
            return MoveOutcome::Deferred;
        }

        self.begin_glide(page, rect, note, is_first_step);
        MoveOutcome::Started
    }

    fn begin_glide(&mut self, page: &dyn Page, rect: Rect, note: Option<&str>, is_first_step: bool) {
        let size = note.map(|text| estimate_note_size(text, self.style.font_size_px));
        let placed = place(PlacementInput {
            target: rect,
            viewport: page.viewport(),
            pointer_size: self.style.pointer_size,
            note: size,
            margin: self.timing.viewport_margin_px,
        });

        let now = self.scheduler.now();
        match (note, size, placed.note) {
            (Some(text), Some(size), Some(at)) => {
                let mut transform = PointerTransform::empty();
                transform.set(PointerTransform::MIRROR_X, placed.flipped_left);
                transform.set(PointerTransform::MIRROR_Y, placed.flipped_above);
                self.transform = transform;

                let reveal_now = !is_first_step || self.timing.note_reveal_delay().is_zero();
                self.note = Some(Note {
                    text: text.to_string(),
                    offset: Point::new(at.x - placed.pointer.x, at.y - placed.pointer.y),
                    size,
                    revealed: reveal_now,
                    focused: false,
                });
                self.reveal_at = (!reveal_now).then(|| now + self.timing.note_reveal_delay());
            }
            _ => {
                self.note = None;
                self.reveal_at = None;
                self.transform = PointerTransform::empty();
            }
        }

        self.phase = Phase::Gliding(Motion {
            from: self.state.position,
            to: placed.pointer,
            started_at: now,
            duration: self.config.animation_duration(),
        });
        self.scheduler.request_frame();
    }

    /// Advance timers and the glide. Returns whether more frames are needed.
    pub fn tick(&mut self, page: &mut dyn Page) -> bool {
        if self.overlay.is_none() {
            return false;
        }
        let now = self.scheduler.now();

        if matches!(&self.phase, Phase::Settling { due, .. } if now >= *due)
            && let Phase::Settling {
                element,
                note,
                is_first_step,
                ..
            } = std::mem::replace(&mut self.phase, Phase::Idle)
        {
            match page.bounding_rect(element) {
                Some(rect) => self.begin_glide(page, rect, note.as_deref(), is_first_step),
                None => {
                    tracing::debug!(element = element.0, "Target vanished while settling");
                    self.state.animating = false;
                }
            }
        }

        if let Phase::Gliding(motion) = &self.phase {
            let (position, done) = motion.sample(now);
            self.state.position = position;
            if done {
                self.phase = Phase::Idle;
                self.state.animating = false;
            }
        }

        if let Some(at) = self.reveal_at
            && now >= at
        {
            self.reveal_at = None;
            if let Some(note) = self.note.as_mut() {
                note.revealed = true;
                if self.state.visible
                    && let Some(overlay) = self.overlay
                {
                    note.focused = true;
                    page.focus_note(overlay);
                }
            }
        }

        let pending = !matches!(self.phase, Phase::Idle) || self.reveal_at.is_some();
        if pending {
            self.scheduler.request_frame();
        }
        pending
    }

    /// Show the pointer and its note, moving keyboard focus to a visible note.
    pub fn show(&mut self, page: &mut dyn Page) {
        let Some(overlay) = self.overlay else {
            return;
        };
        self.state.visible = true;
        if let Some(note) = self.note.as_mut()
            && note.revealed
        {
            note.focused = true;
            page.focus_note(overlay);
        }
    }

    /// Hide the pointer and its note. Position and note text are kept.
    pub fn hide(&mut self) {
        if self.overlay.is_none() {
            return;
        }
        self.state.visible = false;
        if let Some(note) = self.note.as_mut() {
            note.focused = false;
        }
    }

    /// Place the pointer at `(x, y)` without animating.
    pub fn set_initial_position(&mut self, x: f64, y: f64) {
        if self.overlay.is_none() {
            return;
        }
        self.state.position = Point::new(x, y);
    }

    /// Unmount the overlay. Irreversible.
    pub fn destroy(&mut self, page: &mut dyn Page) {
        if let Some(overlay) = self.overlay.take() {
            page.unmount_overlay(overlay);
            self.phase = Phase::Idle;
            self.reveal_at = None;
            self.state.animating = false;
            self.state.visible = false;
            tracing::debug!(overlay = overlay.0, "Pointer overlay destroyed");
        }
    }

    /// Snapshot for hosts to draw. `None` once destroyed.
    pub fn frame(&self) -> Option<OverlayFrame> {
        self.overlay?;
        let note = self
            .note
            .as_ref()
            .filter(|n| n.revealed && self.state.visible)
            .map(|n| NoteFrame {
                text: n.text.clone(),
                position: self.state.position.offset(n.offset.x, n.offset.y),
                width: n.size.width,
                height: n.size.height,
                focused: n.focused,
            });

        Some(OverlayFrame {
            pointer: self.state.position,
            visible: self.state.visible,
            transform: self.transform,
            style: self.style.clone(),
            note,
        })
    }
}
