//! Ratatui-backed page host.
//!
//! Responsibilities:
//! - Map named widget regions (registered while drawing) to stable `ElementId`s.
//! - Convert between terminal cells and the pixel space the pointer lays out in.
//! - Hit-test mouse clicks against regions that carry a click listener.
//! - Hold a pending navigation until the runtime loads the next screen.
//!
//! Does NOT handle:
//! - Drawing screens (the application draws and calls `register`).
//! - Raw terminal setup (see `runtime::terminal`).
//!
//! Invariants:
//! - Region rects are in document cells relative to the page area; the visible
//!   window starts `scroll_rows` rows down.
//! - A dom id keeps the same `ElementId` across frames and screens.

use std::collections::{BTreeMap, HashMap};

use glidepath_config::constants::{DEFAULT_CELL_HEIGHT_PX, DEFAULT_CELL_WIDTH_PX};
use ratatui::layout::Rect as CellRect;

use super::{ElementId, Listener, ListenerId, OverlayId, Page, Selector, path_of};
use crate::geometry::{Rect, Viewport};
use crate::pointer::OverlayStyle;

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_CELL_WIDTH_PX,
            height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

impl CellMetrics {
    /// Pixel column to cell column, rounding down. Negative input maps to 0.
    pub fn col(&self, x_px: f64) -> u16 {
        cells((x_px / self.width_px).floor())
    }

    /// Pixel row to cell row, rounding down. Negative input maps to 0.
    pub fn row(&self, y_px: f64) -> u16 {
        cells((y_px / self.height_px).floor())
    }

    /// Width in cells of a box `width_px` wide, at least one cell.
    pub fn cols_for(&self, width_px: f64) -> u16 {
        cells((width_px / self.width_px).ceil()).max(1)
    }

    /// Height in cells of a box `height_px` tall, at least one cell.
    pub fn rows_for(&self, height_px: f64) -> u16 {
        cells((height_px / self.height_px).ceil()).max(1)
    }
}

fn cells(count: f64) -> u16 {
    if !count.is_finite() || count <= 0.0 {
        0
    } else if count >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        count as u16
    }
}

#[derive(Debug, Clone)]
struct Region {
    dom_id: String,
    classes: Vec<String>,
    rect: CellRect,
}

/// `Page` implementation over a ratatui frame.
#[derive(Debug)]
pub struct TerminalPage {
    area: CellRect,
    metrics: CellMetrics,
    path: String,
    scroll_rows: u16,
    scroll_enabled: bool,
    ids: HashMap<String, ElementId>,
    regions: BTreeMap<ElementId, Region>,
    overlays: BTreeMap<OverlayId, OverlayStyle>,
    focused_overlay: Option<OverlayId>,
    listeners: BTreeMap<ListenerId, Listener>,
    pending_navigation: Option<String>,
    next_id: u64,
}

impl TerminalPage {
    pub fn new(area: CellRect, metrics: CellMetrics) -> Self {
        Self {
            area,
            metrics,
            path: "/".to_string(),
            scroll_rows: 0,
            scroll_enabled: true,
            ids: HashMap::new(),
            regions: BTreeMap::new(),
            overlays: BTreeMap::new(),
            focused_overlay: None,
            listeners: BTreeMap::new(),
            pending_navigation: None,
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn area(&self) -> CellRect {
        self.area
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Update the drawable area after a terminal resize.
    pub fn resize(&mut self, area: CellRect) {
        self.area = area;
    }

    /// Forget the previous frame's regions. Call before drawing a screen.
    pub fn begin_frame(&mut self) {
        self.regions.clear();
    }

    /// Register a widget region in document cells relative to the page area.
    pub fn register(&mut self, dom_id: &str, rect: CellRect) -> ElementId {
        self.register_with_classes(dom_id, &[], rect)
    }

    pub fn register_with_classes(
        &mut self,
        dom_id: &str,
        classes: &[&str],
        rect: CellRect,
    ) -> ElementId {
        let id = match self.ids.get(dom_id) {
            Some(id) => *id,
            None => {
                let id = ElementId(self.next_id());
                self.ids.insert(dom_id.to_string(), id);
                id
            }
        };
        self.regions.insert(
            id,
            Region {
                dom_id: dom_id.to_string(),
                classes: classes.iter().map(|c| c.to_string()).collect(),
                rect,
            },
        );
        id
    }

    pub fn scroll_rows(&self) -> u16 {
        self.scroll_rows
    }

    /// User-initiated scroll. Ignored while scrolling is locked.
    pub fn scroll_by(&mut self, delta: i32) {
        if !self.scroll_enabled {
            return;
        }
        let next = (i32::from(self.scroll_rows) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_rows = u16::try_from(next).unwrap_or(0);
    }

    /// Take the URL passed to the last `navigate`, switching the current path to it.
    ///
    /// The runtime draws the new screen and then reports `FlowEvent::PageLoaded`.
    pub fn take_navigation(&mut self) -> Option<String> {
        let url = self.pending_navigation.take()?;
        self.path = path_of(&url);
        self.scroll_rows = 0;
        self.regions.clear();
        Some(url)
    }

    /// Switch screens directly (user navigation, not driven by a tour).
    pub fn set_path(&mut self, path: &str) {
        self.path = path_of(path);
        self.scroll_rows = 0;
        self.regions.clear();
    }

    /// Visible on-screen cell rect of a region, clipped to the page area.
    pub fn screen_rect(&self, element: ElementId) -> Option<CellRect> {
        let region = self.regions.get(&element)?;
        let top = i32::from(region.rect.y) - i32::from(self.scroll_rows);
        let bottom = top + i32::from(region.rect.height);
        let visible_top = top.max(0);
        let visible_bottom = bottom.min(i32::from(self.area.height));
        if visible_bottom <= visible_top {
            return None;
        }
        let rect = CellRect::new(
            self.area.x.saturating_add(region.rect.x),
            self.area.y.saturating_add(u16::try_from(visible_top).ok()?),
            region.rect.width,
            u16::try_from(visible_bottom - visible_top).ok()?,
        );
        Some(rect.intersection(self.area))
    }

    /// Element under a mouse click that currently has a click listener.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ElementId> {
        let position = ratatui::layout::Position::new(column, row);
        self.listeners.values().find_map(|listener| match listener {
            Listener::Click(element) => self
                .screen_rect(*element)
                .filter(|rect| rect.contains(position))
                .map(|_| *element),
            Listener::Keyboard => None,
        })
    }

    /// Whether a keyboard listener is attached.
    pub fn keyboard_active(&self) -> bool {
        self.listeners
            .values()
            .any(|l| matches!(l, Listener::Keyboard))
    }

    pub fn focused_overlay(&self) -> Option<OverlayId> {
        self.focused_overlay
    }

    pub fn mounted_overlays(&self) -> usize {
        self.overlays.len()
    }
}

impl Page for TerminalPage {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            f64::from(self.area.width) * self.metrics.width_px,
            f64::from(self.area.height) * self.metrics.height_px,
        )
    }

    fn query(&self, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        self.regions
            .iter()
            .find(|(_, region)| match &selector {
                Selector::Id(name) => &region.dom_id == name,
                Selector::Class(name) => region.classes.iter().any(|c| c == name),
            })
            .map(|(id, _)| *id)
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let region = self.regions.get(&element)?;
        let CellMetrics {
            width_px,
            height_px,
        } = self.metrics;
        Some(Rect::new(
            f64::from(region.rect.x) * width_px,
            (f64::from(region.rect.y) - f64::from(self.scroll_rows)) * height_px,
            f64::from(region.rect.width) * width_px,
            f64::from(region.rect.height) * height_px,
        ))
    }

    fn scroll_into_view(&mut self, element: ElementId, margin: f64) {
        let Some(region) = self.regions.get(&element) else {
            return;
        };
        let top = region.rect.y;
        let bottom = region.rect.y.saturating_add(region.rect.height);
        let visible_bottom = self.scroll_rows.saturating_add(self.area.height);
        if top < self.scroll_rows || bottom > visible_bottom {
            let margin_rows = self.metrics.rows_for(margin);
            self.scroll_rows = top.saturating_sub(margin_rows);
        }
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.pending_navigation = Some(url.to_string());
    }

    fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    fn mount_overlay(&mut self, style: &OverlayStyle) -> OverlayId {
        let id = OverlayId(self.next_id());
        self.overlays.insert(id, style.clone());
        id
    }

    fn unmount_overlay(&mut self, overlay: OverlayId) {
        self.overlays.remove(&overlay);
        if self.focused_overlay == Some(overlay) {
            self.focused_overlay = None;
        }
    }

    fn focus_note(&mut self, overlay: OverlayId) {
        if self.overlays.contains_key(&overlay) {
            self.focused_overlay = Some(overlay);
        }
    }

    fn add_listener(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.listeners.insert(id, listener);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}
