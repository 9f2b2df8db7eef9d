//! Headless in-memory page.
//!
//! Responsibilities:
//! - Hold elements with document coordinates, optionally scoped to a page path.
//! - Track scroll offset, scroll lock, mounted overlays, live listeners, and
//!   navigation requests so embedders and tests can observe every side effect.
//!
//! Invariants:
//! - Elements scoped to another path are invisible to `query` and `bounding_rect`.
//! - `navigate` switches the current path immediately; the caller still reports
//!   `FlowEvent::PageLoaded` to resume a flow.

use std::collections::BTreeMap;

use super::{ElementId, Listener, ListenerId, OverlayId, Page, Selector, path_of};
use crate::geometry::{Point, Rect, Viewport};
use crate::pointer::OverlayStyle;

#[derive(Debug, Clone)]
struct MemoryElement {
    id: ElementId,
    dom_id: String,
    classes: Vec<String>,
    /// Document coordinates.
    rect: Rect,
    path: Option<String>,
}

/// In-memory `Page` implementation.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    viewport: Viewport,
    scroll: Point,
    path: String,
    scroll_enabled: bool,
    elements: Vec<MemoryElement>,
    overlays: BTreeMap<OverlayId, OverlayStyle>,
    focused_overlay: Option<OverlayId>,
    listeners: BTreeMap<ListenerId, Listener>,
    navigations: Vec<String>,
    next_id: u64,
}

impl MemoryPage {
    /// Create an empty page at `/` with scrolling enabled.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll: Point::default(),
            path: "/".to_string(),
            scroll_enabled: true,
            elements: Vec::new(),
            overlays: BTreeMap::new(),
            focused_overlay: None,
            listeners: BTreeMap::new(),
            navigations: Vec::new(),
            next_id: 1,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an element visible on every path. `rect` is in document coordinates.
    pub fn add_element(&mut self, dom_id: &str, rect: Rect) -> ElementId {
        self.insert(dom_id, rect, None, Vec::new())
    }

    /// Add an element that only exists while `path` is the current page.
    pub fn add_element_on(&mut self, path: &str, dom_id: &str, rect: Rect) -> ElementId {
        self.insert(dom_id, rect, Some(path_of(path)), Vec::new())
    }

    /// Add an element carrying CSS classes.
    pub fn add_element_with_classes(
        &mut self,
        dom_id: &str,
        classes: &[&str],
        rect: Rect,
    ) -> ElementId {
        let classes = classes.iter().map(|c| c.to_string()).collect();
        self.insert(dom_id, rect, None, classes)
    }

    fn insert(
        &mut self,
        dom_id: &str,
        rect: Rect,
        path: Option<String>,
        classes: Vec<String>,
    ) -> ElementId {
        let id = ElementId(self.next_id());
        self.elements.push(MemoryElement {
            id,
            dom_id: dom_id.to_string(),
            classes,
            rect,
            path,
        });
        id
    }

    /// Remove an element; returns whether it existed.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// Move an element to a new document position.
    pub fn move_element(&mut self, id: ElementId, rect: Rect) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            element.rect = rect;
        }
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path_of(path);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll
    }

    pub fn set_scroll_offset(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// URLs passed to `navigate`, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn mounted_overlays(&self) -> usize {
        self.overlays.len()
    }

    pub fn overlay_style(&self, id: OverlayId) -> Option<&OverlayStyle> {
        self.overlays.get(&id)
    }

    pub fn focused_overlay(&self) -> Option<OverlayId> {
        self.focused_overlay
    }

    /// Number of live keyboard listeners.
    pub fn keyboard_listeners(&self) -> usize {
        self.listeners
            .values()
            .filter(|l| matches!(l, Listener::Keyboard))
            .count()
    }

    /// Number of live click listeners on `element`.
    pub fn click_listeners(&self, element: ElementId) -> usize {
        self.listeners
            .values()
            .filter(|l| **l == Listener::Click(element))
            .count()
    }

    /// Total number of live listeners of any kind.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn visible(&self, element: &MemoryElement) -> bool {
        element.path.as_deref().is_none_or(|p| p == self.path)
    }

    fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements
            .iter()
            .find(|e| e.id == id && self.visible(e))
    }
}

impl Page for MemoryPage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn query(&self, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        self.elements
            .iter()
            .filter(|e| self.visible(e))
            .find(|e| match &selector {
                Selector::Id(name) => &e.dom_id == name,
                Selector::Class(name) => e.classes.iter().any(|c| c == name),
            })
            .map(|e| e.id)
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        self.element(element)
            .map(|e| e.rect.translate(-self.scroll.x, -self.scroll.y))
    }

    fn scroll_into_view(&mut self, element: ElementId, margin: f64) {
        let Some(rect) = self.element(element).map(|e| e.rect) else {
            return;
        };

        let view = rect.translate(-self.scroll.x, -self.scroll.y);
        if view.top() < 0.0 || view.bottom() > self.viewport.height {
            self.scroll.y = (rect.top() - margin).max(0.0);
        }
        if view.left() < 0.0 || view.right() > self.viewport.width {
            self.scroll.x = (rect.left() - margin).max(0.0);
        }
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
        self.path = path_of(url);
        self.scroll = Point::default();
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
