//! Host page abstraction the tour runs over.
//!
//! Responsibilities:
//! - Define the `Page` trait: element lookup and geometry, scrolling, navigation,
//!   scroll locking, overlay mounting, and listener subscriptions.
//! - Define the opaque handles (`ElementId`, `ListenerId`, `OverlayId`).
//! - Provide selector parsing and URL path comparison shared by all hosts.
//!
//! Does NOT handle:
//! - Dispatching input to a flow (hosts call `FlowManager::handle_event`).
//! - Drawing the overlay (see `ui`).
//!
//! Invariants:
//! - `bounding_rect` reports viewport coordinates (already offset by scroll).
//! - A `ListenerId` is live from `add_listener` until `remove_listener`;
//!   removing an unknown or already-removed id returns `false`.

mod memory;
mod selector;
mod terminal;

pub use memory::MemoryPage;
pub use selector::Selector;
pub use terminal::{CellMetrics, TerminalPage};

use crate::geometry::{Rect, Viewport};
use crate::pointer::OverlayStyle;

/// Handle to an element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Handle to a registered listener subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle to a mounted pointer overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// What a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Clicks on one element.
    Click(ElementId),
    /// Page-wide key presses.
    Keyboard,
}

/// The live document a tour is driven over.
pub trait Page {
    /// Current visible area.
    fn viewport(&self) -> Viewport;

    /// Resolve a selector to the first matching element.
    fn query(&self, selector: &str) -> Option<ElementId>;

    /// Bounding box of an element in viewport coordinates, or `None` if it is gone.
    fn bounding_rect(&self, element: ElementId) -> Option<Rect>;

    /// Scroll so that `element` is visible, keeping `margin` pixels around it.
    fn scroll_into_view(&mut self, element: ElementId, margin: f64);

    /// Path of the page currently shown (e.g. `/settings`).
    fn current_path(&self) -> String;

    /// Begin loading another page. Hosts report completion with `FlowEvent::PageLoaded`.
    fn navigate(&mut self, url: &str);

    /// Whether the user can scroll the page.
    fn scroll_enabled(&self) -> bool;

    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Attach a pointer overlay above all page content.
    fn mount_overlay(&mut self, style: &OverlayStyle) -> OverlayId;

    fn unmount_overlay(&mut self, overlay: OverlayId);

    /// Move keyboard focus to the overlay's note.
    fn focus_note(&mut self, overlay: OverlayId);

    fn add_listener(&mut self, listener: Listener) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// Extract the path component of a URL or path-like string.
///
/// Absolute URLs yield their path; relative references are resolved against
/// the site root. Query strings and fragments are dropped.
pub fn path_of(url: &str) -> String {
    let base = url::Url::parse("http://localhost/").ok();
    let resolved = url::Url::parse(url)
        .ok()
        .or_else(|| base.and_then(|b| b.join(url).ok()));

    match resolved {
        Some(parsed) => parsed.path().to_string(),
        None => url.to_string(),
    }
}

/// Whether `url` points at the page whose path is `current_path`.
pub fn is_same_page(url: &str, current_path: &str) -> bool {
    path_of(url) == path_of(current_path)
}
