//! End-to-end tours over the public API: file loading, the onboarding handle,
//! and the in-memory page host.

mod common;

use std::time::Duration;

use common::tour_file;
use glidepath::flow::{FlowEvent, FlowManager, Tour};
use glidepath::geometry::{Point, Rect, Viewport};
use glidepath::page::{MemoryPage, Page};
use glidepath::{ManualScheduler, OnboardingHandle, TriggerEvent};

const TOUR_YAML: &str = r##"
name: first-run
steps:
  - element: "#search"
    note: Type to search
  - element: "#ghost"
    note: Never shown
  - element: .profile
    note: Your account
"##;

fn page() -> MemoryPage {
    let mut page = MemoryPage::new(Viewport::new(800.0, 600.0));
    page.add_element("search", Rect::new(100.0, 100.0, 80.0, 30.0));
    page.add_element_with_classes("avatar", &["profile"], Rect::new(600.0, 40.0, 40.0, 40.0));
    page
}

fn pointer_position(handle: &OnboardingHandle) -> Option<Point> {
    handle
        .manager()
        .and_then(FlowManager::pointer)
        .map(|p| p.position())
}

#[test]
fn test_yaml_tour_runs_to_completion() {
    let file = tour_file(".yaml", TOUR_YAML);
    let tour = Tour::load(file.path()).unwrap();
    assert_eq!(tour.name.as_deref(), Some("first-run"));
    assert_eq!(tour.len(), 3);

    let mut page = page();
    let clock = ManualScheduler::new();
    let mut handle = OnboardingHandle::new(clock.clone());
    assert!(handle.start_onboarding(
        &mut page,
        tour.into_steps(),
        None,
        Some(TriggerEvent { x: 50.0, y: 50.0 }),
        None,
    ));

    assert_eq!(pointer_position(&handle), Some(Point::new(34.0, 34.0)));
    assert!(!page.scroll_enabled());
    assert_eq!(page.keyboard_listeners(), 1);

    clock.advance(Duration::from_millis(400));
    handle.tick(&mut page);
    let pointer = handle.manager().and_then(FlowManager::pointer).unwrap();
    assert!(!pointer.is_animating());
    assert!(pointer.note_revealed());
    assert_eq!(pointer.note_text(), Some("Type to search"));

    let search = page.query("#search").unwrap();
    assert!(handle.handle_event(&mut page, FlowEvent::Click(search)));
    // "#ghost" is skipped; the class selector step is next.
    assert_eq!(handle.manager().map(FlowManager::current_index), Some(2));

    clock.advance(Duration::from_millis(400));
    handle.tick(&mut page);
    let avatar = page.query(".profile").unwrap();
    assert!(handle.handle_event(&mut page, FlowEvent::Click(avatar)));

    assert!(!handle.is_running());
    assert!(page.scroll_enabled());
    assert_eq!(page.listener_count(), 0);
    assert_eq!(page.mounted_overlays(), 1);

    handle.destroy(&mut page);
    assert_eq!(page.mounted_overlays(), 0);
}

#[test]
fn test_escape_cancels_and_restart_reuses_pointer() {
    let file = tour_file(".yaml", TOUR_YAML);
    let steps = Tour::load(file.path()).unwrap().into_steps();

    let mut page = page();
    let clock = ManualScheduler::new();
    let mut handle = OnboardingHandle::new(clock.clone());
    handle.start_onboarding(&mut page, steps.clone(), None, None, None);

    assert!(handle.handle_event(&mut page, FlowEvent::Key(crossterm::event::KeyCode::Esc)));
    assert!(!handle.is_running());
    assert_eq!(page.listener_count(), 0);

    clock.advance(Duration::from_millis(400));
    handle.tick(&mut page);
    assert!(handle.start_onboarding(&mut page, steps, None, None, None));
    assert_eq!(page.mounted_overlays(), 1);
    assert_eq!(page.keyboard_listeners(), 1);
    assert_eq!(handle.manager().map(FlowManager::current_index), Some(0));
}
