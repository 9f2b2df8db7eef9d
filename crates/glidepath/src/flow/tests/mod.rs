//! Sequencer tests over the in-memory page and a manual clock.


use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use glidepath_config::{FlowConfig, PointerConfig, Timing};

use super::{FlowEvent, FlowManager, Step};
use crate::geometry::{Point, Rect, Viewport};
use crate::page::{ElementId, MemoryPage, Page};
use crate::scheduler::ManualScheduler;

struct Fixture {
    page: MemoryPage,
    clock: Arc<ManualScheduler>,
    flow: FlowManager,
}

impl Fixture {
    fn new(timing: Timing, flow_config: FlowConfig) -> Self {
        let clock = ManualScheduler::new();
        let flow = FlowManager::new(PointerConfig::default(), flow_config, timing, clock.clone());
        Self {
            page: MemoryPage::new(Viewport::new(800.0, 600.0)),
            clock,
            flow,
        }
    }

    fn immediate() -> Self {
        Self::new(Timing::immediate(), FlowConfig::default())
    }

    fn add(&mut self, id: &str, x: f64, y: f64) -> ElementId {
        self.page.add_element(id, Rect::new(x, y, 80.0, 30.0))
    }

    fn start(&mut self, steps: Vec<Step>) -> bool {
        self.flow.start(&mut self.page, steps)
    }

    fn event(&mut self, event: FlowEvent) -> bool {
        self.flow.handle_event(&mut self.page, event)
    }

    fn key(&mut self, code: KeyCode) -> bool {
        self.event(FlowEvent::Key(code))
    }

    fn click(&mut self, element: ElementId) -> bool {
        self.event(FlowEvent::Click(element))
    }

    /// Let any glide in flight finish.
    fn finish_animation(&mut self) {
        self.clock.advance(Duration::from_millis(400));
        self.flow.tick(&mut self.page);
    }

    fn pointer_position(&self) -> Point {
        self.flow.pointer().map(|p| p.position()).unwrap_or_default()
    }

    fn move_requests(&self) -> u64 {
        self.flow.pointer().map(|p| p.move_requests()).unwrap_or(0)
    }
}

fn steps(ids: &[&str]) -> Vec<Step> {
    ids.iter()
        .map(|id| Step::new(format!("#{id}"), id.to_uppercase()))
        .collect()
}

#[test]
fn test_one_move_request_per_present_step_in_order() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    let b = fx.add("b", 300.0, 200.0);
    let c = fx.add("c", 500.0, 300.0);

    assert!(fx.start(steps(&["a", "missing", "b", "c"])));
    let mut visited = Vec::new();
    for expected in [a, b, c] {
        assert_eq!(fx.flow.current_target(), Some(expected));
        visited.push(expected);
        fx.finish_animation();
        assert!(fx.click(expected));
    }

    assert_eq!(visited, vec![a, b, c]);
    assert_eq!(fx.move_requests(), 3);
    assert!(!fx.flow.is_running());
}

#[test]
fn test_two_step_flow_end_to_end() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    let b = fx.add("b", 400.0, 300.0);

    assert!(fx.start(steps(&["a", "b"])));
    assert!(!fx.page.scroll_enabled());
    assert_eq!(fx.flow.current_target(), Some(a));
    fx.finish_animation();

    assert!(fx.click(a));
    assert_eq!(fx.flow.current_target(), Some(b));
    assert_eq!(fx.flow.current_index(), 1);
    assert_eq!(
        fx.flow.pointer().and_then(|p| p.destination()),
        Some(Point::new(464.0, 314.0))
    );
    fx.finish_animation();

    assert!(fx.click(b));
    assert!(!fx.flow.is_running());
    assert!(!fx.flow.pointer().unwrap().is_visible());
    assert!(fx.page.scroll_enabled());
    assert_eq!(fx.page.listener_count(), 0);
}

#[test]
fn test_missing_first_step_goes_straight_to_next() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);

    assert!(fx.start(steps(&["missing", "a"])));
    assert_eq!(fx.flow.current_index(), 1);
    assert_eq!(fx.flow.current_target(), Some(a));
    assert_eq!(fx.move_requests(), 1);
}

#[test]
fn test_all_steps_missing_completes_immediately() {
    let mut fx = Fixture::immediate();
    assert!(fx.start(steps(&["x", "y"])));
    assert!(!fx.flow.is_running());
    assert_eq!(fx.move_requests(), 0);
    assert!(fx.page.scroll_enabled());
}

#[test]
fn test_invalid_step_lists_are_rejected_without_side_effects() {
    let mut fx = Fixture::immediate();
    assert!(!fx.start(Vec::new()));
    assert!(!fx.start(vec![Step::new("", "blank")]));

    assert!(!fx.flow.is_running());
    assert!(fx.flow.pointer().is_none());
    assert!(fx.page.scroll_enabled());
    assert_eq!(fx.page.listener_count(), 0);
}

#[test]
fn test_set_initial_position_creates_pointer_and_holds_position() {
    let mut fx = Fixture::immediate();
    fx.flow.set_initial_position(&mut fx.page, 42.0, 7.0);
    fx.flow.tick(&mut fx.page);

    assert_eq!(fx.page.mounted_overlays(), 1);
    assert_eq!(fx.pointer_position(), Point::new(42.0, 7.0));
}

#[test]
fn test_restart_resets_index_and_keeps_single_keyboard_listener() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    fx.add("b", 300.0, 200.0);

    for _ in 0..3 {
        assert!(fx.start(steps(&["a", "b"])));
        fx.finish_animation();
        fx.click(a);
        assert_eq!(fx.flow.current_index(), 1);
        fx.flow.stop(&mut fx.page);
    }

    assert!(fx.start(steps(&["b", "a"])));
    assert_eq!(fx.flow.current_index(), 0);
    assert_eq!(fx.page.keyboard_listeners(), 1);
    assert_eq!(fx.page.listener_count(), 2);
    assert_eq!(fx.page.mounted_overlays(), 1);
}

#[test]
fn test_start_while_running_replaces_flow() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    let b = fx.add("b", 300.0, 200.0);

    assert!(fx.start(steps(&["a"])));
    assert!(fx.start(steps(&["b"])));

    assert_eq!(fx.flow.current_target(), Some(b));
    assert_eq!(fx.page.click_listeners(a), 0);
    assert_eq!(fx.page.click_listeners(b), 1);
    assert_eq!(fx.page.keyboard_listeners(), 1);
    assert!(!fx.page.scroll_enabled());
}

#[test]
fn test_stop_is_idempotent_and_restores_prior_scroll_state() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    fx.page.set_scroll_enabled(false);

    assert!(fx.start(steps(&["a"])));
    fx.flow.stop(&mut fx.page);
    fx.flow.stop(&mut fx.page);

    assert!(!fx.page.scroll_enabled());
    assert_eq!(fx.page.listener_count(), 0);
    assert!(!fx.click(a));
}

#[test]
fn test_keyboard_navigation() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    let b = fx.add("b", 300.0, 200.0);
    fx.add("c", 500.0, 300.0);
    assert!(fx.start(steps(&["a", "b", "c"])));

    assert!(fx.key(KeyCode::Left));
    assert_eq!(fx.flow.current_index(), 0);

    fx.finish_animation();
    assert!(fx.key(KeyCode::Right));
    assert_eq!(fx.flow.current_target(), Some(b));
    fx.finish_animation();
    assert!(fx.key(KeyCode::Enter));
    assert_eq!(fx.flow.current_index(), 2);
    fx.finish_animation();
    assert!(fx.key(KeyCode::Left));
    assert_eq!(fx.flow.current_target(), Some(b));

    assert!(!fx.key(KeyCode::Char('x')));
    assert!(fx.key(KeyCode::Esc));
    assert!(!fx.flow.is_running());
    assert!(!fx.key(KeyCode::Right));
    assert_eq!(fx.page.click_listeners(a), 0);
}

#[test]
fn test_keyboard_navigation_disabled() {
    let mut fx = Fixture::new(
        Timing::immediate(),
        FlowConfig {
            keyboard_navigation: false,
        },
    );
    let a = fx.add("a", 100.0, 100.0);
    fx.add("b", 300.0, 200.0);

    assert!(fx.start(steps(&["a", "b"])));
    assert!(!fx.flow.keyboard_attached());
    assert_eq!(fx.page.keyboard_listeners(), 0);
    assert!(!fx.key(KeyCode::Right));
    assert_eq!(fx.flow.current_target(), Some(a));
}

#[test]
fn test_click_on_other_element_is_ignored() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    let b = fx.add("b", 300.0, 200.0);

    assert!(fx.start(steps(&["a", "b"])));
    assert!(!fx.click(b));
    assert_eq!(fx.flow.current_target(), Some(a));
}

#[test]
fn test_click_listener_is_one_shot() {
    let mut fx = Fixture::immediate();
    let a = fx.add("a", 100.0, 100.0);
    fx.add("b", 300.0, 200.0);

    assert!(fx.start(steps(&["a", "b"])));
    assert_eq!(fx.page.click_listeners(a), 1);
    fx.finish_animation();
    assert!(fx.click(a));
    assert_eq!(fx.page.click_listeners(a), 0);
    assert!(!fx.click(a));
    assert_eq!(fx.flow.current_index(), 1);
}

#[test]
fn test_blank_note_hides_bubble() {
    let mut fx = Fixture::immediate();
    fx.add("a", 100.0, 100.0);

    assert!(fx.start(vec![Step::new("#a", "   ")]));
    let pointer = fx.flow.pointer().unwrap();
    assert_eq!(pointer.note_text(), None);
    assert!(pointer.frame().unwrap().note.is_none());
}

#[test]
fn test_destroy_unmounts_pointer() {
    let mut fx = Fixture::immediate();
    fx.add("a", 100.0, 100.0);
    assert!(fx.start(steps(&["a"])));

    fx.flow.destroy(&mut fx.page);
    assert!(fx.flow.pointer().is_none());
    assert_eq!(fx.page.mounted_overlays(), 0);
    assert_eq!(fx.page.listener_count(), 0);
    assert!(fx.page.scroll_enabled());

    assert!(fx.start(steps(&["a"])));
    assert_eq!(fx.page.mounted_overlays(), 1);
}

#[test]
fn test_class_selector_targets_first_match() {
    let mut fx = Fixture::immediate();
    let first = fx
        .page
        .add_element_with_classes("one", &["cta"], Rect::new(10.0, 10.0, 40.0, 20.0));
    fx.page
        .add_element_with_classes("two", &["cta"], Rect::new(200.0, 10.0, 40.0, 20.0));

    assert!(fx.start(vec![Step::new(".cta", "Try this")]));
    assert_eq!(fx.flow.current_target(), Some(first));
}
