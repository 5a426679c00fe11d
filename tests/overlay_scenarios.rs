//! End-to-end overlay scenarios driven through the public runtime API.

use std::sync::Arc;
use std::time::Duration;

use storefront_search::app::{HitRegion, Key};
use storefront_search::domain::{Category, Product};
use storefront_search::timer::ManualClock;
use storefront_search::{Event, Navigator, OverlayRuntime, OverlayState, ProductId, Theme};

#[derive(Debug, Default)]
struct Visits(Vec<ProductId>);

impl Navigator for Visits {
    fn navigate_to_product(&mut self, id: &ProductId) {
        self.0.push(id.clone());
    }
}

type Runtime = OverlayRuntime<ManualClock, Visits>;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn small_catalog() -> Vec<Product> {
    vec![
        Product::new("a", "Smart Feeder Pro", Category::Feeders),
        Product::new("b", "Cool Toy", Category::Toys),
        Product::new("c", "Box", Category::Litter),
    ]
}

fn runtime_with(catalog: Vec<Product>) -> (Runtime, ManualClock) {
    let state = OverlayState::new(Arc::new(catalog), Theme::default()).with_latency(ms(150));
    let clock = ManualClock::new();
    (OverlayRuntime::new(state, clock.clone(), Visits::default()), clock)
}

fn result_ids(rt: &Runtime) -> Vec<String> {
    rt.state()
        .session()
        .map(|session| session.results().iter().map(|p| p.id.to_string()).collect())
        .unwrap_or_default()
}

fn selected(rt: &Runtime) -> Option<usize> {
    rt.state().session().and_then(|session| session.selected_index())
}

#[test]
fn test_type_navigate_and_commit() {
    let (mut rt, _) = runtime_with(small_catalog());

    rt.dispatch(&Event::OpenRequested).unwrap();
    assert!(rt.take_focus_request());

    rt.dispatch(&Event::QueryChanged("feed".into())).unwrap();
    assert_eq!(result_ids(&rt), vec!["a"]);

    rt.dispatch(&Event::QueryChanged("o".into())).unwrap();
    assert_eq!(result_ids(&rt), vec!["a", "b", "c"]);
    assert_eq!(selected(&rt), None);

    rt.dispatch(&Event::KeyPressed(Key::ArrowDown)).unwrap();
    rt.dispatch(&Event::KeyPressed(Key::ArrowDown)).unwrap();
    assert_eq!(selected(&rt), Some(1));

    rt.dispatch(&Event::KeyPressed(Key::Enter)).unwrap();
    assert_eq!(rt.navigator().0, vec![ProductId::from("b")]);
    assert!(!rt.state().is_open());
    assert_eq!(rt.pending_timers(), 0);

    rt.dispatch(&Event::OpenRequested).unwrap();
    let session = rt.state().session().unwrap();
    assert_eq!(session.raw_query(), "");
    assert!(session.results().is_empty());
    assert_eq!(session.selected_index(), None);
    assert!(!session.is_pending());
}

#[test]
fn test_latency_restarts_on_each_change() {
    let (mut rt, clock) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();

    rt.dispatch(&Event::QueryChanged("fe".into())).unwrap();
    assert!(rt.state().session().unwrap().is_pending());

    clock.advance(ms(100));
    assert!(!rt.poll_timers().unwrap());
    rt.dispatch(&Event::QueryChanged("feed".into())).unwrap();
    assert_eq!(rt.pending_timers(), 1);

    // The first timer would have fired here.
    clock.advance(ms(50));
    assert!(!rt.poll_timers().unwrap());
    assert!(rt.state().session().unwrap().is_pending());

    clock.advance(ms(100));
    assert!(rt.poll_timers().unwrap());
    assert!(!rt.state().session().unwrap().is_pending());
    assert_eq!(rt.pending_timers(), 0);

    clock.advance(ms(500));
    assert!(!rt.poll_timers().unwrap());
}

#[test]
fn test_results_are_bounded_and_selection_wraps() {
    let catalog: Vec<Product> = (0..10)
        .map(|i| Product::new(format!("cam-{i}"), format!("Pet Camera {i}"), Category::Cameras))
        .collect();
    let (mut rt, _) = runtime_with(catalog);
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("camera".into())).unwrap();

    let ids = result_ids(&rt);
    assert_eq!(ids.len(), 6);
    assert_eq!(ids.first().map(String::as_str), Some("cam-0"));
    assert_eq!(ids.last().map(String::as_str), Some("cam-5"));

    rt.dispatch(&Event::KeyPressed(Key::ArrowUp)).unwrap();
    assert_eq!(selected(&rt), Some(5));
    rt.dispatch(&Event::KeyPressed(Key::ArrowDown)).unwrap();
    assert_eq!(selected(&rt), Some(0));
}

#[test]
fn test_new_query_resets_selection() {
    let (mut rt, _) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("o".into())).unwrap();
    rt.dispatch(&Event::PointerEnteredResult(2)).unwrap();
    assert_eq!(selected(&rt), Some(2));

    rt.dispatch(&Event::QueryChanged("oo".into())).unwrap();
    assert_eq!(result_ids(&rt), vec!["b"]);
    assert_eq!(selected(&rt), None);
}

#[test]
fn test_enter_without_results_keeps_overlay_open() {
    let (mut rt, _) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("zzz".into())).unwrap();
    rt.dispatch(&Event::KeyPressed(Key::Enter)).unwrap();

    assert!(rt.state().is_open());
    assert!(rt.navigator().0.is_empty());

    let vm = rt.state().compute_viewmodel(24, 80).unwrap();
    let empty = vm.empty_state.unwrap();
    assert!(empty.message.contains("zzz"));
}

#[test]
fn test_pointer_regions() {
    let (mut rt, _) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("o".into())).unwrap();

    rt.dispatch(&Event::PointerDown(HitRegion::Input)).unwrap();
    rt.dispatch(&Event::PointerDown(HitRegion::Backdrop)).unwrap();
    rt.dispatch(&Event::PointerDown(HitRegion::ResultsPanel)).unwrap();
    assert!(rt.state().is_open());

    let vm = rt.state().compute_viewmodel(24, 80).unwrap();
    let row = vm.layout.result_rows[2];
    let region = vm.layout.hit_test(row.col, row.row);
    assert_eq!(region, HitRegion::Result(2));

    rt.dispatch(&Event::PointerDown(region)).unwrap();
    assert_eq!(rt.navigator().0, vec![ProductId::from("c")]);
    assert!(!rt.state().is_open());
}

#[test]
fn test_outside_interaction_dismisses() {
    let (mut rt, _) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("toy".into())).unwrap();

    rt.dispatch(&Event::PointerDown(HitRegion::Outside)).unwrap();
    assert!(!rt.state().is_open());
    assert_eq!(rt.pending_timers(), 0);
    assert!(rt.navigator().0.is_empty());

    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::OutsideInteraction).unwrap();
    assert!(!rt.state().is_open());
}

#[test]
fn test_blur_closes_only_empty_query() {
    let (mut rt, _) = runtime_with(small_catalog());
    rt.dispatch(&Event::OpenRequested).unwrap();
    rt.dispatch(&Event::QueryChanged("box".into())).unwrap();
    rt.dispatch(&Event::InputBlurred).unwrap();
    assert!(rt.state().is_open());

    rt.dispatch(&Event::QueryChanged("   ".into())).unwrap();
    rt.dispatch(&Event::InputBlurred).unwrap();
    assert!(!rt.state().is_open());
}

#[test]
fn test_events_while_closed_are_ignored() {
    let (mut rt, _) = runtime_with(small_catalog());
    for event in [
        Event::QueryChanged("feed".into()),
        Event::KeyPressed(Key::Enter),
        Event::CloseRequested,
        Event::ResultActivated(0),
    ] {
        assert!(!rt.dispatch(&event).unwrap());
    }
    assert!(!rt.state().is_open());
    assert!(rt.navigator().0.is_empty());
    assert_eq!(rt.pending_timers(), 0);
}
