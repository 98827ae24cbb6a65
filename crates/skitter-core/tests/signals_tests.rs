// Host-side tests for the page-wide signal bus.

use glam::Vec2;
use skitter_core::{ClickSubscriber, DistanceSubscriber, SignalBus};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ClickRecorder {
    totals: Vec<u64>,
}

impl ClickSubscriber for ClickRecorder {
    fn on_click_total(&mut self, total: u64) {
        self.totals.push(total);
    }
}

#[derive(Default)]
struct DistanceRecorder {
    totals: Vec<f64>,
}

impl DistanceSubscriber for DistanceRecorder {
    fn on_distance_total(&mut self, total: f64) {
        self.totals.push(total);
    }
}

/// Subscriber that logs (id, total) into a shared journal, for ordering checks.
struct OrderProbe {
    id: u8,
    journal: Rc<RefCell<Vec<(u8, u64)>>>,
}

impl ClickSubscriber for OrderProbe {
    fn on_click_total(&mut self, total: u64) {
        self.journal.borrow_mut().push((self.id, total));
    }
}

#[test]
fn n_clicks_yield_n_notifications_with_increasing_totals() {
    let mut bus = SignalBus::new();
    let rec = Rc::new(RefCell::new(ClickRecorder::default()));
    bus.subscribe_clicks(rec.clone());

    for _ in 0..7 {
        bus.bump_clicks();
    }

    assert_eq!(bus.clicks(), 7);
    let totals = &rec.borrow().totals;
    assert_eq!(totals.len(), 7);
    let mut prev = 0;
    for &t in totals {
        assert!(t > prev, "totals must be strictly increasing: {totals:?}");
        prev = t;
    }
    assert_eq!(*totals, (1..=7).collect::<Vec<_>>());
}

#[test]
fn click_fanout_preserves_subscription_order() {
    let mut bus = SignalBus::new();
    let journal = Rc::new(RefCell::new(Vec::new()));
    bus.subscribe_clicks(Rc::new(RefCell::new(OrderProbe {
        id: 0,
        journal: journal.clone(),
    })));
    bus.subscribe_clicks(Rc::new(RefCell::new(OrderProbe {
        id: 1,
        journal: journal.clone(),
    })));

    bus.bump_clicks();
    bus.bump_clicks();

    assert_eq!(*journal.borrow(), vec![(0, 1), (1, 1), (0, 2), (1, 2)]);
}

#[test]
fn first_pointer_move_contributes_nothing() {
    let mut bus = SignalBus::new();
    let rec = Rc::new(RefCell::new(DistanceRecorder::default()));
    bus.subscribe_distance(rec.clone());

    assert_eq!(bus.bump_pointer(Vec2::new(100.0, 200.0)), None);
    assert_eq!(bus.travel(), 0.0);
    assert!(rec.borrow().totals.is_empty());
}

#[test]
fn travel_sums_consecutive_euclidean_distances() {
    let mut bus = SignalBus::new();
    let rec = Rc::new(RefCell::new(DistanceRecorder::default()));
    bus.subscribe_distance(rec.clone());

    bus.bump_pointer(Vec2::new(0.0, 0.0));
    bus.bump_pointer(Vec2::new(3.0, 4.0)); // +5
    bus.bump_pointer(Vec2::new(3.0, 4.0)); // +0, still notifies
    bus.bump_pointer(Vec2::new(6.0, 8.0)); // +5

    assert!((bus.travel() - 10.0).abs() < 1e-9);
    let totals = &rec.borrow().totals;
    assert_eq!(totals.len(), 3);
    assert!((totals[0] - 5.0).abs() < 1e-9);
    assert!((totals[1] - 5.0).abs() < 1e-9);
    assert!((totals[2] - 10.0).abs() < 1e-9);
}

#[test]
fn travel_is_non_decreasing_over_arbitrary_paths() {
    let mut bus = SignalBus::new();
    let mut prev = 0.0;
    // zig-zag path; travel must never decrease even when the pointer backtracks
    for i in 0..50 {
        let x = ((i * 37) % 11) as f32 * 13.0;
        let y = ((i * 17) % 7) as f32 * -9.0;
        bus.bump_pointer(Vec2::new(x, y));
        assert!(
            bus.travel() >= prev,
            "travel decreased at step {i}: {} -> {}",
            prev,
            bus.travel()
        );
        prev = bus.travel();
    }
}
