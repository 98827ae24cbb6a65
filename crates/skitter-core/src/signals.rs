//! Page-wide input signal aggregation.
//!
//! Two independent signals are tracked for the lifetime of the page session:
//! a click counter and the cumulative Euclidean distance the pointer has
//! travelled. Both fan out synchronously to every subscriber, in subscription
//! order, before the originating event handler returns. Subscriptions are
//! permanent; there is no unsubscribe.

use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the new click total after every page-wide click.
pub trait ClickSubscriber {
    fn on_click_total(&mut self, total: u64);
}

/// Receives the new cumulative travel distance after every pointer move
/// (except the very first, which has no prior position to measure from).
pub trait DistanceSubscriber {
    fn on_distance_total(&mut self, total: f64);
}

#[derive(Default)]
pub struct SignalBus {
    clicks: u64,
    travel: f64,
    last_pointer: Option<Vec2>,
    click_subs: SmallVec<[Rc<RefCell<dyn ClickSubscriber>>; 4]>,
    distance_subs: SmallVec<[Rc<RefCell<dyn DistanceSubscriber>>; 4]>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current click total. Strictly non-decreasing for the session.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Current cumulative pointer travel in px. Non-decreasing.
    pub fn travel(&self) -> f64 {
        self.travel
    }

    pub fn subscribe_clicks(&mut self, sub: Rc<RefCell<dyn ClickSubscriber>>) {
        self.click_subs.push(sub);
    }

    pub fn subscribe_distance(&mut self, sub: Rc<RefCell<dyn DistanceSubscriber>>) {
        self.distance_subs.push(sub);
    }

    /// Record one page-wide click and notify every click subscriber with the
    /// new total. Returns the new total.
    pub fn bump_clicks(&mut self) -> u64 {
        self.clicks += 1;
        let total = self.clicks;
        for sub in &self.click_subs {
            sub.borrow_mut().on_click_total(total);
        }
        total
    }

    /// Record a pointer position. When a previous position exists, the
    /// Euclidean distance to it is added to the travel total and every
    /// distance subscriber is notified; the first move only seeds the stored
    /// position and returns `None`. The stored position is updated either way.
    pub fn bump_pointer(&mut self, position: Vec2) -> Option<f64> {
        let total = self.last_pointer.map(|prev| {
            self.travel += f64::from(position.distance(prev));
            self.travel
        });
        self.last_pointer = Some(position);
        if let Some(total) = total {
            for sub in &self.distance_subs {
                sub.borrow_mut().on_distance_total(total);
            }
        }
        total
    }
}
