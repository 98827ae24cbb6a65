//! Seams to the external collaborators: the animation/tween engine, DOM
//! measurement, and one-shot timers. Controllers only ever talk to these
//! traits, so they stay testable with recording fakes on the native host.

use crate::geometry::Rect;
use glam::Vec2;

/// Easing styles the behaviors use. Mapped to engine-specific names by the
/// host implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Bouncy settle at the end of a fall.
    BounceOut,
    /// Fast start, smooth stop for escape steps.
    PowerOut,
}

/// Animatable properties a controller may read back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    X,
    Y,
    Left,
    Top,
}

/// Immediate property assignment, no tween.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticProps {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub left: Option<f32>,
    pub top: Option<f32>,
}

/// One fire-and-forget tween command. Issuing a new tween on the same
/// element overrides any in-flight one (last writer wins on the host side).
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub y: Option<f32>,
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub background_color: Option<String>,
    pub duration: f32,
    pub ease: Ease,
}

/// Animation engine plus DOM measurement for one managed element.
pub trait AnimationHost {
    fn set_props(&self, props: &StaticProps);
    fn animate(&self, tween: &Tween);
    /// Current value of `prop`, reflecting any in-flight tween. Missing
    /// geometry reads as zero.
    fn animated_value(&self, prop: Prop) -> f32;
    /// Stop all in-flight tweens immediately, freezing at current values.
    fn cancel_animations(&self);
    /// Current bounding rectangle, re-read per call, never cached.
    fn bounding_rect(&self) -> Rect;
    /// Viewport dimensions in CSS px.
    fn viewport(&self) -> Vec2;
}

/// One-shot timer scheduling (the only asynchronous suspension point).
pub trait Scheduler {
    fn delay(&self, seconds: f32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owned, cancellable pending timer. Dropping the handle cancels the
/// callback, so every exit path that discards the handle releases the timer.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: Box<dyn FnOnce()>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    /// Handle for a timer that was never scheduled.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Forget the cancel action: the callback already fired.
    pub fn disarm(&mut self) {
        self.cancel = None;
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
