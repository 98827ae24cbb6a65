//! Per-element trigger state machines.
//!
//! A controller combines one activation mode with the element's mutable
//! state and turns satisfied conditions into animation commands. Fall-capable
//! modes are terminal: once fallen, every entry point is a no-op. The
//! proximity mode never falls and keeps escaping for the whole session.

use crate::config::{ActivationMode, ElementConfig};
use crate::constants::ESCAPE_PADDING;
use crate::geometry::{self, Rect};
use crate::host::{AnimationHost, Ease, Prop, Scheduler, StaticProps, TimerHandle, Tween};
use crate::kinematics;
use crate::signals::{ClickSubscriber, DistanceSubscriber};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Mutable state owned exclusively by one controller.
#[derive(Default)]
struct ElementState {
    /// Terminal; never resets, not even across drags.
    has_fallen: bool,
    /// Only meaningful in self-click mode.
    local_clicks: u32,
    /// Only meaningful in proximity mode; gates escape evaluation.
    activated: bool,
    /// Pending delayed activation. Dropping it cancels the timer.
    pending_activation: Option<TimerHandle>,
}

pub struct TriggerController {
    config: ElementConfig,
    state: ElementState,
    /// Original resting offsets, captured once before the element is pinned.
    initial_top: f32,
    element_height: f32,
    host: Box<dyn AnimationHost>,
}

impl TriggerController {
    /// `initial` is the element's layout rectangle before any animation
    /// touched it; a missing rectangle (element not laid out yet) comes in as
    /// all zeros and simply lands the element at the viewport bottom.
    pub fn new(config: ElementConfig, initial: Rect, host: Box<dyn AnimationHost>) -> Self {
        Self {
            config,
            state: ElementState::default(),
            initial_top: initial.top,
            element_height: initial.height,
            host,
        }
    }

    pub fn config(&self) -> &ElementConfig {
        &self.config
    }

    pub fn has_fallen(&self) -> bool {
        self.state.has_fallen
    }

    pub fn is_activated(&self) -> bool {
        self.state.activated
    }

    pub fn local_clicks(&self) -> u32 {
        self.state.local_clicks
    }

    /// Direct click on the element (self-click mode only).
    pub fn handle_self_click(&mut self) {
        let ActivationMode::SelfClick { required_clicks } = self.config.mode else {
            return;
        };
        if self.state.has_fallen {
            return;
        }
        self.state.local_clicks += 1;
        if self.state.local_clicks >= required_clicks {
            self.fire_fall();
        }
    }

    /// Raw page-wide pointer move (proximity mode only; not routed through
    /// the signal bus).
    pub fn handle_pointer_move(&mut self, pointer: Vec2) {
        let ActivationMode::Proximity {
            radius,
            escape_duration,
            ..
        } = self.config.mode
        else {
            return;
        };
        if !self.state.activated {
            return;
        }
        let rect = self.host.bounding_rect();
        let Some(offset) = geometry::escape_offset(pointer, rect.center(), radius, ESCAPE_PADDING)
        else {
            return;
        };
        let target =
            geometry::clamp_to_viewport(rect.origin() + offset, rect.size(), self.host.viewport());
        self.host.animate(&Tween {
            y: None,
            left: Some(target.x),
            top: Some(target.y),
            background_color: None,
            duration: escape_duration,
            ease: Ease::PowerOut,
        });
    }

    /// Pointer entered the element's own region (proximity mode only).
    /// With a configured delay the activation is scheduled; the pending timer
    /// is owned by the controller and cancelled by [`pointer_leave`] or
    /// replaced by a later enter.
    ///
    /// [`pointer_leave`]: TriggerController::pointer_leave
    pub fn pointer_enter(ctrl: &Rc<RefCell<Self>>, scheduler: &dyn Scheduler) {
        let delay = {
            let c = ctrl.borrow();
            let ActivationMode::Proximity {
                activation_delay, ..
            } = c.config.mode
            else {
                return;
            };
            if c.state.activated {
                return;
            }
            activation_delay
        };
        if delay <= 0.0 {
            ctrl.borrow_mut().state.activated = true;
            return;
        }
        let weak = Rc::downgrade(ctrl);
        let handle = scheduler.delay(
            delay,
            Box::new(move || {
                if let Some(ctrl) = weak.upgrade() {
                    ctrl.borrow_mut().complete_activation();
                }
            }),
        );
        ctrl.borrow_mut().state.pending_activation = Some(handle);
    }

    /// Pointer left the element before a pending activation elapsed: cancel
    /// the timer. Once activated the controller stays activated, so a leave
    /// after activation is a no-op.
    pub fn pointer_leave(&mut self) {
        if !self.state.activated {
            self.state.pending_activation = None;
        }
    }

    fn complete_activation(&mut self) {
        log::info!("[escape] hover delay elapsed; element is live");
        self.state.activated = true;
        // The timer already fired; disarm before dropping the handle.
        if let Some(handle) = self.state.pending_activation.as_mut() {
            handle.disarm();
        }
        self.state.pending_activation = None;
    }

    /// Drag gesture started: freeze any in-flight tween at its current value.
    pub fn handle_drag_press(&mut self) {
        self.host.cancel_animations();
    }

    /// Drag gesture ended. A fallen element settles back to the floor line
    /// from wherever it was released; `has_fallen` is not reset, the landing
    /// recomputation is what produces the renewed fall.
    pub fn handle_drag_end(&mut self) {
        if self.state.has_fallen {
            self.drop_to_floor();
        }
    }

    /// Reset to the origin and fall. Marks the controller fallen at fire
    /// time so repeated trigger conditions issue no further commands.
    fn fire_fall(&mut self) {
        self.host.set_props(&StaticProps {
            x: Some(0.0),
            y: Some(0.0),
            ..Default::default()
        });
        self.state.has_fallen = true;
        self.drop_to_floor();
    }

    fn drop_to_floor(&self) {
        let viewport = self.host.viewport();
        let target_y = kinematics::resting_y(viewport.y, self.initial_top, self.element_height);
        let current_y = self.host.animated_value(Prop::Y);
        let duration = kinematics::fall_duration(current_y, target_y);
        log::info!("[drop] falling to y={target_y:.1} over {duration:.2}s");
        self.host.animate(&Tween {
            y: Some(target_y),
            left: None,
            top: None,
            background_color: self.config.drop_color.clone(),
            duration,
            ease: Ease::BounceOut,
        });
    }
}

impl ClickSubscriber for TriggerController {
    fn on_click_total(&mut self, total: u64) {
        let ActivationMode::PageClick { required_clicks } = self.config.mode else {
            return;
        };
        if !self.state.has_fallen && total >= u64::from(required_clicks) {
            self.fire_fall();
        }
    }
}

impl DistanceSubscriber for TriggerController {
    fn on_distance_total(&mut self, total: f64) {
        let ActivationMode::PageDistance { required_distance } = self.config.mode else {
            return;
        };
        if !self.state.has_fallen && total >= required_distance {
            self.fire_fall();
        }
    }
}
