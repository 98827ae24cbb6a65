//! Page bootstrap: find marked elements, build their configs and
//! controllers, and wire DOM events to the signal bus and the controllers.

use crate::dom;
use crate::engine::{self, GsapHost};
use crate::schedule::DomScheduler;
use glam::Vec2;
use skitter_core::{
    ActivationMode, ElementConfig, Marker, RawOptions, SignalBus, TriggerController,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const MARKER_SELECTOR: &str = ".drop-animation, .escape-animation, .mousemove-drop-animation";

/// Run the bootstrap now, or defer it until the DOM is parsed.
pub fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = bootstrap() {
                log::error!("bootstrap error: {:?}", e);
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("DOMContentLoaded listener failed: {:?}", e))?;
        closure.forget();
        return Ok(());
    }
    bootstrap()
}

fn bootstrap() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    engine::register_draggable();

    let bus = Rc::new(RefCell::new(SignalBus::new()));
    let scheduler = Rc::new(DomScheduler);
    // Proximity controllers consume raw pointer moves, not bus totals.
    let mut proximity: Vec<Rc<RefCell<TriggerController>>> = Vec::new();

    let nodes = document
        .query_selector_all(MARKER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("marker query failed: {:?}", e))?;
    let mut managed = 0usize;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<web::Element>() else {
            continue;
        };
        match attach(element, &bus, &scheduler, &mut proximity) {
            Ok(()) => managed += 1,
            Err(e) => log::warn!("[registry] skipping element: {e}"),
        }
    }
    log::info!("[registry] managing {managed} elements");

    wire_global_listeners(&document, bus, proximity);
    Ok(())
}

fn markers_of(element: &web::Element) -> Vec<Marker> {
    let classes = element.class_list();
    let mut markers = Vec::new();
    if classes.contains("drop-animation") {
        markers.push(Marker::Drop);
    }
    if classes.contains("escape-animation") {
        markers.push(Marker::Escape);
    }
    if classes.contains("mousemove-drop-animation") {
        markers.push(Marker::MouseMoveDrop);
    }
    markers
}

fn read_raw(element: &web::Element) -> RawOptions {
    RawOptions {
        drop_clicks: element.get_attribute("data-drop-clicks"),
        drop_global: element.has_attribute("data-drop-global"),
        drop_draggable: element.has_attribute("data-drop-draggable"),
        drop_color: element.get_attribute("data-drop-color"),
        escape_distance: element.get_attribute("data-escape-distance"),
        escape_speed: element.get_attribute("data-escape-speed"),
        escape_delay: element.get_attribute("data-escape-delay"),
        mousemove_distance: element.get_attribute("data-mousemove-distance"),
    }
}

/// Build the controller for one marked element and wire its listeners.
fn attach(
    element: web::Element,
    bus: &Rc<RefCell<SignalBus>>,
    scheduler: &Rc<DomScheduler>,
    proximity: &mut Vec<Rc<RefCell<TriggerController>>>,
) -> anyhow::Result<()> {
    let markers = markers_of(&element);
    let raw = read_raw(&element);
    let config = ElementConfig::from_markers(&markers, &raw)?;

    // Measure before pinning; position:fixed changes layout.
    let initial = dom::bounding_rect(&element);
    let host = GsapHost::new(element.clone());
    match &config.mode {
        ActivationMode::Proximity { .. } => host.pin_fixed(Some(initial.origin())),
        _ => host.pin_fixed(None),
    }

    let draggable = config.draggable;
    let mode = config.mode.clone();
    let ctrl = Rc::new(RefCell::new(TriggerController::new(
        config,
        initial,
        Box::new(host),
    )));

    match mode {
        ActivationMode::SelfClick { .. } => {
            if draggable {
                // drag takes over click delivery for the element
                let press_c = ctrl.clone();
                let end_c = ctrl.clone();
                let click_c = ctrl.clone();
                engine::make_draggable(
                    &element,
                    move || press_c.borrow_mut().handle_drag_press(),
                    move || end_c.borrow_mut().handle_drag_end(),
                    Some(Box::new(move || click_c.borrow_mut().handle_self_click())),
                );
            } else {
                let click_c = ctrl.clone();
                dom::add_mouse_listener(element.as_ref(), "click", move |_| {
                    click_c.borrow_mut().handle_self_click();
                });
            }
        }
        ActivationMode::PageClick { .. } => {
            bus.borrow_mut().subscribe_clicks(ctrl.clone());
            wire_drag(&element, &ctrl, draggable);
        }
        ActivationMode::PageDistance { .. } => {
            bus.borrow_mut().subscribe_distance(ctrl.clone());
            wire_drag(&element, &ctrl, draggable);
        }
        ActivationMode::Proximity { .. } => {
            let enter_c = ctrl.clone();
            let sched = scheduler.clone();
            dom::add_mouse_listener(element.as_ref(), "mouseenter", move |_| {
                TriggerController::pointer_enter(&enter_c, sched.as_ref());
            });
            let leave_c = ctrl.clone();
            dom::add_mouse_listener(element.as_ref(), "mouseleave", move |_| {
                leave_c.borrow_mut().pointer_leave();
            });
            proximity.push(ctrl);
        }
    }
    Ok(())
}

fn wire_drag(element: &web::Element, ctrl: &Rc<RefCell<TriggerController>>, draggable: bool) {
    if !draggable {
        return;
    }
    let press_c = ctrl.clone();
    let end_c = ctrl.clone();
    engine::make_draggable(
        element,
        move || press_c.borrow_mut().handle_drag_press(),
        move || end_c.borrow_mut().handle_drag_end(),
        None,
    );
}

/// One document-level click listener and one mousemove listener feed the
/// bus; the mousemove listener also forwards raw positions to the proximity
/// controllers. Fan-out completes before the handler returns.
fn wire_global_listeners(
    document: &web::Document,
    bus: Rc<RefCell<SignalBus>>,
    proximity: Vec<Rc<RefCell<TriggerController>>>,
) {
    let bus_click = bus.clone();
    dom::add_mouse_listener(document.as_ref(), "click", move |_| {
        bus_click.borrow_mut().bump_clicks();
    });

    dom::add_mouse_listener(document.as_ref(), "mousemove", move |ev| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        bus.borrow_mut().bump_pointer(pos);
        for ctrl in &proximity {
            ctrl.borrow_mut().handle_pointer_move(pos);
        }
    });
}
