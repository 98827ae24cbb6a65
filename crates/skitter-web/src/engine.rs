//! Bindings to the page-global GSAP animation engine and its Draggable
//! plugin, and the [`AnimationHost`] implementation over them. GSAP is the
//! opaque tween engine: commands are fire-and-forget and a new tween on an
//! element overrides any in-flight one.

use crate::dom;
use glam::Vec2;
use js_sys::{Object, Reflect};
use skitter_core::{AnimationHost, Ease, Prop, Rect, StaticProps, Tween};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(target: &web::Element, vars: &Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &web::Element, vars: &Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = getProperty)]
    fn gsap_get_property(target: &web::Element, property: &str) -> JsValue;

    #[wasm_bindgen(js_namespace = gsap, js_name = killTweensOf)]
    fn gsap_kill_tweens_of(target: &web::Element);

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = Draggable, js_name = create)]
    fn draggable_create(target: &web::Element, vars: &Object) -> JsValue;
}

/// Register the Draggable plugin once, when the page ships it.
pub fn register_draggable() {
    match Reflect::get(&js_sys::global(), &JsValue::from_str("Draggable")) {
        Ok(plugin) if !plugin.is_undefined() => gsap_register_plugin(&plugin),
        _ => log::warn!("[engine] Draggable plugin not found; drag options are inert"),
    }
}

fn ease_name(ease: Ease) -> &'static str {
    match ease {
        Ease::BounceOut => "bounce.out",
        Ease::PowerOut => "power2.out",
    }
}

fn prop_name(prop: Prop) -> &'static str {
    match prop {
        Prop::X => "x",
        Prop::Y => "y",
        Prop::Left => "left",
        Prop::Top => "top",
    }
}

fn set_num(vars: &Object, key: &str, value: f32) {
    let _ = Reflect::set(vars, &JsValue::from_str(key), &JsValue::from_f64(value.into()));
}

fn set_str(vars: &Object, key: &str, value: &str) {
    let _ = Reflect::set(vars, &JsValue::from_str(key), &JsValue::from_str(value));
}

/// One managed element seen through GSAP.
pub struct GsapHost {
    element: web::Element,
}

impl GsapHost {
    pub fn new(element: web::Element) -> Self {
        Self { element }
    }

    /// Pin the element so x/y/left/top animate relative to the viewport.
    /// Escape elements also freeze their pre-pin layout position, since the
    /// escape steps tween absolute left/top.
    pub fn pin_fixed(&self, keep_origin: Option<Vec2>) {
        let vars = Object::new();
        set_str(&vars, "position", "fixed");
        if let Some(origin) = keep_origin {
            set_num(&vars, "left", origin.x);
            set_num(&vars, "top", origin.y);
            set_num(&vars, "x", 0.0);
            set_num(&vars, "y", 0.0);
        }
        gsap_set(&self.element, &vars);
    }
}

impl AnimationHost for GsapHost {
    fn set_props(&self, props: &StaticProps) {
        let vars = Object::new();
        if let Some(x) = props.x {
            set_num(&vars, "x", x);
        }
        if let Some(y) = props.y {
            set_num(&vars, "y", y);
        }
        if let Some(left) = props.left {
            set_num(&vars, "left", left);
        }
        if let Some(top) = props.top {
            set_num(&vars, "top", top);
        }
        gsap_set(&self.element, &vars);
    }

    fn animate(&self, tween: &Tween) {
        let vars = Object::new();
        if let Some(y) = tween.y {
            set_num(&vars, "y", y);
        }
        if let Some(left) = tween.left {
            set_num(&vars, "left", left);
        }
        if let Some(top) = tween.top {
            set_num(&vars, "top", top);
        }
        if let Some(color) = &tween.background_color {
            set_str(&vars, "backgroundColor", color);
        }
        set_num(&vars, "duration", tween.duration);
        set_str(&vars, "ease", ease_name(tween.ease));
        gsap_to(&self.element, &vars);
    }

    fn animated_value(&self, prop: Prop) -> f32 {
        gsap_get_property(&self.element, prop_name(prop))
            .as_f64()
            .unwrap_or(0.0) as f32
    }

    fn cancel_animations(&self) {
        gsap_kill_tweens_of(&self.element);
    }

    fn bounding_rect(&self) -> Rect {
        dom::bounding_rect(&self.element)
    }

    fn viewport(&self) -> Vec2 {
        dom::viewport_size()
    }
}

/// Register GSAP drag handling on an element. Callbacks fire synchronously
/// relative to gesture events; the optional click callback receives taps that
/// never became drags.
pub fn make_draggable(
    element: &web::Element,
    on_press: impl FnMut() + 'static,
    on_drag_end: impl FnMut() + 'static,
    on_click: Option<Box<dyn FnMut()>>,
) {
    let vars = Object::new();
    set_str(&vars, "type", "x,y");

    let press = Closure::wrap(Box::new(on_press) as Box<dyn FnMut()>);
    let _ = Reflect::set(&vars, &JsValue::from_str("onPress"), press.as_ref());
    press.forget();

    let drag_end = Closure::wrap(Box::new(on_drag_end) as Box<dyn FnMut()>);
    let _ = Reflect::set(&vars, &JsValue::from_str("onDragEnd"), drag_end.as_ref());
    drag_end.forget();

    if let Some(on_click) = on_click {
        let click = Closure::wrap(on_click);
        let _ = Reflect::set(&vars, &JsValue::from_str("onClick"), click.as_ref());
        click.forget();
    }

    let _ = draggable_create(element, &vars);
}
