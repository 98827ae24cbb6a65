#![cfg(target_arch = "wasm32")]

mod dom;
mod engine;
mod registry;
mod schedule;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skitter-web starting");

    if let Err(e) = registry::init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
