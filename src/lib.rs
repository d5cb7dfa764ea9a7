pub mod config;
pub mod constants;
pub mod core;

// Browser bindings; the round logic in `core` builds and tests on any host.
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod haptics;
#[cfg(target_arch = "wasm32")]
mod presentation;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dont-let-go starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    use crate::core::{InstantClock, Ports, RoundController};
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_sys as web;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let search = window.location().search().unwrap_or_default();
    let variant = config::resolve_variant(&search);
    log::info!("[config] variant={}", variant.name());

    let button = dom::element_by_id(&document, constants::BUTTON_ID)?;
    let presentation = presentation::DomPresentation::bind(&document)?;

    let target = timers::TimerTarget::default();
    let ports = Ports {
        presentation: Box::new(presentation),
        haptics: Box::new(haptics::NavigatorHaptics::detect()),
        clock: Box::new(InstantClock::new()),
        scheduler: Box::new(timers::WebScheduler::new(window.clone(), target.clone())),
        random: Box::new(rand::rngs::StdRng::from_entropy()),
    };
    let controller = Rc::new(RefCell::new(RoundController::new(variant, ports)));
    target.bind(&controller);

    events::wire_input_handlers(events::InputWiring {
        document,
        button,
        controller,
    });
    Ok(())
}
