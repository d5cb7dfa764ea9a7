use crate::constants::INTERSTITIAL_CLOSE_ID;
use crate::core::{ReleaseReason, RoundController};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub button: web::Element,
    pub controller: Rc<RefCell<RoundController>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    // Lifting anywhere, a cancelled pointer, or leaving the page all end the round.
    wire_release(&w, &w.document, "pointerup", ReleaseReason::PointerUp);
    wire_release(&w, &w.document, "pointercancel", ReleaseReason::PointerCancel);
    // pointerleave does not bubble, so it has to sit on the root element itself.
    match w.document.document_element() {
        Some(root) => wire_release(&w, &root, "pointerleave", ReleaseReason::PointerLeave),
        None => log::warn!("[input] no root element; pointerleave not wired"),
    }
    wire_interstitial_close(&w);
    suppress_context_menu();
}

fn wire_pointerdown(w: &InputWiring) {
    let controller = w.controller.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        let mut c = controller.borrow_mut();
        if !c.is_active() {
            log::debug!("[input] pointerdown id={}", ev.pointer_id());
            c.hold_start();
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .button
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(
    w: &InputWiring,
    target: &web::EventTarget,
    event: &'static str,
    reason: ReleaseReason,
) {
    let controller = w.controller.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if let Some(outcome) = controller.borrow_mut().release(reason) {
            log::debug!("[input] {} ended round at {:.2}s", event, outcome.survived_seconds);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_interstitial_close(w: &InputWiring) {
    let controller = w.controller.clone();
    dom::add_click_listener(&w.document, INTERSTITIAL_CLOSE_ID, move || {
        if controller.borrow_mut().interstitial_dismissed().is_some() {
            log::info!("[input] fell for the interstitial");
        }
    });
}

// Long-press on touch devices opens the context menu and steals the pointer.
fn suppress_context_menu() {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
