//! Spawn trigger router: click to particle burst, throttled pointer movement
//! to trail glows, enter/leave to the trail-active flag.

use crate::input::TrailSession;
use crate::spawn;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub session: Rc<RefCell<TrailSession>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_click_burst(&w);
    wire_pointermove(&w);
    wire_enter_leave(&w);
}

fn wire_click_burst(w: &PointerWiring) {
    let doc = w.document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        spawn::spawn_particles(&doc, ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // The session gate records the spawn time only when it admits, so a
        // move stream faster than the throttle interval converges to one
        // spawn per interval.
        if w.session.borrow_mut().try_spawn(Instant::now()) {
            spawn::spawn_trail(&w.document, ev.client_x() as f64, ev.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_enter_leave(w: &PointerWiring) {
    let session_enter = w.session.clone();
    let enter = Closure::wrap(Box::new(move |_: web::PointerEvent| {
        session_enter.borrow_mut().set_active(true);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
    enter.forget();

    // Leaving the viewport stops future spawns only; live trail elements
    // keep their own removal timers.
    let session_leave = w.session.clone();
    let leave = Closure::wrap(Box::new(move |_: web::PointerEvent| {
        session_leave.borrow_mut().set_active(false);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();
}
