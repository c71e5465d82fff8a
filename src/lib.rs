#![cfg(target_arch = "wasm32")]
use crate::events::PointerWiring;
use crate::input::TrailSession;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod ambient;
mod constants;
mod contact;
mod dom;
mod effects;
mod events;
mod form;
mod input;
mod janitor;
mod menu;
mod nav;
mod notify;
mod reveal;
mod scroll;
mod spawn;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vapor-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Wire every component exactly once. The module used to be spread over
/// several scripts that each re-registered their own load hook; this is the
/// single replacement entry point.
fn init() -> anyhow::Result<()> {
    static WIRED: AtomicBool = AtomicBool::new(false);
    if WIRED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    spawn::ensure_effect_styles(&document);

    // Pointer router owns the trail session state.
    let session = Rc::new(RefCell::new(TrailSession::new()));
    events::wire_pointer_handlers(PointerWiring {
        document: document.clone(),
        session,
    });

    menu::wire_menu_toggle(&document);
    scroll::wire_smooth_scroll(&document);
    scroll::wire_scroll_effects(&document);
    reveal::wire_fade_ins(&document);
    reveal::wire_skill_bars(&document);
    contact::wire_contact_form(&document);
    ambient::start_cursor_blink(&document);
    ambient::start_glitch_jitter(&document);

    log::info!("[init] all components wired");
    Ok(())
}
