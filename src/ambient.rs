//! Input-independent loops that run for the page's lifetime. Neither has a
//! terminal state; the host reclaims the timers at unload.

use crate::constants::*;
use crate::dom;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Blink the terminal cursor indicator every `CURSOR_BLINK_MS`. Absence of
/// the indicator is not an error; the tick just skips.
pub fn start_cursor_blink(document: &web::Document) {
    let doc = document.clone();
    dom::set_interval(CURSOR_BLINK_MS, move || {
        let Some(el) = doc.query_selector(".terminal-cursor").ok().flatten() else {
            return;
        };
        if let Some(cursor) = el.dyn_ref::<web::HtmlElement>() {
            let style = cursor.style();
            let visible = style
                .get_property_value("opacity")
                .map(|v| v != "0")
                .unwrap_or(true);
            _ = style.set_property("opacity", if visible { "0" } else { "1" });
        }
    });
}

/// Occasional whole-page jitter: every `GLITCH_TICK_MS`, with probability
/// `GLITCH_CHANCE`, shift the body, counter-shift, then reset, each step
/// `GLITCH_STEP_MS` apart.
pub fn start_glitch_jitter(document: &web::Document) {
    let doc = document.clone();
    dom::set_interval(GLITCH_TICK_MS, move || {
        if rand::thread_rng().gen::<f64>() >= GLITCH_CHANCE {
            return;
        }
        let Some(body) = doc.body() else { return };
        _ = body
            .style()
            .set_property("transform", &format!("translateX({GLITCH_SHIFT_PX}px)"));
        let body_counter = body.clone();
        dom::set_timeout(GLITCH_STEP_MS, move || {
            _ = body_counter
                .style()
                .set_property("transform", &format!("translateX(-{GLITCH_SHIFT_PX}px)"));
            let body_reset = body_counter.clone();
            dom::set_timeout(GLITCH_STEP_MS, move || {
                _ = body_reset.style().set_property("transform", "translateX(0)");
            });
        });
    });
}
