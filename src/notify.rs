//! Transient status messages in the page corner. At most one notification is
//! visible; showing a new one replaces any existing one immediately.

use crate::constants::{NOTIFY_EXIT_MS, NOTIFY_TTL_MS};
use crate::dom;
use crate::janitor;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

impl Notice {
    fn class(self) -> &'static str {
        match self {
            Notice::Success => "notification success",
            Notice::Error => "notification error",
        }
    }

    fn accent(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Notice::Success => (
                "rgba(40, 202, 66, 0.9)",
                "#28ca42",
                "rgba(40, 202, 66, 0.5)",
            ),
            Notice::Error => (
                "rgba(255, 95, 87, 0.9)",
                "#ff5f57",
                "rgba(255, 95, 87, 0.5)",
            ),
        }
    }
}

fn slide_out(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h
            .style()
            .set_property("animation", "slideOutRight 0.3s ease");
    }
    janitor::schedule_removal(el.clone(), NOTIFY_EXIT_MS);
}

/// Show one notification; replaces any currently shown. The message lands in
/// a text node, never in markup.
pub fn show(document: &web::Document, message: &str, kind: Notice) {
    if let Ok(Some(existing)) = document.query_selector(".notification") {
        janitor::detach(&existing);
    }

    let Some(body) = document.body() else { return };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(kind.class());
    el.set_inner_html("<span></span><button class=\"notification-close\">✕</button>");
    if let Ok(Some(span)) = el.query_selector("span") {
        span.set_text_content(Some(message));
    }

    let (background, border, glow) = kind.accent();
    _ = el.set_attribute(
        "style",
        &format!(
            "position:fixed;top:20px;right:20px;background:{background};color:white;\
             padding:15px 20px;border-radius:5px;display:flex;align-items:center;gap:15px;\
             z-index:10000;backdrop-filter:blur(10px);border:1px solid {border};\
             box-shadow:var(--box-glow) {glow};animation:slideInRight 0.3s ease;\
             font-family:'VT323', monospace;font-size:1.1rem;"
        ),
    );

    if body.append_child(&el).is_err() {
        return;
    }

    if let Ok(Some(close)) = el.query_selector(".notification-close") {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move || {
            slide_out(&target);
        }) as Box<dyn FnMut()>);
        _ = close.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Auto-dismiss; a no-op if the close button or a replacement got there
    // first.
    let auto = el.clone();
    dom::set_timeout(NOTIFY_TTL_MS, move || {
        if auto.parent_node().is_some() {
            slide_out(&auto);
        }
    });
}
