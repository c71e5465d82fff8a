//! Scroll-driven reactors: parallax on the floating shapes, nav highlighting,
//! and smooth-scroll anchor navigation.

use crate::constants::*;
use crate::dom;
use crate::nav;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind the scroll handler driving parallax and nav highlighting.
pub fn wire_scroll_effects(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(win) = web::window() else { return };
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        apply_parallax(&doc, scrolled);
        highlight_nav(&doc, scrolled);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_parallax(document: &web::Document, scrolled: f64) {
    dom::for_each_selected(document, ".shape", |index, el| {
        let speed = PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP;
        let y = -(scrolled * speed);
        let spin = scrolled * PARALLAX_SPIN_DEG_PER_PX;
        if let Some(shape) = el.dyn_ref::<web::HtmlElement>() {
            _ = shape
                .style()
                .set_property("transform", &format!("translateY({y:.1}px) rotate({spin:.2}deg)"));
        }
    });
}

/// Mark exactly one nav link active: the one whose section contains the
/// current scroll offset, with the fixed header height subtracted.
fn highlight_nav(document: &web::Document, scrolled: f64) {
    let header = dom::header_height(document);
    let mut ids = Vec::new();
    let mut tops = Vec::new();
    dom::for_each_selected(document, "section[id]", |_, el| {
        if let Some(id) = el.get_attribute("id") {
            let top = el.get_bounding_client_rect().top() + scrolled - header;
            ids.push(id);
            tops.push(top);
        }
    });

    let active_id = nav::active_section(&tops, scrolled).map(|i| ids[i].clone());
    dom::for_each_selected(document, ".nav-link", |_, link| {
        let is_active = match (&active_id, link.get_attribute("href")) {
            (Some(id), Some(href)) => href == format!("#{id}"),
            _ => false,
        };
        let classes = link.class_list();
        if is_active {
            _ = classes.add_1("active");
        } else {
            _ = classes.remove_1("active");
        }
    });
}

/// Replace in-page anchor jumps with smooth scrolling that accounts for the
/// fixed header.
pub fn wire_smooth_scroll(document: &web::Document) {
    let doc = document.clone();
    dom::for_each_selected(document, "a[href^='#']", move |_, anchor| {
        let doc = doc.clone();
        let anchor_el = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            scroll_to_target(&doc, &href);
        }) as Box<dyn FnMut(_)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    });
}

fn scroll_to_target(document: &web::Document, selector: &str) {
    let Ok(Some(target)) = document.query_selector(selector) else {
        return;
    };
    let Some(window) = web::window() else { return };
    let header = dom::header_height(document);
    let top =
        target.get_bounding_client_rect().top() + window.page_y_offset().unwrap_or(0.0) - header;
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
