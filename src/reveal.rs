//! Intersection reactors: fade-in on first visibility, and the skill-bar
//! fill animation when the skills section scrolls into view.

use crate::constants::*;
use crate::dom;
use crate::nav;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const FADE_TARGETS: &str =
    "section, .project-card, .research-card, .skills-category, .timeline-item";

fn make_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut f: impl FnMut(web::IntersectionObserverEntry, web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                f(entry.unchecked_into(), observer.clone());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok();
    closure.forget();
    observer
}

/// Hide the revealable elements and fade each one in the first time it
/// becomes visible.
pub fn wire_fade_ins(document: &web::Document) {
    let Some(observer) = make_observer(FADE_IN_THRESHOLD, None, |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        if let Some(el) = entry.target().dyn_ref::<web::HtmlElement>() {
            let style = el.style();
            _ = style.set_property("animation", "fadeInUp 0.6s ease forwards");
            _ = style.set_property("opacity", "1");
        }
    }) else {
        return;
    };

    dom::for_each_selected(document, FADE_TARGETS, |_, el| {
        if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
            _ = h.style().set_property("opacity", "0");
        }
        observer.observe(&el);
    });
}

/// Fill every skill bar to its `data-skill` percent, staggered by index.
pub fn animate_skill_bars(document: &web::Document) {
    dom::for_each_selected(document, ".skill-progress", |index, el| {
        let Some(pct) = nav::skill_width_pct(el.get_attribute("data-skill").as_deref()) else {
            return;
        };
        let Ok(bar) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        _ = bar.style().set_property("width", "0%");
        dom::set_timeout(index as i32 * SKILL_STAGGER_MS, move || {
            _ = bar.style().set_property("width", &format!("{pct}%"));
        });
    });
}

/// Observe the skills section; on first intersection run the fill animation
/// once and stop observing. A pointer-enter fallback fills immediately.
pub fn wire_skill_bars(document: &web::Document) {
    let Ok(Some(section)) = document.query_selector(".skills-section") else {
        log::debug!("[skills] no skills section on this page");
        return;
    };

    let doc = document.clone();
    if let Some(observer) = make_observer(
        SKILLS_THRESHOLD,
        Some(SKILLS_ROOT_MARGIN),
        move |entry, observer| {
            if entry.is_intersecting() {
                animate_skill_bars(&doc);
                observer.unobserve(&entry.target());
            }
        },
    ) {
        observer.observe(&section);
    }

    let doc_hover = document.clone();
    let hover = Closure::wrap(Box::new(move |_: web::MouseEvent| {
        animate_skill_bars(&doc_hover);
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("mouseenter", hover.as_ref().unchecked_ref());
    hover.forget();
}
