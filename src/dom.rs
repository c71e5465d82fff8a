use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to the element with the given id; silently skips
/// absent elements.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` for every element matched by `selector`, with its index.
pub fn for_each_selected(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(usize, web::Element),
) {
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                f(i as usize, el);
            }
        }
    }
}

/// One-shot deferred call on the host event loop. The closure is handed to
/// the JS side and freed after it fires.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms,
        );
    }
}

/// Fixed-period callback that lives for the page lifetime.
pub fn set_interval(period_ms: i32, f: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        );
        closure.forget();
    }
}

/// Height of the fixed page header, for scroll-offset corrections.
pub fn header_height(document: &web::Document) -> f64 {
    document
        .query_selector(".vapor-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|h| h.offset_height() as f64)
        .unwrap_or(0.0)
}
