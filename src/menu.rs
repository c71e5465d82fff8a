//! Mobile navigation: the menu toggle folds the three indicator bars into a
//! cross while the panel is open; closing (or following a link) restores the
//! bars to their initial state.

use crate::dom;
use crate::nav;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_bar_poses(document: &web::Document, open: bool) {
    let poses = nav::menu_bar_poses(open);
    dom::for_each_selected(document, ".menu-bar", |index, el| {
        let Some(pose) = poses.get(index) else { return };
        if let Some(bar) = el.dyn_ref::<web::HtmlElement>() {
            let style = bar.style();
            _ = style.set_property("transform", pose.transform);
            _ = style.set_property("opacity", pose.opacity);
        }
    });
}

fn close_panel(document: &web::Document) {
    if let Ok(Some(panel)) = document.query_selector(".vapor-nav") {
        _ = panel.class_list().remove_1("active");
    }
    apply_bar_poses(document, false);
}

pub fn wire_menu_toggle(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "menuToggle", move || {
        let Ok(Some(panel)) = doc.query_selector(".vapor-nav") else {
            return;
        };
        if let Ok(open) = panel.class_list().toggle("active") {
            apply_bar_poses(&doc, open);
        }
    });

    // Following a nav link closes the panel.
    let doc_links = document.clone();
    dom::for_each_selected(document, ".nav-link", move |_, link| {
        let doc = doc_links.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            close_panel(&doc);
        }) as Box<dyn FnMut()>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    });
}
