//! Lifecycle cleanup for spawned elements. Every element handed to
//! `schedule_removal` gets exactly one deferred detach; detaching an element
//! that is already gone is a no-op.

use crate::dom;
use web_sys as web;

/// Detach `el` from the document if it is still attached. Safe to call more
/// than once; a node without a parent is left alone.
pub fn detach(el: &web::Element) {
    if let Some(parent) = el.parent_node() {
        _ = parent.remove_child(el);
    }
}

/// Schedule the single removal for a spawned element. The element may have
/// been detached earlier by a global reset (e.g. notification replacement);
/// the timer still fires and no-ops.
pub fn schedule_removal(el: web::Element, ttl_ms: i32) {
    dom::set_timeout(ttl_ms, move || detach(&el));
}
