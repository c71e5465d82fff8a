//! Client-only contact form. Submission never leaves the page: validation,
//! a status notification, and a short cooldown on the submit button stand in
//! for a round trip.

use crate::constants::SUBMIT_COOLDOWN_MS;
use crate::dom;
use crate::form::Submission;
use crate::notify::{self, Notice};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(form: &web::Element, name: &str) -> String {
    let Ok(Some(field)) = form.query_selector(&format!("[name='{name}']")) else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = field.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn clear_field(form: &web::Element, name: &str) {
    let Ok(Some(field)) = form.query_selector(&format!("[name='{name}']")) else {
        return;
    };
    if let Some(input) = field.dyn_ref::<web::HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = field.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value("");
    }
}

/// Disable the submit button with a sent marker, restoring the original
/// label when the cooldown elapses.
fn cooldown_submit_button(form: &web::Element) {
    let Ok(Some(button)) = form.query_selector("button[type='submit']") else {
        return;
    };
    let Ok(button) = button.dyn_into::<web::HtmlButtonElement>() else {
        return;
    };
    let original = button.inner_html();
    button.set_inner_html("<i class=\"fas fa-check\"></i> SENT!");
    button.set_disabled(true);
    dom::set_timeout(SUBMIT_COOLDOWN_MS, move || {
        button.set_inner_html(&original);
        button.set_disabled(false);
    });
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id("contactForm") else {
        log::debug!("[form] no contact form on this page");
        return;
    };

    let doc = document.clone();
    let form_el = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();

        let name = field_value(&form_el, "name");
        let email = field_value(&form_el, "email");
        let subject = field_value(&form_el, "subject");
        let message = field_value(&form_el, "message");
        let submission = Submission {
            name: &name,
            email: &email,
            subject: &subject,
            message: &message,
        };

        if let Err(err) = submission.validate() {
            notify::show(&doc, err.message(), Notice::Error);
            return;
        }

        notify::show(&doc, "Message sent! I'll get back to you soon.", Notice::Success);
        for field in ["name", "email", "subject", "message"] {
            clear_field(&form_el, field);
        }
        cooldown_submit_button(&form_el);
        log::info!("[form] submission accepted");
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
