//! DOM half of the effect factory: turns sampled `EffectSpec`s into elements
//! on the page body and hands each one to the janitor with its own TTL.

use crate::effects::{self, EffectSpec};
use crate::janitor;
use web_sys as web;

const EFFECT_STYLE_ID: &str = "vapor-effect-styles";

fn insert_effect(document: &web::Document, class: &str, style: &str, spec: &EffectSpec) {
    let Some(body) = document.body() else { return };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(class);
    _ = el.set_attribute("style", style);
    if body.append_child(&el).is_ok() {
        janitor::schedule_removal(el, spec.ttl_ms);
    }
}

/// Burst of particles at the click point. Creation is synchronous within the
/// calling handler; each particle's removal is its own later timer.
pub fn spawn_particles(document: &web::Document, x: f64, y: f64) {
    let mut rng = rand::thread_rng();
    for spec in effects::sample_burst(&mut rng) {
        insert_effect(document, "particle", &effects::particle_style(&spec, x, y), &spec);
    }
}

/// One trail glow at the current pointer position.
pub fn spawn_trail(document: &web::Document, x: f64, y: f64) {
    let mut rng = rand::thread_rng();
    let spec = effects::sample_trail(&mut rng);
    insert_effect(document, "mouse-trail", &effects::trail_style(&spec, x, y), &spec);
}

/// Inject the effect keyframe rules once. The page stylesheet defines the
/// palette custom properties these rules refer to.
pub fn ensure_effect_styles(document: &web::Document) {
    if document.get_element_by_id(EFFECT_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    if let Ok(style) = document.create_element("style") {
        style.set_id(EFFECT_STYLE_ID);
        style.set_text_content(Some(effects::EFFECT_STYLE_RULES));
        _ = head.append_child(&style);
    }
}
