// Host-side tests for the pure effect sampling code.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod effects {
    include!("../src/effects.rs");
}

use constants::*;
use effects::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn burst_has_canonical_count() {
    let mut rng = StdRng::seed_from_u64(7);
    let burst = sample_burst(&mut rng);
    assert_eq!(burst.len(), PARTICLES_PER_BURST);
    assert_eq!(burst.len(), 12);
}

#[test]
fn particle_params_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let spec = sample_particle(&mut rng);
        assert_eq!(spec.kind, EffectKind::Particle);
        assert!(spec.size_px >= PARTICLE_SIZE_MIN && spec.size_px < PARTICLE_SIZE_MAX);
        assert_eq!(spec.ttl_ms, PARTICLE_TTL_MS);
        assert!(PARTICLE_PALETTE.contains(&spec.color));

        // Displacement magnitude equals the sampled distance.
        let mag = spec.shift.length();
        assert!(
            mag >= PARTICLE_DISTANCE_MIN - 0.1 && mag < PARTICLE_DISTANCE_MAX + 0.1,
            "displacement magnitude {} out of range",
            mag
        );
    }
}

#[test]
fn particles_in_a_burst_are_sampled_independently() {
    let mut rng = StdRng::seed_from_u64(3);
    let burst = sample_burst(&mut rng);
    // With independent uniform angles, twelve identical displacement vectors
    // would mean the sampler is broken.
    let first = burst[0].shift;
    assert!(burst.iter().any(|s| s.shift != first));
}

#[test]
fn trail_params_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let spec = sample_trail(&mut rng);
        assert_eq!(spec.kind, EffectKind::Trail);
        assert!(spec.size_px >= TRAIL_SIZE_MIN && spec.size_px < TRAIL_SIZE_MAX);
        assert_eq!(spec.ttl_ms, TRAIL_TTL_MS);
        assert!(TRAIL_PALETTE.contains(&spec.color));
        assert_eq!(spec.shift, Vec2::ZERO);
    }
}

#[test]
fn particle_style_centers_on_spawn_point() {
    let spec = EffectSpec {
        kind: EffectKind::Particle,
        size_px: 4.0,
        color: "--neon-cyan",
        shift: Vec2::new(10.0, -20.0),
        ttl_ms: PARTICLE_TTL_MS,
    };
    let style = particle_style(&spec, 100.0, 50.0);
    assert!(style.contains("left:98.0px"));
    assert!(style.contains("top:48.0px"));
    assert!(style.contains("--tx:10.0px"));
    assert!(style.contains("--ty:-20.0px"));
    // Starts visible.
    assert!(style.contains("opacity:1"));
    // Palette is referenced symbolically, never resolved here.
    assert!(style.contains("var(--neon-cyan)"));
}

#[test]
fn trail_style_centers_and_starts_visible() {
    let spec = EffectSpec {
        kind: EffectKind::Trail,
        size_px: 8.0,
        color: "--neon-pink",
        shift: Vec2::ZERO,
        ttl_ms: TRAIL_TTL_MS,
    };
    let style = trail_style(&spec, 30.0, 40.0);
    assert!(style.contains("left:26.0px"));
    assert!(style.contains("top:36.0px"));
    assert!(style.contains("opacity:0.6"));
    assert!(style.contains("var(--neon-pink)"));
}

#[test]
fn effect_style_rules_cover_both_effect_classes() {
    assert!(EFFECT_STYLE_RULES.contains(".particle"));
    assert!(EFFECT_STYLE_RULES.contains(".mouse-trail"));
    assert!(EFFECT_STYLE_RULES.contains("particleFloat"));
    assert!(EFFECT_STYLE_RULES.contains("trailFade"));
}
