use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Named palette colors, resolved by the stylesheet as custom properties.
pub const PARTICLE_PALETTE: [&str; 6] = [
    "--neon-pink",
    "--neon-cyan",
    "--neon-purple",
    "--neon-blue",
    "--sunset-orange",
    "--sunset-yellow",
];

pub const TRAIL_PALETTE: [&str; 3] = ["--neon-cyan", "--neon-pink", "--neon-purple"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Particle,
    Trail,
}

/// Parameters for one transient visual element. Each instance is
/// self-contained: it carries its own lifetime and terminal displacement.
#[derive(Clone, Copy, Debug)]
pub struct EffectSpec {
    pub kind: EffectKind,
    pub size_px: f64,
    pub color: &'static str,
    pub shift: Vec2,
    pub ttl_ms: i32,
}

pub type Burst = SmallVec<[EffectSpec; PARTICLES_PER_BURST]>;

pub fn sample_particle<R: Rng>(rng: &mut R) -> EffectSpec {
    let size_px = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
    let color = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(PARTICLE_DISTANCE_MIN..PARTICLE_DISTANCE_MAX);
    EffectSpec {
        kind: EffectKind::Particle,
        size_px,
        color,
        shift: Vec2::from_angle(angle) * distance,
        ttl_ms: PARTICLE_TTL_MS,
    }
}

/// One click's worth of particles, each sampled independently.
pub fn sample_burst<R: Rng>(rng: &mut R) -> Burst {
    let mut burst = Burst::new();
    for _ in 0..PARTICLES_PER_BURST {
        burst.push(sample_particle(rng));
    }
    burst
}

pub fn sample_trail<R: Rng>(rng: &mut R) -> EffectSpec {
    EffectSpec {
        kind: EffectKind::Trail,
        size_px: rng.gen_range(TRAIL_SIZE_MIN..TRAIL_SIZE_MAX),
        color: TRAIL_PALETTE[rng.gen_range(0..TRAIL_PALETTE.len())],
        shift: Vec2::ZERO,
        ttl_ms: TRAIL_TTL_MS,
    }
}

/// Inline style for a burst particle centered on the spawn point. The
/// `--tx`/`--ty` custom properties feed the keyframe animation's terminal
/// transform; everything else positional is per-instance.
pub fn particle_style(spec: &EffectSpec, x: f64, y: f64) -> String {
    format!(
        "width:{size:.1}px;height:{size:.1}px;\
         background:var({color});\
         box-shadow:0 0 10px var({color}),0 0 20px var({color});\
         --tx:{tx:.1}px;--ty:{ty:.1}px;\
         left:{left:.1}px;top:{top:.1}px;opacity:1;",
        size = spec.size_px,
        color = spec.color,
        tx = spec.shift.x,
        ty = spec.shift.y,
        left = x - spec.size_px / 2.0,
        top = y - spec.size_px / 2.0,
    )
}

/// Inline style for a trail glow centered on the pointer position.
pub fn trail_style(spec: &EffectSpec, x: f64, y: f64) -> String {
    format!(
        "width:{size:.1}px;height:{size:.1}px;\
         background:var({color});\
         box-shadow:0 0 15px var({color}),0 0 30px var({color});\
         left:{left:.1}px;top:{top:.1}px;opacity:0.6;",
        size = spec.size_px,
        color = spec.color,
        left = x - spec.size_px / 2.0,
        top = y - spec.size_px / 2.0,
    )
}

/// Keyframe rules for the two effect classes. Injected into the page once at
/// startup; the palette custom properties themselves live in the page CSS.
pub const EFFECT_STYLE_RULES: &str = "\
.particle {\
  position: fixed;\
  pointer-events: none;\
  z-index: 9998;\
  border-radius: 50%;\
  animation: particleFloat 1.5s ease-out forwards;\
  will-change: transform, opacity;\
}\
@keyframes particleFloat {\
  0% { opacity: 1; transform: translate(0, 0) scale(1) rotate(0deg); }\
  100% { opacity: 0; transform: translate(var(--tx), var(--ty)) scale(0) rotate(360deg); }\
}\
.mouse-trail {\
  position: fixed;\
  pointer-events: none;\
  z-index: 9997;\
  border-radius: 50%;\
  animation: trailFade 0.8s ease-out forwards;\
  will-change: transform, opacity;\
}\
@keyframes trailFade {\
  0% { opacity: 0.6; transform: scale(1); }\
  100% { opacity: 0; transform: scale(1.5); }\
}\
@keyframes slideInRight {\
  from { transform: translateX(100%); opacity: 0; }\
  to { transform: translateX(0); opacity: 1; }\
}\
@keyframes slideOutRight {\
  from { transform: translateX(0); opacity: 1; }\
  to { transform: translateX(100%); opacity: 0; }\
}\
.notification-close {\
  background: none;\
  border: none;\
  color: white;\
  cursor: pointer;\
  font-size: 1rem;\
}";
