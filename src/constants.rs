/// Effect and interaction tuning constants.
///
/// These express intended behavior (counts, lifetimes, throttle spacing)
/// and keep magic numbers out of the wiring code.
// Click burst
pub const PARTICLES_PER_BURST: usize = 12;
pub const PARTICLE_SIZE_MIN: f64 = 4.0;
pub const PARTICLE_SIZE_MAX: f64 = 8.0;
pub const PARTICLE_DISTANCE_MIN: f32 = 50.0;
pub const PARTICLE_DISTANCE_MAX: f32 = 150.0;
pub const PARTICLE_TTL_MS: i32 = 1500;

// Mouse trail
pub const TRAIL_SIZE_MIN: f64 = 6.0;
pub const TRAIL_SIZE_MAX: f64 = 12.0;
pub const TRAIL_TTL_MS: i32 = 800;
pub const TRAIL_THROTTLE_MS: u64 = 40;

// Ambient loops
pub const CURSOR_BLINK_MS: i32 = 500;
pub const GLITCH_TICK_MS: i32 = 5000;
pub const GLITCH_CHANCE: f64 = 0.02;
pub const GLITCH_STEP_MS: i32 = 50;
pub const GLITCH_SHIFT_PX: i32 = 2;

// Reveal-on-view
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const SKILLS_THRESHOLD: f64 = 0.2;
pub const SKILLS_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SKILL_STAGGER_MS: i32 = 100;

// Contact form and notifications
pub const SUBMIT_COOLDOWN_MS: i32 = 3000;
pub const NOTIFY_TTL_MS: i32 = 5000;
pub const NOTIFY_EXIT_MS: i32 = 300;

// Parallax shapes
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;
pub const PARALLAX_SPIN_DEG_PER_PX: f64 = 0.05;
