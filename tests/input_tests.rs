// Host-side tests for the trail session and throttle gate.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::TRAIL_THROTTLE_MS;
use input::*;
use instant::{Duration, Instant};

#[test]
fn first_move_spawns_immediately() {
    let mut session = TrailSession::new();
    assert!(session.active);
    assert!(session.try_spawn(Instant::now()));
}

#[test]
fn gate_blocks_within_throttle_interval() {
    let t0 = Instant::now();
    let mut session = TrailSession::new();
    assert!(session.try_spawn(t0));
    assert!(!session.try_spawn(t0 + Duration::from_millis(10)));
    assert!(!session.try_spawn(t0 + Duration::from_millis(TRAIL_THROTTLE_MS - 1)));
    assert!(session.try_spawn(t0 + Duration::from_millis(TRAIL_THROTTLE_MS)));
}

#[test]
fn rejected_moves_do_not_extend_the_window() {
    let t0 = Instant::now();
    let mut gate = ThrottleGate::new(Duration::from_millis(40));
    assert!(gate.try_pass(t0));
    // A burst of rejected events right before the boundary must not delay
    // the next admission.
    for ms in [5u64, 15, 25, 35, 39] {
        assert!(!gate.try_pass(t0 + Duration::from_millis(ms)));
    }
    assert!(gate.try_pass(t0 + Duration::from_millis(40)));
}

#[test]
fn spawn_count_is_bounded_over_a_window() {
    // Synthetic move stream far faster than the throttle: one event every
    // 5ms across a 1000ms window.
    let t0 = Instant::now();
    let mut session = TrailSession::new();
    let window_ms = 1000u64;
    let mut spawned = 0u64;
    let mut t = 0u64;
    while t <= window_ms {
        if session.try_spawn(t0 + Duration::from_millis(t)) {
            spawned += 1;
        }
        t += 5;
    }
    let bound = window_ms.div_ceil(TRAIL_THROTTLE_MS) + 1;
    assert!(
        spawned <= bound,
        "{} spawns exceeds bound {}",
        spawned,
        bound
    );
    // And the throttle must not starve the trail either.
    assert!(spawned >= bound - 2);
}

#[test]
fn leaving_the_viewport_stops_future_spawns_only() {
    let t0 = Instant::now();
    let mut session = TrailSession::new();
    assert!(session.try_spawn(t0));

    session.set_active(false);
    // Plenty of time has passed; the inactive flag alone blocks the spawn.
    assert!(!session.try_spawn(t0 + Duration::from_millis(500)));

    session.set_active(true);
    assert!(session.try_spawn(t0 + Duration::from_millis(500)));
}

#[test]
fn inactive_moves_do_not_touch_the_gate() {
    let t0 = Instant::now();
    let mut session = TrailSession::new();
    assert!(session.try_spawn(t0));

    session.set_active(false);
    assert!(!session.try_spawn(t0 + Duration::from_millis(100)));

    // Reactivating admits immediately because the last admission is still
    // the one at t0.
    session.set_active(true);
    assert!(session.try_spawn(t0 + Duration::from_millis(100)));
}
