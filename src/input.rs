use crate::constants::TRAIL_THROTTLE_MS;
use instant::{Duration, Instant};

/// Admits at most one pass per `min_gap`. The timestamp is recorded only on
/// admission, so back-to-back rejected events do not push the window out.
#[derive(Clone, Copy, Debug)]
pub struct ThrottleGate {
    last: Option<Instant>,
    min_gap: Duration,
}

impl ThrottleGate {
    pub fn new(min_gap: Duration) -> Self {
        Self {
            last: None,
            min_gap,
        }
    }

    pub fn try_pass(&mut self, now: Instant) -> bool {
        let ok = match self.last {
            None => true,
            Some(last) => now.duration_since(last) >= self.min_gap,
        };
        if ok {
            self.last = Some(now);
        }
        ok
    }
}

/// Spawn-session state for the mouse trail, owned by the pointer router.
/// Active from page load; pointer-leave pauses future spawns only — elements
/// already spawned keep their own removal timers.
#[derive(Clone, Copy, Debug)]
pub struct TrailSession {
    pub active: bool,
    gate: ThrottleGate,
}

impl TrailSession {
    pub fn new() -> Self {
        Self {
            active: true,
            gate: ThrottleGate::new(Duration::from_millis(TRAIL_THROTTLE_MS)),
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// True when a trail element should be spawned for a move event at `now`.
    pub fn try_spawn(&mut self, now: Instant) -> bool {
        self.active && self.gate.try_pass(now)
    }
}

impl Default for TrailSession {
    fn default() -> Self {
        Self::new()
    }
}
