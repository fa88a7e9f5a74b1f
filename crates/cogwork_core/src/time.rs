//! Frame timing and clock-hand angles.
//!
//! The runner owns a [`TimeClock`] and calls `tick()` once per frame; the
//! resulting [`Time`] snapshot drives both the hand rotation and any
//! frame-rate diagnostics.

/// A snapshot of timing information for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame, clamped to 0.1 so a long
    /// stall does not produce a huge jump.
    pub delta: f32,
    /// Total seconds elapsed since the application started.
    pub elapsed: f64,
    /// Number of frames rendered so far (0 for the first frame).
    pub frame_count: u64,
}

/// Rotation angle of each hand, in radians about the -Z axis.
///
/// The hands spin with render time rather than wall time: the second hand
/// advances one radian per second and the minute/hour hands follow at 1/60
/// and 1/3600 of that rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

/// Computes the hand angles for `elapsed` seconds of run time.
pub fn hand_angles(elapsed: f64) -> HandAngles {
    let t = elapsed as f32;
    HandAngles {
        second: t,
        minute: t / 60.0,
        hour: t / 3600.0,
    }
}

// ─── Clock (lives in the runner) ───────────────────────────────────────────

/// Stateful timer that accumulates time and produces [`Time`] snapshots.
pub struct TimeClock {
    start: std::time::Instant,
    last_tick: std::time::Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = std::time::Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    /// Advance by one frame. Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now = std::time::Instant::now();
        let delta = (now - self.last_tick).as_secs_f32().min(0.1);
        let elapsed = (now - self.start).as_secs_f64();
        let count = self.frame_count;

        self.last_tick = now;
        self.frame_count += 1;

        Time {
            delta,
            elapsed,
            frame_count: count,
        }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}
