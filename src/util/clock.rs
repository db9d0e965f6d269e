use web_time::{Duration, Instant};

/// Source of the per-tick time delta in seconds.
pub trait FrameClock {
    /// Seconds since the previous call (or since creation).
    fn tick(&mut self) -> f32;
}

/// Wall-clock frame timer with a smoothed FPS readout.
///
/// Deltas are clamped to `max_dt` so a stalled frame (window drag, debugger
/// pause) does not teleport a smoothed transition.
pub struct WallClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single delta
    max_dt: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl WallClock {
    /// Start a clock now, clamping deltas to `max_dt`.
    #[must_use]
    pub fn new(max_dt: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_dt,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Restart timing from now (e.g. after the window was hidden).
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl FrameClock for WallClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + self.smoothing / frame_time;
        }
        elapsed.min(self.max_dt).as_secs_f32()
    }
}

/// Clock that reports the same delta every tick. Used for deterministic
/// playback and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    /// Delta returned by every tick, in seconds.
    pub dt: f32,
}

impl FixedClock {
    /// Clock ticking at `fps` frames per second.
    #[must_use]
    pub fn from_fps(fps: f32) -> Self {
        Self {
            dt: if fps > 0.0 { 1.0 / fps } else { 0.0 },
        }
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}
