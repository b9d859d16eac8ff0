use web_time::{Duration, Instant};

/// Per-frame delta time with FPS smoothing and optional frame limiting.
///
/// Call [`FrameClock::tick`] once per frame and feed the result to
/// [`apply_movement`](crate::camera::CameraController::apply_movement) so
/// movement speed is independent of frame rate.
pub struct FrameClock {
    /// Minimum frame duration based on target FPS (zero = unlimited).
    min_frame_duration: Duration,
    /// Last tick timestamp.
    last_frame: Instant,
    /// Seconds between the last two ticks.
    delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl FrameClock {
    /// Create a new clock with the given FPS target (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            delta: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick to render again.
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a frame and return seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.delta = elapsed.as_secs_f32();

        if self.delta > 0.0 {
            let instant_fps = 1.0 / self.delta;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.delta
    }

    /// Seconds between the last two ticks.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
