use web_time::{Duration, Instant};

/// How often [`FrameTiming::fps_report`] yields a value.
pub const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Session clock with FPS calculation and optional frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// When the clock was created
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// When the FPS was last reported
    last_report: Instant,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            start: now,
            last_frame: now,
            last_report: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Seconds since the clock was created. Feeds the camera frame tick.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Smoothed FPS, at most once per [`FPS_REPORT_INTERVAL`].
    pub fn fps_report(&mut self) -> Option<f32> {
        self.fps_report_at(Instant::now())
    }

    fn fps_report_at(&mut self, now: Instant) -> Option<f32> {
        if now.duration_since(self.last_report) < FPS_REPORT_INTERVAL {
            return None;
        }
        self.last_report = now;
        Some(self.fps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn capped_timer_waits_for_frame_budget() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
    }

    #[test]
    fn clock_is_monotonic() {
        let timing = FrameTiming::new(0);
        let a = timing.elapsed_secs();
        let b = timing.elapsed_secs();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn fps_is_reported_once_per_interval() {
        let mut timing = FrameTiming::new(0);
        let start = timing.last_report;
        assert_eq!(timing.fps_report_at(start + Duration::from_secs(1)), None);

        let due = start + FPS_REPORT_INTERVAL;
        assert_eq!(timing.fps_report_at(due), Some(60.0));
        assert_eq!(timing.fps_report_at(due + Duration::from_secs(1)), None);
        assert!(timing
            .fps_report_at(due + FPS_REPORT_INTERVAL)
            .is_some());
    }

    #[test]
    fn smoothing_moves_fps_toward_the_frame_rate() {
        let mut timing = FrameTiming::new(0);
        // Pretend the last frame was a full second ago: 1 fps.
        timing.last_frame = Instant::now() - Duration::from_secs(1);
        timing.end_frame();
        let fps = timing.fps();
        assert!(fps < 60.0, "{fps}");
        assert!(fps > 55.0, "{fps}");
    }
}
