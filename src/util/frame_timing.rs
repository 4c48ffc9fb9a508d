//! Frame pacing for the headless runner and other host loops.

use web_time::{Duration, Instant};

/// Frame pacing for hosts that drive the engine from their own loop.
///
/// Tracks a smoothed frame rate and tells the caller how long to wait
/// before the next frame is due.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Frame timer targeting `target_fps` (0 = unlimited), starting at `now`.
    #[must_use]
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.target_fps == 0
            || now.saturating_duration_since(self.last_frame) >= self.min_frame_duration
    }

    /// Time left until the next frame is due.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last_frame + self.min_frame_duration).saturating_duration_since(now)
    }

    /// Record that a frame finished at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_become_due_after_min_duration() {
        let t0 = Instant::now();
        let timing = FrameTiming::new(50, t0);
        assert!(!timing.is_due(t0 + Duration::from_millis(10)));
        assert!(timing.is_due(t0 + Duration::from_millis(20)));
        assert_eq!(
            timing.until_next(t0 + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert_eq!(timing.until_next(t0 + Duration::from_secs(1)), Duration::ZERO);
    }

    #[test]
    fn unlimited_is_always_due() {
        let t0 = Instant::now();
        let timing = FrameTiming::new(0, t0);
        assert!(timing.is_due(t0));
        assert_eq!(timing.until_next(t0), Duration::ZERO);
    }

    #[test]
    fn fps_moves_toward_observed_rate() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(0, t0);
        let mut now = t0;
        for _ in 0..200 {
            now += Duration::from_millis(10);
            timing.end_frame(now);
        }
        assert!((timing.fps() - 100.0).abs() < 1.0);
    }
}
