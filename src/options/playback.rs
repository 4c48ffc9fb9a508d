use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Drive-mode and pacing options for algorithm runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Manual single-stepping instead of automatic playback.
    #[schemars(title = "Enable Stepping")]
    pub stepping: bool,
    /// Animation speed multiplier; every duration is divided by it.
    #[schemars(title = "Speed", range(min = 0.25, max = 4.0), extend("step" = 0.25))]
    pub speed: f32,
    /// Pause between automatic steps, in milliseconds at speed 1.
    #[schemars(title = "Step Delay (ms)", range(min = 0, max = 2000))]
    pub step_delay_ms: u64,
    /// Line elements up on a centered row before a sort starts.
    #[schemars(title = "Arrange Before Sort")]
    pub arrange_sorts: bool,
}

impl PlaybackOptions {
    /// Slowest and fastest accepted speed multipliers.
    pub const SPEED_RANGE: (f32, f32) = (0.1, 10.0);

    /// Speed multiplier clamped to a usable range; non-finite values fall
    /// back to 1.
    #[must_use]
    pub fn effective_speed(&self) -> f32 {
        if self.speed.is_finite() {
            self.speed.clamp(Self::SPEED_RANGE.0, Self::SPEED_RANGE.1)
        } else {
            1.0
        }
    }

    /// `duration` adjusted for the playback speed.
    #[must_use]
    pub fn scale(&self, duration: Duration) -> Duration {
        let nanos = duration.as_nanos() as f64 / f64::from(self.effective_speed());
        Duration::from_nanos(nanos.round() as u64)
    }

    /// Speed-scaled pause between automatic steps.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.scale(Duration::from_millis(self.step_delay_ms))
    }
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            stepping: false,
            speed: 1.0,
            step_delay_ms: 300,
            arrange_sorts: true,
        }
    }
}
