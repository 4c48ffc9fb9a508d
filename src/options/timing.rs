use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Effect durations and result display windows, in milliseconds at
/// speed 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
pub struct TimingOptions {
    /// Highlight and clear transitions.
    #[schemars(title = "Highlight (ms)", range(min = 0, max = 2000))]
    pub highlight_ms: u64,
    /// Element moves (swaps and the pre-sort arrangement).
    #[schemars(title = "Move (ms)", range(min = 0, max = 3000))]
    pub move_ms: u64,
    /// Announcement fade-in.
    #[schemars(skip)]
    pub announce_ms: u64,
    /// Announcement fade-out.
    #[schemars(skip)]
    pub dismiss_ms: u64,
    /// Period of the found-element blink.
    #[schemars(title = "Blink Period (ms)", range(min = 100, max = 2000))]
    pub blink_period_ms: u64,
    /// How long found / not-found results stay on screen.
    #[schemars(title = "Result Window (ms)", range(min = 0, max = 10000))]
    pub result_window_ms: u64,
    /// How long the sort completion message stays on screen.
    #[schemars(title = "Sorted Window (ms)", range(min = 0, max = 10000))]
    pub sorted_window_ms: u64,
}

impl TimingOptions {
    /// Highlight/clear duration.
    #[must_use]
    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Move duration.
    #[must_use]
    pub fn movement(&self) -> Duration {
        Duration::from_millis(self.move_ms)
    }

    /// Announcement fade-in duration.
    #[must_use]
    pub fn announce(&self) -> Duration {
        Duration::from_millis(self.announce_ms)
    }

    /// Announcement fade-out duration.
    #[must_use]
    pub fn dismiss(&self) -> Duration {
        Duration::from_millis(self.dismiss_ms)
    }

    /// Blink period.
    #[must_use]
    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(self.blink_period_ms)
    }

    /// Found / not-found display window.
    #[must_use]
    pub fn result_window(&self) -> Duration {
        Duration::from_millis(self.result_window_ms)
    }

    /// Sort completion display window.
    #[must_use]
    pub fn sorted_window(&self) -> Duration {
        Duration::from_millis(self.sorted_window_ms)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            highlight_ms: 300,
            move_ms: 600,
            announce_ms: 300,
            dismiss_ms: 500,
            blink_period_ms: 600,
            result_window_ms: 2000,
            sorted_window_ms: 2000,
        }
    }
}
