//! Centralized playback/animation options with TOML preset support.
//!
//! All tweakable settings (drive mode, speed, effect durations, colors,
//! layout) are consolidated here. Options serialize to/from TOML so a UI
//! can ship presets such as "slow classroom" or "fast demo".

mod colors;
mod layout;
mod playback;
mod timing;

use std::path::Path;

pub use colors::ColorOptions;
pub use layout::LayoutOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::StepvizError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drive mode and pacing.
    pub playback: PlaybackOptions,
    /// Effect durations and display windows.
    pub timing: TimingOptions,
    /// Highlight role colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Element geometry and viewport.
    pub layout: LayoutOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StepvizError::Io`] if the file cannot be read, or
    /// [`StepvizError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, StepvizError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StepvizError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, StepvizError> {
        toml::from_str(content)
            .map_err(|e| StepvizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), StepvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StepvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(StepvizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[playback]
stepping = true
speed = 2.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(opts.playback.stepping);
        assert_eq!(opts.playback.step_delay_ms, 300);
        assert_eq!(opts.timing.blink_period_ms, 600);
        assert_eq!(opts.layout.spacing, 88.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[playback]\nspeed = \"fast\"").unwrap_err();
        assert!(matches!(err, StepvizError::OptionsParse(_)));
    }

    #[test]
    fn speed_scales_durations() {
        let mut playback = PlaybackOptions {
            speed: 2.0,
            ..PlaybackOptions::default()
        };
        assert_eq!(playback.step_delay(), Duration::from_millis(150));

        playback.speed = f32::NAN;
        assert_eq!(playback.scale(Duration::from_millis(600)), Duration::from_millis(600));

        playback.speed = 0.0;
        assert_eq!(playback.effective_speed(), 0.1);
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = std::env::temp_dir().join(format!(
            "stepviz-options-{}",
            std::process::id()
        ));
        let path = dir.join("classroom.toml");
        let mut opts = Options::default();
        opts.timing.move_ms = 1200;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.timing.move_ms, 1200);
        assert_eq!(Options::list_presets(&dir), vec!["classroom".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("playback"));
        assert!(props.contains_key("timing"));
        assert!(props.contains_key("layout"));
        assert!(!props.contains_key("colors"));

        let timing = &props["timing"]["properties"];
        assert!(timing.get("blink_period_ms").is_some());
        assert!(timing.get("announce_ms").is_none());
    }
}
