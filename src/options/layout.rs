use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Element geometry and the viewport rows are centered in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Element box size in pixels.
    #[schemars(skip)]
    pub element_size: f32,
    /// Distance between neighboring row slots.
    #[schemars(title = "Spacing", range(min = 44.0, max = 200.0), extend("step" = 4.0))]
    pub spacing: f32,
    /// Viewport width and height in pixels.
    #[schemars(skip)]
    pub viewport: [f32; 2],
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            element_size: 44.0,
            spacing: 88.0,
            viewport: [1280.0, 720.0],
        }
    }
}
