use serde::{Deserialize, Serialize};

use crate::animation::Color;

/// RGB values for each highlight role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Un-highlighted element fill.
    pub base: [f32; 3],
    /// Element under comparison.
    pub compare: [f32; 3],
    /// Running minimum during a selection scan.
    pub minimum: [f32; 3],
    /// Found-element blink.
    pub found: [f32; 3],
}

impl ColorOptions {
    /// RGB for a highlight role.
    #[must_use]
    pub fn rgb(&self, color: Color) -> [f32; 3] {
        match color {
            Color::Compare => self.compare,
            Color::Minimum => self.minimum,
            Color::Found => self.found,
        }
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            base: [1.0, 1.0, 1.0],
            compare: [0.298, 0.686, 0.314],
            minimum: [0.678, 0.847, 0.902],
            found: [1.0, 0.843, 0.0],
        }
    }
}
