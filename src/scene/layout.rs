//! Row placement for sort runs.
//!
//! Before sorting, elements are lined up on a horizontal row centered in
//! the viewport so swaps read as left/right exchanges.

use glam::Vec2;

use super::Element;
use crate::options::LayoutOptions;

/// Evenly spaced slots on one horizontal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// X of slot 0.
    pub start_x: f32,
    /// Y shared by every slot.
    pub center_y: f32,
    /// Distance between neighboring slots.
    pub spacing: f32,
}

impl RowLayout {
    /// Row of `count` slots centered in the configured viewport.
    #[must_use]
    pub fn centered(count: usize, options: &LayoutOptions) -> Self {
        let spacing = options.spacing;
        let total_width = count.saturating_sub(1) as f32 * spacing;
        let [width, height] = options.viewport;
        Self {
            start_x: (width - total_width) / 2.0,
            center_y: height / 2.0,
            spacing,
        }
    }

    /// Row starting at the first element of an x-ordered `view` and ending
    /// no earlier than its last, with slots at least `min_spacing` apart.
    #[must_use]
    pub fn spanning(view: &[Element], min_spacing: f32) -> Self {
        let (Some(first), Some(last)) = (view.first(), view.last()) else {
            return Self {
                start_x: 0.0,
                center_y: 0.0,
                spacing: min_spacing,
            };
        };
        let gaps = view.len().saturating_sub(1).max(1) as f32;
        Self {
            start_x: first.x,
            center_y: first.y,
            spacing: ((last.x - first.x) / gaps).max(min_spacing),
        }
    }

    /// Position of slot `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Vec2 {
        Vec2::new(self.start_x + index as f32 * self.spacing, self.center_y)
    }
}
