use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Comparable scalar carried by every element.
pub type Value = i64;

/// Stable identifier of an element for its whole lifetime.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled value placed on the 2D surface.
///
/// `value` never changes during a run. `x`/`y` are written only by sort
/// runs (to reflect swaps) and by drag collaborators while no run is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identifier, unique within a [`Scene`](super::Scene).
    pub id: ElementId,
    /// The value algorithms compare.
    pub value: Value,
    /// Horizontal position; defines the logical order of a run.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Element {
    /// Element at the given position.
    #[must_use]
    pub fn new(id: ElementId, value: Value, x: f32, y: f32) -> Self {
        Self { id, value, x, y }
    }

    /// Position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Overwrite the position.
    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Snapshot of `elements` in stable ascending `x` order.
///
/// This is the logical array every algorithm run operates on. Elements
/// sharing an `x` keep their relative input order.
#[must_use]
pub fn ordered_view(elements: &[Element]) -> Vec<Element> {
    let mut view = elements.to_vec();
    view.sort_by(|a, b| a.x.total_cmp(&b.x));
    view
}

/// Whether the values of `view` are non-decreasing.
#[must_use]
pub fn is_ascending(view: &[Element]) -> bool {
    view.windows(2).all(|pair| pair[0].value <= pair[1].value)
}

/// Values of `view` in order, mostly for logging and assertions.
#[must_use]
pub fn values_of(view: &[Element]) -> Vec<Value> {
    view.iter().map(|e| e.value).collect()
}
