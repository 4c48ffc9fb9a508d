//! The element collection: flat element storage, id lookup, ordered views.
//!
//! Every visual item is an [`Element`]. The [`Scene`] owns them in insertion
//! order; algorithm runs never read it directly but take an
//! [`ordered_view`] snapshot at run start.

mod element;
pub mod layout;
pub mod parse;

pub use element::{
    is_ascending, ordered_view, values_of, Element, ElementId, Value,
};
use glam::Vec2;
pub use layout::RowLayout;
use rustc_hash::FxHashMap;

use crate::error::StepvizError;

/// The authoritative element collection.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Elements in insertion order.
    elements: Vec<Element>,
    /// Element id -> index into `elements`.
    index: FxHashMap<ElementId, usize>,
    next_element_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene with one element per value, placed on `row` in input order.
    #[must_use]
    pub fn from_values(values: &[Value], row: &RowLayout) -> Self {
        let mut scene = Self::new();
        for (i, &value) in values.iter().enumerate() {
            let _ = scene.insert(value, row.slot(i));
        }
        scene
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id, i))
            .collect();
    }

    /// Add a new element and return its id.
    pub fn insert(&mut self, value: Value, at: Vec2) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        let _ = self.index.insert(id, self.elements.len());
        self.elements.push(Element::new(id, value, at.x, at.y));
        self.invalidate();
        id
    }

    /// Remove an element, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`StepvizError::UnknownElement`] if `id` is not in the scene.
    pub fn remove(&mut self, id: ElementId) -> Result<Element, StepvizError> {
        let idx = self.position_of(id)?;
        let removed = self.elements.remove(idx);
        self.rebuild_index();
        self.invalidate();
        Ok(removed)
    }

    /// Move an element to a new position.
    ///
    /// # Errors
    ///
    /// Returns [`StepvizError::UnknownElement`] if `id` is not in the scene.
    pub fn move_to(
        &mut self,
        id: ElementId,
        to: Vec2,
    ) -> Result<(), StepvizError> {
        let idx = self.position_of(id)?;
        self.elements[idx].set_position(to);
        self.invalidate();
        Ok(())
    }

    fn position_of(&self, id: ElementId) -> Result<usize, StepvizError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(StepvizError::UnknownElement(id))
    }

    // -- Queries --

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.index.get(&id).map(|&i| &self.elements[i])
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Snapshot of the elements in ascending `x` order.
    #[must_use]
    pub fn ordered_view(&self) -> Vec<Element> {
        ordered_view(&self.elements)
    }

    /// Values in ascending `x` order.
    #[must_use]
    pub fn ordered_values(&self) -> Vec<Value> {
        values_of(&self.ordered_view())
    }

    // -- Render bookkeeping --

    /// Current mutation generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether element data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer consumed the current generation.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }
}
