//! The closed set of visual instructions the engine emits.

use std::fmt;

use glam::Vec2;

use crate::scene::ElementId;

/// Semantic highlight role. Drivers map roles to RGB via
/// [`ColorOptions`](crate::options::ColorOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Element currently being inspected or compared.
    Compare,
    /// Running minimum of a selection-sort scan.
    Minimum,
    /// Blink tint of a found element.
    Found,
}

/// Identifier of an on-screen announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementId(pub u32);

/// One visual instruction for an [`AnimationDriver`](super::AnimationDriver).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Tint an element.
    Highlight {
        /// Target element.
        id: ElementId,
        /// Highlight role.
        color: Color,
    },
    /// Return an element to its base fill.
    Clear {
        /// Target element.
        id: ElementId,
    },
    /// Animate an element to a new position.
    Move {
        /// Target element.
        id: ElementId,
        /// Destination.
        to: Vec2,
    },
    /// Fade in a text announcement.
    Announce {
        /// Handle used by the matching [`Effect::Dismiss`].
        id: AnnouncementId,
        /// Message shown to the user.
        text: String,
    },
    /// Fade out and remove an announcement.
    Dismiss {
        /// Announcement to remove.
        id: AnnouncementId,
    },
}

impl Effect {
    /// Element this effect acts on, if any.
    #[must_use]
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::Highlight { id, .. } | Self::Clear { id } | Self::Move { id, .. } => {
                Some(*id)
            }
            Self::Announce { .. } | Self::Dismiss { .. } => None,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highlight { id, color } => write!(f, "highlight {id} {color:?}"),
            Self::Clear { id } => write!(f, "clear {id}"),
            Self::Move { id, to } => {
                write!(f, "move {id} to ({:.1}, {:.1})", to.x, to.y)
            }
            Self::Announce { text, .. } => write!(f, "announce {text:?}"),
            Self::Dismiss { id } => write!(f, "dismiss announcement {}", id.0),
        }
    }
}

/// Effects that start together.
///
/// Effects inside a batch are applied in order and run concurrently; the
/// next batch of a sequence starts only after every effect here resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectBatch(Vec<Effect>);

impl EffectBatch {
    /// Batch of a single effect.
    #[must_use]
    pub fn single(effect: Effect) -> Self {
        Self(vec![effect])
    }

    /// Batch from any number of effects.
    #[must_use]
    pub fn of(effects: Vec<Effect>) -> Self {
        Self(effects)
    }

    /// Effects in application order.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.0
    }

    /// Whether the batch holds no effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EffectBatch {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_effects_name_their_target() {
        let id = ElementId(3);
        assert_eq!(Effect::Clear { id }.element(), Some(id));
        assert_eq!(
            Effect::Dismiss {
                id: AnnouncementId(0)
            }
            .element(),
            None
        );
    }

    #[test]
    fn display_is_log_friendly() {
        let effect = Effect::Move {
            id: ElementId(1),
            to: Vec2::new(10.0, 2.5),
        };
        assert_eq!(effect.to_string(), "move #1 to (10.0, 2.5)");
    }
}
