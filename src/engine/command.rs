//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a button, a key, a
//! drag gesture or a script, is a [`Command`]. Consumers construct commands
//! and pass them to [`Visualizer::execute`](super::Visualizer::execute).

use glam::Vec2;

use crate::algorithm::Algorithm;
use crate::scene::{ElementId, Value};

// ── Command payload types ────────────────────────────────────────────────

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Left-to-right scan.
    Linear,
    /// Range halving over ascending values.
    Binary,
}

impl SearchKind {
    /// The algorithm searching for `target`.
    #[must_use]
    pub fn algorithm(self, target: Value) -> Algorithm {
        match self {
            Self::Linear => Algorithm::LinearSearch { target },
            Self::Binary => Algorithm::BinarySearch { target },
        }
    }
}

/// Which sort to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Adjacent exchanges.
    Bubble,
    /// Minimum selection.
    Selection,
}

impl SortKind {
    /// The sorting algorithm.
    #[must_use]
    pub fn algorithm(self) -> Algorithm {
        match self {
            Self::Bubble => Algorithm::BubbleSort,
            Self::Selection => Algorithm::SelectionSort,
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete operation the engine can perform.
///
/// The engine never cares how a command was triggered:
///
/// ```ignore
/// engine.execute(Command::StartSort { kind: SortKind::Bubble }, now, &mut driver)?;
/// engine.execute(Command::Advance, now, &mut driver)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ── Runs ────────────────────────────────────────────────────────
    /// Search for the value typed by the user.
    StartSearch {
        /// Which search.
        kind: SearchKind,
        /// Raw target text; parsed before anything starts.
        target: String,
    },

    /// Sort the elements by value, left to right.
    StartSort {
        /// Which sort.
        kind: SortKind,
    },

    /// Take one step of a manual run.
    Advance,

    /// Abort the current run and take down any announcement.
    Cancel,

    /// Choose manual stepping or automatic playback for future runs.
    SetStepping {
        /// `true` for manual stepping.
        enabled: bool,
    },

    // ── Elements ────────────────────────────────────────────────────
    /// Drop an element at a new position.
    MoveElement {
        /// Element to move.
        id: ElementId,
        /// New position.
        to: Vec2,
    },

    /// Add an element.
    InsertElement {
        /// Its value.
        value: Value,
        /// Where it appears.
        at: Vec2,
    },

    /// Delete an element.
    RemoveElement {
        /// Element to delete.
        id: ElementId,
    },
}

impl Command {
    /// Whether the command edits the element collection.
    #[must_use]
    pub fn mutates_elements(&self) -> bool {
        matches!(
            self,
            Self::MoveElement { .. } | Self::InsertElement { .. } | Self::RemoveElement { .. }
        )
    }

    /// Whether the command is refused while a run or announcement is up.
    /// Only stepping and cancelling act on a busy engine.
    #[must_use]
    pub fn requires_idle(&self) -> bool {
        self.mutates_elements()
            || matches!(
                self,
                Self::StartSearch { .. } | Self::StartSort { .. } | Self::SetStepping { .. }
            )
    }
}
