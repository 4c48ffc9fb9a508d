//! Search and sort algorithms as pure, single-step state machines.
//!
//! Every algorithm implements [`AlgorithmStateMachine`]: given an explicit
//! state and the run's element snapshot, [`step`](AlgorithmStateMachine::step)
//! returns the next state, the effects that visualize the step, an optional
//! reordering for the caller to apply, and the terminal result once the run
//! is over. Nothing is mutated in place, so the same `(state, elements)`
//! always produces the same outcome.
//!
//! [`Machine`] erases the concrete algorithm so the playback controller is
//! written once against all four.

mod binary;
mod bubble;
mod linear;
mod selection;

use std::fmt;

pub use binary::{BinarySearch, BinaryState};
pub use bubble::{BubbleSort, BubbleState};
pub use linear::{LinearSearch, LinearState};
pub use selection::{SelectionSort, SelectionState};

use crate::animation::{Effect, EffectBatch};
use crate::scene::{Element, ElementId, Value};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalResult {
    /// The target was found.
    Found {
        /// Matching element.
        id: ElementId,
        /// Index of the match in the ordered view.
        index: usize,
        /// The searched value.
        target: Value,
    },
    /// The search range was exhausted without a match.
    NotFound {
        /// The searched value.
        target: Value,
    },
    /// The elements are in non-decreasing value order.
    Sorted,
}

impl fmt::Display for TerminalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { target, .. } => write!(f, "Node {target} found"),
            Self::NotFound { target } => write!(f, "Node {target} not found"),
            Self::Sorted => write!(f, "Sorting complete!"),
        }
    }
}

/// Exchange of two entries of the ordered view.
///
/// Applying it swaps the entries and their `x` coordinates, so the view
/// stays in ascending `x` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    /// Left index.
    pub a: usize,
    /// Right index.
    pub b: usize,
}

impl Swap {
    /// Apply the exchange to `elements`.
    pub fn apply(self, elements: &mut [Element]) {
        let (xa, xb) = (elements[self.a].x, elements[self.b].x);
        elements.swap(self.a, self.b);
        elements[self.a].x = xa;
        elements[self.b].x = xb;
    }
}

/// Everything one step produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome<S> {
    /// State for the following step.
    pub next: S,
    /// Effects in order, grouped into batches that run together.
    pub effects: Vec<EffectBatch>,
    /// Reordering the caller applies once the effects resolved.
    pub reorder: Option<Swap>,
    /// Set when this step ended the run.
    pub terminal: Option<TerminalResult>,
}

impl<S> StepOutcome<S> {
    /// Outcome that continues with `next`.
    fn proceed(next: S, effects: Vec<EffectBatch>) -> Self {
        Self {
            next,
            effects,
            reorder: None,
            terminal: None,
        }
    }

    /// Outcome that ends the run with `result`.
    fn finish(next: S, effects: Vec<EffectBatch>, result: TerminalResult) -> Self {
        Self {
            next,
            effects,
            reorder: None,
            terminal: Some(result),
        }
    }

    /// Record a reordering.
    fn with_reorder(mut self, swap: Swap) -> Self {
        self.reorder = Some(swap);
        self
    }

    /// Convert the state type, keeping everything else.
    #[must_use]
    pub fn map_state<T>(self, f: impl FnOnce(S) -> T) -> StepOutcome<T> {
        StepOutcome {
            next: f(self.next),
            effects: self.effects,
            reorder: self.reorder,
            terminal: self.terminal,
        }
    }

    /// All effects in application order, ignoring batch boundaries.
    pub fn flat_effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter().flat_map(EffectBatch::effects)
    }
}

/// A search or sort expressed as a pure step function.
pub trait AlgorithmStateMachine {
    /// Explicit per-run state.
    type State: Clone + PartialEq + fmt::Debug;

    /// State at the start of a run over `len` elements.
    fn initial_state(&self, len: usize) -> Self::State;

    /// Perform one step over the run's ordered view.
    fn step(
        &self,
        state: &Self::State,
        elements: &[Element],
    ) -> StepOutcome<Self::State>;
}

/// The four operations a user can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Scan left to right for `target`.
    LinearSearch {
        /// Value to find.
        target: Value,
    },
    /// Halve the range around `target`; assumes ascending values.
    BinarySearch {
        /// Value to find.
        target: Value,
    },
    /// Repeated adjacent exchanges until a clean pass.
    BubbleSort,
    /// Move the minimum of the unsorted suffix to its front.
    SelectionSort,
}

impl Algorithm {
    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearSearch { .. } => "linear search",
            Self::BinarySearch { .. } => "binary search",
            Self::BubbleSort => "bubble sort",
            Self::SelectionSort => "selection sort",
        }
    }

    /// The search target, for searches.
    #[must_use]
    pub fn target(self) -> Option<Value> {
        match self {
            Self::LinearSearch { target } | Self::BinarySearch { target } => {
                Some(target)
            }
            Self::BubbleSort | Self::SelectionSort => None,
        }
    }

    /// Whether this algorithm reorders elements.
    #[must_use]
    pub fn is_sort(self) -> bool {
        self.target().is_none()
    }

    /// Result of a run over fewer elements than the algorithm needs to take
    /// a single step, or `None` if stepping is required.
    #[must_use]
    pub fn trivial_result(self, len: usize) -> Option<TerminalResult> {
        match self.target() {
            Some(target) if len == 0 => Some(TerminalResult::NotFound { target }),
            Some(_) => None,
            None if len < 2 => Some(TerminalResult::Sorted),
            None => None,
        }
    }

    /// Machine positioned at the start of a run over `len` elements.
    #[must_use]
    pub fn machine(self, len: usize) -> Machine {
        match self {
            Self::LinearSearch { target } => {
                let m = LinearSearch { target };
                let state = m.initial_state(len);
                Machine::Linear(m, state)
            }
            Self::BinarySearch { target } => {
                let m = BinarySearch { target };
                let state = m.initial_state(len);
                Machine::Binary(m, state)
            }
            Self::BubbleSort => {
                let state = BubbleSort.initial_state(len);
                Machine::Bubble(BubbleSort, state)
            }
            Self::SelectionSort => {
                let state = SelectionSort.initial_state(len);
                Machine::Selection(SelectionSort, state)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(f, "{} for {target}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// A concrete machine paired with its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Machine {
    /// Linear search in progress.
    Linear(LinearSearch, LinearState),
    /// Binary search in progress.
    Binary(BinarySearch, BinaryState),
    /// Bubble sort in progress.
    Bubble(BubbleSort, BubbleState),
    /// Selection sort in progress.
    Selection(SelectionSort, SelectionState),
}

impl Machine {
    /// Step the wrapped machine; the outcome carries the advanced machine.
    #[must_use]
    pub fn step(&self, elements: &[Element]) -> StepOutcome<Machine> {
        match self {
            Self::Linear(m, s) => {
                m.step(s, elements).map_state(|s| Self::Linear(*m, s))
            }
            Self::Binary(m, s) => {
                m.step(s, elements).map_state(|s| Self::Binary(*m, s))
            }
            Self::Bubble(m, s) => {
                m.step(s, elements).map_state(|s| Self::Bubble(*m, s))
            }
            Self::Selection(m, s) => {
                m.step(s, elements).map_state(|s| Self::Selection(*m, s))
            }
        }
    }
}

/// Test fixtures shared by the machine modules.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Machine, StepOutcome, TerminalResult};
    use crate::scene::{values_of, Element, ElementId, Value};

    /// Elements with ids `0..` on a row spaced 100 apart.
    pub(crate) fn row(values: &[Value]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Element::new(ElementId(i as u32), v, i as f32 * 100.0, 0.0))
            .collect()
    }

    /// Drive `machine` to completion, applying reorders like the controller.
    /// Returns every outcome and the final view.
    pub(crate) fn run_to_end(
        mut machine: Machine,
        mut view: Vec<Element>,
    ) -> (Vec<StepOutcome<Machine>>, Vec<Element>, TerminalResult) {
        let mut outcomes = Vec::new();
        for _ in 0..10_000 {
            let outcome = machine.step(&view);
            if let Some(swap) = outcome.reorder {
                swap.apply(&mut view);
            }
            machine = outcome.next.clone();
            let terminal = outcome.terminal.clone();
            outcomes.push(outcome);
            if let Some(result) = terminal {
                return (outcomes, view, result);
            }
        }
        panic!("machine did not terminate on {:?}", values_of(&view));
    }
}
