use glam::Vec2;

use super::{AlgorithmStateMachine, StepOutcome, Swap, TerminalResult};
use crate::animation::{Color, Effect, EffectBatch};
use crate::scene::Element;

/// Selection sort, one comparison per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSort;

/// Outer index, scan index, and the running minimum of `current..scan`.
///
/// `scan == current` opens an outer iteration, `scan == len` closes it with
/// the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Slot being filled.
    pub current: usize,
    /// Next element compared against the minimum.
    pub scan: usize,
    /// Index of the smallest value seen so far in this iteration.
    pub min: usize,
}

impl SelectionState {
    fn opening(current: usize) -> Self {
        Self {
            current,
            scan: current,
            min: current,
        }
    }
}

impl AlgorithmStateMachine for SelectionSort {
    type State = SelectionState;

    fn initial_state(&self, _len: usize) -> SelectionState {
        SelectionState::opening(0)
    }

    fn step(&self, state: &SelectionState, elements: &[Element]) -> StepOutcome<SelectionState> {
        let n = elements.len();
        let (Some(current), Some(minimum)) =
            (elements.get(state.current), elements.get(state.min))
        else {
            return StepOutcome::finish(*state, Vec::new(), TerminalResult::Sorted);
        };
        if n < 2 {
            return StepOutcome::finish(*state, Vec::new(), TerminalResult::Sorted);
        }

        if state.scan == state.current {
            let effects = vec![EffectBatch::single(Effect::Highlight {
                id: current.id,
                color: Color::Minimum,
            })];
            let next = SelectionState {
                scan: state.current + 1,
                min: state.current,
                ..*state
            };
            return StepOutcome::proceed(next, effects);
        }

        if let Some(candidate) = elements.get(state.scan) {
            let mut effects = vec![EffectBatch::single(Effect::Highlight {
                id: candidate.id,
                color: Color::Compare,
            })];
            let mut next = SelectionState {
                scan: state.scan + 1,
                ..*state
            };
            if candidate.value < minimum.value {
                effects.push(EffectBatch::single(Effect::Clear { id: minimum.id }));
                effects.push(EffectBatch::single(Effect::Highlight {
                    id: candidate.id,
                    color: Color::Minimum,
                }));
                next.min = state.scan;
            } else {
                effects.push(EffectBatch::single(Effect::Clear { id: candidate.id }));
            }
            return StepOutcome::proceed(next, effects);
        }

        // Scan exhausted: bring the minimum to `current`.
        let mut effects = Vec::new();
        let exchange = state.min != state.current;
        if exchange {
            effects.push(EffectBatch::single(Effect::Highlight {
                id: minimum.id,
                color: Color::Compare,
            }));
            effects.push(EffectBatch::of(vec![
                Effect::Move {
                    id: current.id,
                    to: Vec2::new(minimum.x, current.y),
                },
                Effect::Move {
                    id: minimum.id,
                    to: Vec2::new(current.x, minimum.y),
                },
            ]));
            effects.push(EffectBatch::of(vec![
                Effect::Clear { id: current.id },
                Effect::Clear { id: minimum.id },
            ]));
        } else {
            effects.push(EffectBatch::single(Effect::Clear { id: current.id }));
        }

        let outcome = if state.current + 2 >= n {
            StepOutcome::finish(*state, effects, TerminalResult::Sorted)
        } else {
            StepOutcome::proceed(SelectionState::opening(state.current + 1), effects)
        };
        if exchange {
            outcome.with_reorder(Swap {
                a: state.current,
                b: state.min,
            })
        } else {
            outcome
        }
    }
}
