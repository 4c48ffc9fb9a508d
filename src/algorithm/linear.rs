use super::{AlgorithmStateMachine, StepOutcome, TerminalResult};
use crate::animation::{Color, Effect, EffectBatch};
use crate::scene::{Element, Value};

/// Left-to-right scan for a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearSearch {
    /// Value to find.
    pub target: Value,
}

/// Index of the next element to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearState {
    /// Next index; only ever grows.
    pub cursor: usize,
}

impl AlgorithmStateMachine for LinearSearch {
    type State = LinearState;

    fn initial_state(&self, _len: usize) -> LinearState {
        LinearState { cursor: 0 }
    }

    fn step(&self, state: &LinearState, elements: &[Element]) -> StepOutcome<LinearState> {
        let cursor = state.cursor;
        let Some(current) = elements.get(cursor) else {
            return StepOutcome::finish(
                *state,
                Vec::new(),
                TerminalResult::NotFound {
                    target: self.target,
                },
            );
        };

        let mut batch = vec![Effect::Highlight {
            id: current.id,
            color: Color::Compare,
        }];
        if let Some(previous) = cursor.checked_sub(1).and_then(|i| elements.get(i)) {
            batch.push(Effect::Clear { id: previous.id });
        }
        let mut effects = vec![EffectBatch::of(batch)];

        if current.value == self.target {
            return StepOutcome::finish(
                *state,
                effects,
                TerminalResult::Found {
                    id: current.id,
                    index: cursor,
                    target: self.target,
                },
            );
        }
        if cursor + 1 >= elements.len() {
            effects.push(EffectBatch::single(Effect::Clear { id: current.id }));
            return StepOutcome::finish(
                *state,
                effects,
                TerminalResult::NotFound {
                    target: self.target,
                },
            );
        }
        StepOutcome::proceed(LinearState { cursor: cursor + 1 }, effects)
    }
}
