use super::{AlgorithmStateMachine, StepOutcome, TerminalResult};
use crate::animation::{Color, Effect, EffectBatch};
use crate::scene::{Element, ElementId, Value};

/// Binary search over a view assumed to be in ascending value order.
///
/// On an unsorted view the run still terminates, with an unspecified
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySearch {
    /// Value to find.
    pub target: Value,
}

/// Inclusive search range plus the element highlighted by the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryState {
    /// Lower bound of the remaining range.
    pub left: isize,
    /// Upper bound of the remaining range; below `left` once exhausted.
    pub right: isize,
    /// Midpoint tinted by the previous step, cleared by the next.
    pub highlighted: Option<ElementId>,
}

impl BinaryState {
    fn is_exhausted(&self) -> bool {
        self.left > self.right
    }
}

impl AlgorithmStateMachine for BinarySearch {
    type State = BinaryState;

    fn initial_state(&self, len: usize) -> BinaryState {
        BinaryState {
            left: 0,
            right: len as isize - 1,
            highlighted: None,
        }
    }

    fn step(&self, state: &BinaryState, elements: &[Element]) -> StepOutcome<BinaryState> {
        let not_found = TerminalResult::NotFound {
            target: self.target,
        };
        let clear_previous = state.highlighted.map(|id| Effect::Clear { id });

        let mid = (state.left + state.right).div_euclid(2);
        let node = usize::try_from(mid).ok().and_then(|i| elements.get(i));
        let (Some(node), false) = (node, state.is_exhausted()) else {
            let effects = clear_previous
                .map(EffectBatch::single)
                .into_iter()
                .collect();
            let next = BinaryState {
                highlighted: None,
                ..*state
            };
            return StepOutcome::finish(next, effects, not_found);
        };

        let mut batch = vec![Effect::Highlight {
            id: node.id,
            color: Color::Compare,
        }];
        batch.extend(clear_previous.filter(|e| e.element() != Some(node.id)));
        let mut effects = vec![EffectBatch::of(batch)];

        if node.value == self.target {
            let found = TerminalResult::Found {
                id: node.id,
                index: mid as usize,
                target: self.target,
            };
            let next = BinaryState {
                highlighted: Some(node.id),
                ..*state
            };
            return StepOutcome::finish(next, effects, found);
        }

        let mut next = BinaryState {
            highlighted: Some(node.id),
            ..*state
        };
        if node.value < self.target {
            next.left = mid + 1;
        } else {
            next.right = mid - 1;
        }

        if next.is_exhausted() {
            effects.push(EffectBatch::single(Effect::Clear { id: node.id }));
            next.highlighted = None;
            return StepOutcome::finish(next, effects, not_found);
        }
        StepOutcome::proceed(next, effects)
    }
}
