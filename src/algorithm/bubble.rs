use glam::Vec2;

use super::{AlgorithmStateMachine, StepOutcome, Swap, TerminalResult};
use crate::animation::{Color, Effect, EffectBatch};
use crate::scene::Element;

/// Bubble sort with early exit after a pass without exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BubbleSort;

/// Position within the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleState {
    /// Completed passes.
    pub pass: usize,
    /// Left index of the pair compared next.
    pub position: usize,
    /// Whether the current pass exchanged anything yet.
    pub had_swap: bool,
}

impl AlgorithmStateMachine for BubbleSort {
    type State = BubbleState;

    fn initial_state(&self, _len: usize) -> BubbleState {
        BubbleState {
            pass: 0,
            position: 0,
            had_swap: false,
        }
    }

    fn step(&self, state: &BubbleState, elements: &[Element]) -> StepOutcome<BubbleState> {
        let p = state.position;
        let (Some(left), Some(right)) = (elements.get(p), elements.get(p + 1)) else {
            return StepOutcome::finish(*state, Vec::new(), TerminalResult::Sorted);
        };

        let mut effects = vec![EffectBatch::of(vec![
            Effect::Highlight {
                id: left.id,
                color: Color::Compare,
            },
            Effect::Highlight {
                id: right.id,
                color: Color::Compare,
            },
        ])];
        let swapped = left.value > right.value;
        if swapped {
            effects.push(EffectBatch::of(vec![
                Effect::Move {
                    id: left.id,
                    to: Vec2::new(right.x, left.y),
                },
                Effect::Move {
                    id: right.id,
                    to: Vec2::new(left.x, right.y),
                },
            ]));
        }
        effects.push(EffectBatch::of(vec![
            Effect::Clear { id: left.id },
            Effect::Clear { id: right.id },
        ]));

        let had_swap = state.had_swap || swapped;
        let end_of_pass = p + 2 >= elements.len();
        let mut outcome = match (end_of_pass, had_swap) {
            (true, false) => {
                let next = BubbleState { had_swap, ..*state };
                StepOutcome::finish(next, effects, TerminalResult::Sorted)
            }
            (true, true) => StepOutcome::proceed(
                BubbleState {
                    pass: state.pass + 1,
                    position: 0,
                    had_swap: false,
                },
                effects,
            ),
            (false, _) => StepOutcome::proceed(
                BubbleState {
                    pass: state.pass,
                    position: p + 1,
                    had_swap,
                },
                effects,
            ),
        };
        if swapped {
            outcome = outcome.with_reorder(Swap { a: p, b: p + 1 });
        }
        outcome
    }
}
