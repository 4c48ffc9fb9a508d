//! Drives one algorithm run at a time in automatic or manual mode.

use std::fmt;
use std::mem;

use glam::Vec2;
use web_time::{Duration, Instant};

use super::cancellation::{CancellationSource, CancellationToken};
use super::timer::Timer;
use crate::algorithm::{Algorithm, Machine, Swap, TerminalResult};
use crate::animation::{AnimationDriver, Effect, EffectBatch, EffectSequence};
use crate::error::StepvizError;
use crate::scene::{is_ascending, ordered_view, Element, ElementId, RowLayout};

/// How steps are triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMode {
    /// Step, wait the step delay, step again until done.
    #[default]
    Auto,
    /// One step per [`PlaybackController::advance`].
    Manual,
}

/// Per-run settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunOptions {
    /// How steps are triggered.
    pub mode: DriveMode,
    /// Pause between automatic steps, already speed-scaled.
    pub step_delay: Duration,
    /// Row to line elements up on before a sort's first step.
    pub arrange: Option<RowLayout>,
    /// Minimum slot distance when a sort has to spread out elements that
    /// share an `x` and no `arrange` row was given.
    pub spacing: f32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: DriveMode::Auto,
            step_delay: Duration::ZERO,
            arrange: None,
            spacing: 88.0,
        }
    }
}

/// Non-fatal warning raised when a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Binary search over values that are not in ascending order.
    UnsortedBinarySearch,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsortedBinarySearch => {
                f.write_str("values are not sorted; binary search may miss the target")
            }
        }
    }
}

/// What [`PlaybackController::start`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Started {
    /// A run is now in progress.
    Running {
        /// Warning the host should surface.
        advisory: Option<Advisory>,
    },
    /// The run needed no steps.
    Finished(TerminalResult),
}

/// Progress reported from [`PlaybackController::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// A step's effects all resolved. `step` counts from 1.
    StepCompleted {
        /// Number of completed steps in this run.
        step: usize,
    },
    /// Elements now rest at new positions.
    Repositioned(Vec<(ElementId, Vec2)>),
    /// The run ended.
    Finished(TerminalResult),
    /// The run was cancelled through a [`PlaybackController::cancel_handle`].
    Cancelled,
}

/// Bookkeeping applied once the effects in flight resolved.
#[derive(Debug, Default)]
struct Pending {
    reorder: Option<Swap>,
    placements: Vec<(usize, Vec2)>,
    terminal: Option<TerminalResult>,
    is_step: bool,
}

#[derive(Debug)]
enum Phase {
    /// Auto mode steps immediately; manual mode waits for `advance`.
    Ready,
    Waiting(Timer),
    Animating {
        sequence: EffectSequence,
        pending: Pending,
    },
}

#[derive(Debug)]
struct Run {
    algorithm: Algorithm,
    machine: Machine,
    view: Vec<Element>,
    mode: DriveMode,
    step_delay: Duration,
    source: CancellationSource,
    phase: Phase,
    steps: usize,
    started_at: Instant,
}

impl Run {
    fn begin_step(&mut self) {
        let outcome = self.machine.step(&self.view);
        log::debug!(
            "{} step {}: {} effect batch(es){}",
            self.algorithm,
            self.steps + 1,
            outcome.effects.len(),
            if outcome.reorder.is_some() { ", swap" } else { "" },
        );
        self.machine = outcome.next;
        self.phase = Phase::Animating {
            sequence: EffectSequence::new(outcome.effects),
            pending: Pending {
                reorder: outcome.reorder,
                placements: Vec::new(),
                terminal: outcome.terminal,
                is_step: true,
            },
        };
    }

    /// Commit what the resolved effects showed. Returns the terminal result
    /// if the run is over.
    fn settle(
        &mut self,
        pending: Pending,
        now: Instant,
        events: &mut Vec<PlaybackEvent>,
    ) -> Option<TerminalResult> {
        let mut moved = Vec::new();
        if let Some(swap) = pending.reorder {
            swap.apply(&mut self.view);
            moved.push(self.view[swap.a]);
            moved.push(self.view[swap.b]);
        }
        for (index, position) in pending.placements {
            if let Some(element) = self.view.get_mut(index) {
                element.set_position(position);
                moved.push(*element);
            }
        }
        if !moved.is_empty() {
            events.push(PlaybackEvent::Repositioned(
                moved.iter().map(|e| (e.id, e.position())).collect(),
            ));
        }
        if pending.is_step {
            self.steps += 1;
            events.push(PlaybackEvent::StepCompleted { step: self.steps });
        }

        if pending.terminal.is_some() {
            return pending.terminal;
        }
        self.phase = match (self.mode, pending.is_step) {
            (DriveMode::Auto, true) => {
                Phase::Waiting(Timer::once(self.source.token(), now, self.step_delay))
            }
            _ => Phase::Ready,
        };
        None
    }
}

/// Owns the mutable state of at most one algorithm run.
///
/// The host calls [`tick`](Self::tick) every frame. Between ticks nothing
/// happens on its own; effects resolve and delays elapse only as the host's
/// clock advances.
#[derive(Debug, Default)]
pub struct PlaybackController {
    run: Option<Run>,
}

impl PlaybackController {
    /// Idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin `algorithm` over a snapshot of `elements` in ascending `x`.
    ///
    /// # Errors
    ///
    /// [`StepvizError::Busy`] if a run is already in progress.
    pub fn start(
        &mut self,
        algorithm: Algorithm,
        elements: &[Element],
        options: RunOptions,
        now: Instant,
    ) -> Result<Started, StepvizError> {
        if self.is_running() {
            log::warn!("refusing to start {algorithm}: a run is in progress");
            return Err(StepvizError::Busy);
        }
        let view = ordered_view(elements);
        if let Some(result) = algorithm.trivial_result(view.len()) {
            log::info!("{algorithm} over {} element(s): {result}", view.len());
            return Ok(Started::Finished(result));
        }

        let advisory = (matches!(algorithm, Algorithm::BinarySearch { .. })
            && !is_ascending(&view))
        .then_some(Advisory::UnsortedBinarySearch);
        if let Some(advisory) = advisory {
            log::warn!("{algorithm}: {advisory}");
        }

        // Swaps trade x positions, so a sort needs every element on its own
        // slot before the first step.
        let row = if algorithm.is_sort() {
            options.arrange.or_else(|| {
                has_shared_x(&view).then(|| {
                    log::debug!("{algorithm}: spreading out elements that share an x");
                    RowLayout::spanning(&view, options.spacing)
                })
            })
        } else {
            None
        };
        let phase = row.map_or(Phase::Ready, |row| arrangement(&view, &row));
        log::info!(
            "starting {algorithm} over {} element(s) ({:?})",
            view.len(),
            options.mode
        );
        self.run = Some(Run {
            algorithm,
            machine: algorithm.machine(view.len()),
            view,
            mode: options.mode,
            step_delay: options.step_delay,
            source: CancellationSource::new(),
            phase,
            steps: 0,
            started_at: now,
        });
        Ok(Started::Running { advisory })
    }

    /// Make progress up to `now`: poll in-flight effects, fire the step
    /// delay, and take auto steps.
    pub fn tick(
        &mut self,
        now: Instant,
        driver: &mut dyn AnimationDriver,
    ) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        let Some(run) = self.run.as_mut() else {
            return events;
        };
        if run.source.is_cancelled() {
            log::info!("{} cancelled after {} step(s)", run.algorithm, run.steps);
            if let Phase::Animating { sequence, .. } = &mut run.phase {
                sequence.abandon(driver);
            }
            self.run = None;
            events.push(PlaybackEvent::Cancelled);
            return events;
        }

        loop {
            match &mut run.phase {
                Phase::Ready => match run.mode {
                    DriveMode::Auto => run.begin_step(),
                    DriveMode::Manual => break,
                },
                Phase::Waiting(timer) => {
                    if timer.poll(now) == 0 {
                        break;
                    }
                    run.phase = Phase::Ready;
                }
                Phase::Animating { sequence, .. } => {
                    if sequence.poll(driver, now).is_pending() {
                        break;
                    }
                    let Phase::Animating { pending, .. } =
                        mem::replace(&mut run.phase, Phase::Ready)
                    else {
                        break;
                    };
                    if let Some(result) = run.settle(pending, now, &mut events) {
                        log::info!(
                            "{} finished after {} step(s) in {:?}: {result}",
                            run.algorithm,
                            run.steps,
                            now.saturating_duration_since(run.started_at),
                        );
                        self.run = None;
                        events.push(PlaybackEvent::Finished(result));
                        break;
                    }
                }
            }
        }
        events
    }

    /// Take one manual step. Returns `false`, doing nothing, unless a
    /// manual run is waiting for input.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            log::debug!("advance ignored");
            return false;
        }
        if let Some(run) = self.run.as_mut() {
            run.begin_step();
        }
        true
    }

    /// Whether [`advance`](Self::advance) would take a step.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.run.as_ref().is_some_and(|run| {
            run.mode == DriveMode::Manual
                && matches!(run.phase, Phase::Ready)
                && !run.source.is_cancelled()
        })
    }

    /// Abort the current run. No further effects are applied and no
    /// terminal result is produced. Returns whether a run was active.
    pub fn cancel(&mut self, driver: &mut dyn AnimationDriver) -> bool {
        let Some(mut run) = self.run.take() else {
            return false;
        };
        let _ = run.source.cancel();
        if let Phase::Animating { sequence, .. } = &mut run.phase {
            sequence.abandon(driver);
        }
        log::info!("{} cancelled after {} step(s)", run.algorithm, run.steps);
        true
    }

    /// Token observing the current run.
    #[must_use]
    pub fn cancellation_token(&self) -> Option<CancellationToken> {
        self.run.as_ref().map(|run| run.source.token())
    }

    /// Source controlling the current run, for cancelling from elsewhere.
    /// Cancelling it ends the run on the next [`tick`](Self::tick), which
    /// reports [`PlaybackEvent::Cancelled`] and applies nothing more.
    #[must_use]
    pub fn cancel_handle(&self) -> Option<CancellationSource> {
        self.run.as_ref().map(|run| run.source.clone())
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Drive mode of the current run.
    #[must_use]
    pub fn mode(&self) -> Option<DriveMode> {
        self.run.as_ref().map(|run| run.mode)
    }

    /// Algorithm of the current run.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.run.as_ref().map(|run| run.algorithm)
    }

    /// Steps completed so far in the current run.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.steps)
    }
}

fn has_shared_x(view: &[Element]) -> bool {
    view.windows(2).any(|pair| pair[0].x == pair[1].x)
}

/// Prelude phase moving every element of `view` onto `row`.
fn arrangement(view: &[Element], row: &RowLayout) -> Phase {
    let placements: Vec<(usize, Vec2)> =
        (0..view.len()).map(|i| (i, row.slot(i))).collect();
    let moves = view
        .iter()
        .zip(&placements)
        .filter(|(element, (_, slot))| element.position() != *slot)
        .map(|(element, &(_, to))| Effect::Move { id: element.id, to })
        .collect();
    Phase::Animating {
        sequence: EffectSequence::new(vec![EffectBatch::of(moves)]),
        pending: Pending {
            placements,
            ..Pending::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RecordingDriver;
    use crate::scene::{values_of, ElementId};

    fn row(values: &[i64]) -> Vec<Element> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Element::new(ElementId(i as u32), v, i as f32 * 100.0, 0.0))
            .collect()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn auto(delay: u64) -> RunOptions {
        RunOptions {
            step_delay: ms(delay),
            ..RunOptions::default()
        }
    }

    fn manual() -> RunOptions {
        RunOptions {
            mode: DriveMode::Manual,
            ..RunOptions::default()
        }
    }

    fn finished(events: &[PlaybackEvent]) -> Option<&TerminalResult> {
        events.iter().find_map(|e| match e {
            PlaybackEvent::Finished(result) => Some(result),
            _ => None,
        })
    }

    /// Tick every 10 ms until the run ends, returning all events.
    fn run_out(
        controller: &mut PlaybackController,
        driver: &mut RecordingDriver,
        t0: Instant,
    ) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        for frame in 0..10_000 {
            events.extend(controller.tick(t0 + ms(frame * 10), driver));
            if !controller.is_running() {
                break;
            }
        }
        events
    }

    #[test]
    fn bubble_auto_sorts_and_reports_positions() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::with_latency(2);
        let t0 = Instant::now();
        let elements = row(&[5, 3, 8, 1]);

        let started = controller.start(Algorithm::BubbleSort, &elements, auto(30), t0);
        assert_eq!(started.unwrap(), Started::Running { advisory: None });
        let events = run_out(&mut controller, &mut driver, t0);

        assert_eq!(finished(&events), Some(&TerminalResult::Sorted));
        assert!(!controller.is_running());

        // Replay repositions onto the input to get the final order.
        let mut positions = elements.clone();
        for event in &events {
            if let PlaybackEvent::Repositioned(moves) = event {
                for &(id, to) in moves {
                    positions[id.0 as usize].set_position(to);
                }
            }
        }
        assert_eq!(values_of(&ordered_view(&positions)), vec![1, 3, 5, 8]);
    }

    #[test]
    fn step_delay_separates_auto_steps() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::LinearSearch { target: 7 }, &row(&[4, 2, 9]), auto(300), t0)
            .unwrap();

        let first = controller.tick(t0, &mut driver);
        assert_eq!(first, vec![PlaybackEvent::StepCompleted { step: 1 }]);
        assert!(controller.tick(t0 + ms(299), &mut driver).is_empty());
        assert_eq!(
            controller.tick(t0 + ms(300), &mut driver),
            vec![PlaybackEvent::StepCompleted { step: 2 }]
        );
    }

    #[test]
    fn linear_search_visits_all_then_not_found() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::LinearSearch { target: 7 }, &row(&[4, 2, 9]), auto(0), t0)
            .unwrap();

        let events = controller.tick(t0, &mut driver);
        assert_eq!(finished(&events), Some(&TerminalResult::NotFound { target: 7 }));
        let steps = events
            .iter()
            .filter(|e| matches!(e, PlaybackEvent::StepCompleted { .. }))
            .count();
        assert_eq!(steps, 3);
        let highlighted: Vec<ElementId> = driver
            .applied()
            .iter()
            .filter_map(|e| match e {
                Effect::Highlight { id, .. } => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(highlighted, vec![ElementId(0), ElementId(1), ElementId(2)]);
    }

    #[test]
    fn manual_advance_ignored_while_resolving() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::with_latency(1);
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::BinarySearch { target: 8 }, &row(&[1, 3, 5, 8]), manual(), t0)
            .unwrap();

        assert!(controller.tick(t0, &mut driver).is_empty());
        assert!(controller.advance());
        assert!(!controller.can_advance());
        // Effects applied but not yet resolved.
        assert!(controller.tick(t0, &mut driver).is_empty());
        assert!(!controller.advance());
        assert_eq!(
            controller.tick(t0, &mut driver),
            vec![PlaybackEvent::StepCompleted { step: 1 }]
        );
        assert!(controller.can_advance());
        assert_eq!(controller.steps(), 1);
    }

    #[test]
    fn binary_search_scenario_visits_mids_in_order() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::BinarySearch { target: 8 }, &row(&[1, 3, 5, 8]), manual(), t0)
            .unwrap();

        let mut result = None;
        let mut steps = 0;
        while result.is_none() && steps < 10 {
            assert!(controller.advance());
            steps += 1;
            result = finished(&controller.tick(t0, &mut driver)).cloned();
        }
        assert_eq!(steps, 3);
        assert!(matches!(result, Some(TerminalResult::Found { index: 3, .. })));
        let mids: Vec<u32> = driver
            .applied()
            .iter()
            .filter_map(|e| match e {
                Effect::Highlight { id, .. } => Some(id.0),
                _ => None,
            })
            .collect();
        assert_eq!(mids, vec![1, 2, 3]);
        assert!(!controller.advance());
    }

    #[test]
    fn cancel_mid_auto_applies_nothing_more() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::with_latency(3);
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::BubbleSort, &row(&[4, 3, 2, 1]), auto(50), t0)
            .unwrap();

        for frame in 0..6 {
            let events = controller.tick(t0 + ms(frame * 10), &mut driver);
            assert!(finished(&events).is_none());
        }
        let applied = driver.applied().len();
        assert!(applied > 0);

        assert!(controller.cancel(&mut driver));
        assert!(!controller.is_running());
        assert_eq!(driver.pending_count(), 0);
        for frame in 6..200 {
            assert!(controller.tick(t0 + ms(frame * 10), &mut driver).is_empty());
        }
        assert_eq!(driver.applied().len(), applied);
        assert!(!controller.cancel(&mut driver));
    }

    #[test]
    fn cancel_handle_ends_run_on_next_tick() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::with_latency(3);
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::BubbleSort, &row(&[4, 3, 2, 1]), auto(50), t0)
            .unwrap();
        let token = controller.cancellation_token().unwrap();
        let handle = controller.cancel_handle().unwrap();

        assert!(controller.tick(t0, &mut driver).is_empty());
        let applied = driver.applied().len();
        assert!(applied > 0);

        assert!(handle.cancel());
        assert!(token.is_cancelled());
        assert!(controller.is_running());
        assert!(!controller.can_advance());
        assert_eq!(
            controller.tick(t0 + ms(10), &mut driver),
            vec![PlaybackEvent::Cancelled]
        );
        assert!(!controller.is_running());
        assert_eq!(driver.pending_count(), 0);
        for frame in 2..100 {
            assert!(controller.tick(t0 + ms(frame * 10), &mut driver).is_empty());
        }
        assert_eq!(driver.applied().len(), applied);
        assert!(!handle.cancel());
    }

    #[test]
    fn stale_cancel_handle_leaves_next_run_alone() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let _ = controller
            .start(Algorithm::SelectionSort, &row(&[3, 1, 2]), manual(), t0)
            .unwrap();
        let handle = controller.cancel_handle().unwrap();
        assert!(controller.cancel(&mut driver));

        let _ = controller
            .start(Algorithm::SelectionSort, &row(&[3, 1, 2]), manual(), t0)
            .unwrap();
        assert!(!handle.cancel());
        assert!(controller.tick(t0, &mut driver).is_empty());
        assert!(controller.can_advance());
    }

    #[test]
    fn refuses_second_run() {
        let mut controller = PlaybackController::new();
        let t0 = Instant::now();
        let elements = row(&[2, 1]);
        let _ = controller
            .start(Algorithm::BubbleSort, &elements, manual(), t0)
            .unwrap();
        assert!(matches!(
            controller.start(Algorithm::SelectionSort, &elements, manual(), t0),
            Err(StepvizError::Busy)
        ));
        assert_eq!(controller.algorithm(), Some(Algorithm::BubbleSort));
    }

    #[test]
    fn trivial_runs_finish_without_steps() {
        let mut controller = PlaybackController::new();
        let t0 = Instant::now();
        assert_eq!(
            controller
                .start(Algorithm::LinearSearch { target: 1 }, &[], auto(0), t0)
                .unwrap(),
            Started::Finished(TerminalResult::NotFound { target: 1 })
        );
        assert_eq!(
            controller
                .start(Algorithm::BubbleSort, &row(&[4]), auto(0), t0)
                .unwrap(),
            Started::Finished(TerminalResult::Sorted)
        );
        assert!(!controller.is_running());
    }

    #[test]
    fn unsorted_binary_search_warns_and_proceeds() {
        let mut controller = PlaybackController::new();
        let started = controller
            .start(
                Algorithm::BinarySearch { target: 3 },
                &row(&[9, 3, 1]),
                manual(),
                Instant::now(),
            )
            .unwrap();
        assert_eq!(
            started,
            Started::Running {
                advisory: Some(Advisory::UnsortedBinarySearch)
            }
        );
        assert!(controller.is_running());
    }

    #[test]
    fn sort_spreads_stacked_elements_before_stepping() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let stacked = vec![
            Element::new(ElementId(0), 5, 100.0, 0.0),
            Element::new(ElementId(1), 3, 100.0, 0.0),
        ];

        let _ = controller
            .start(Algorithm::BubbleSort, &stacked, auto(0), t0)
            .unwrap();
        let events = run_out(&mut controller, &mut driver, t0);
        assert_eq!(finished(&events), Some(&TerminalResult::Sorted));

        let mut positions = stacked.clone();
        for event in &events {
            if let PlaybackEvent::Repositioned(moves) = event {
                for &(id, to) in moves {
                    positions[id.0 as usize].set_position(to);
                }
            }
        }
        assert_ne!(positions[0].x, positions[1].x);
        assert_eq!(values_of(&ordered_view(&positions)), vec![3, 5]);
    }

    #[test]
    fn searches_leave_stacked_elements_in_place() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let stacked = vec![
            Element::new(ElementId(0), 5, 100.0, 0.0),
            Element::new(ElementId(1), 3, 100.0, 0.0),
        ];
        let _ = controller
            .start(Algorithm::LinearSearch { target: 3 }, &stacked, auto(0), t0)
            .unwrap();
        let events = controller.tick(t0, &mut driver);
        assert!(!events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Repositioned(_))));
        assert!(!driver
            .applied()
            .iter()
            .any(|e| matches!(e, Effect::Move { .. })));
    }

    #[test]
    fn arrangement_prelude_precedes_first_step() {
        let mut controller = PlaybackController::new();
        let mut driver = RecordingDriver::new();
        let t0 = Instant::now();
        let layout = RowLayout {
            start_x: 50.0,
            center_y: 200.0,
            spacing: 100.0,
        };
        let options = RunOptions {
            arrange: Some(layout),
            ..manual()
        };
        let _ = controller
            .start(Algorithm::BubbleSort, &row(&[2, 1]), options, t0)
            .unwrap();

        let events = controller.tick(t0, &mut driver);
        assert_eq!(
            events,
            vec![PlaybackEvent::Repositioned(vec![
                (ElementId(0), Vec2::new(50.0, 200.0)),
                (ElementId(1), Vec2::new(150.0, 200.0)),
            ])]
        );
        assert_eq!(driver.applied().len(), 2);
        assert_eq!(controller.steps(), 0);

        // The swap moves use the arranged coordinates.
        assert!(controller.advance());
        let _ = controller.tick(t0, &mut driver);
        assert!(driver.applied().contains(&Effect::Move {
            id: ElementId(0),
            to: Vec2::new(150.0, 200.0)
        }));
    }
}
