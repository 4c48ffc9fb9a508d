//! The single object a UI talks to.
//!
//! [`Visualizer`] owns the element collection, the playback controller, the
//! result reporter and the options. Hosts send it [`Command`]s and call
//! [`tick`](Visualizer::tick) once per frame with their
//! [`AnimationDriver`].

mod command;
mod options;

use std::{fmt, mem};

pub use command::{Command, SearchKind, SortKind};
use glam::Vec2;
use web_time::Instant;

use crate::algorithm::{Algorithm, TerminalResult};
use crate::animation::AnimationDriver;
use crate::error::StepvizError;
use crate::options::Options;
use crate::playback::{
    Advisory, CancellationSource, DriveMode, PlaybackController, PlaybackEvent, RunOptions,
    Started,
};
use crate::reporter::ResultReporter;
use crate::scene::parse::parse_target;
use crate::scene::{ElementId, RowLayout, Scene, Value};

/// What happened since the previous [`tick`](Visualizer::tick).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A run started with a warning.
    Advisory(Advisory),
    /// A step's effects all resolved.
    StepCompleted {
        /// Steps completed in the current run, from 1.
        step: usize,
    },
    /// A run ended; its announcement is now showing.
    Finished(TerminalResult),
    /// A run was cancelled before it ended.
    Cancelled,
    /// The result announcement went away; the engine is no longer busy.
    AnnouncementCleared,
}

/// Algorithm-stepping engine.
///
/// # Frame loop
///
/// Each frame, call [`tick`](Self::tick) with the current instant and the
/// driver that presents effects. Runs, delays, blinks and announcement
/// windows only progress inside `tick`.
///
/// # Busy state
///
/// While a run or its result announcement is active the engine is
/// [busy](Self::is_busy): new runs, mode switches and element edits are
/// refused with [`StepvizError::Busy`].
pub struct Visualizer {
    /// Authoritative element collection.
    scene: Scene,
    /// Playback, timing, color and layout options.
    options: Options,
    /// Currently applied options preset name, if any.
    active_preset: Option<String>,
    controller: PlaybackController,
    reporter: ResultReporter,
    /// Events raised outside `tick`, handed out by the next one.
    queued: Vec<EngineEvent>,
}

// =============================================================================
// Core
// =============================================================================

impl Visualizer {
    /// Engine with an empty collection.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_scene(Scene::new(), options)
    }

    /// Engine with one element per value on a centered row.
    #[must_use]
    pub fn with_values(values: &[Value], options: Options) -> Self {
        let row = RowLayout::centered(values.len(), &options.layout);
        Self::with_scene(Scene::from_values(values, &row), options)
    }

    /// Engine over an existing collection.
    #[must_use]
    pub fn with_scene(scene: Scene, options: Options) -> Self {
        Self {
            reporter: ResultReporter::new(&options.timing),
            scene,
            options,
            active_preset: None,
            controller: PlaybackController::new(),
            queued: Vec::new(),
        }
    }

    /// Perform `command`.
    ///
    /// # Errors
    ///
    /// [`StepvizError::Busy`] for runs, mode switches and element edits
    /// while busy; [`StepvizError::EmptyTarget`] or
    /// [`StepvizError::InvalidTarget`] for a bad search target;
    /// [`StepvizError::UnknownElement`] for edits naming a missing element.
    pub fn execute(
        &mut self,
        command: Command,
        now: Instant,
        driver: &mut dyn AnimationDriver,
    ) -> Result<(), StepvizError> {
        if command.requires_idle() {
            self.ensure_idle(format_args!("{command:?}"))?;
        }
        match command {
            Command::StartSearch { kind, target } => {
                let target = parse_target(&target)?;
                self.start(kind.algorithm(target), now, driver)
            }
            Command::StartSort { kind } => self.start(kind.algorithm(), now, driver),
            Command::Advance => {
                let _ = self.advance();
                Ok(())
            }
            Command::Cancel => {
                self.cancel(now, driver);
                Ok(())
            }
            Command::SetStepping { enabled } => {
                self.options.playback.stepping = enabled;
                log::info!("stepping {}", if enabled { "on" } else { "off" });
                Ok(())
            }
            Command::MoveElement { id, to } => self.scene.move_to(id, to),
            Command::InsertElement { value, at } => {
                let _ = self.insert_element(value, at)?;
                Ok(())
            }
            Command::RemoveElement { id } => self.scene.remove(id).map(|_| ()),
        }
    }

    /// Make progress up to `now` and collect what happened.
    pub fn tick(
        &mut self,
        now: Instant,
        driver: &mut dyn AnimationDriver,
    ) -> Vec<EngineEvent> {
        let mut events = mem::take(&mut self.queued);
        for event in self.controller.tick(now, driver) {
            match event {
                PlaybackEvent::StepCompleted { step } => {
                    events.push(EngineEvent::StepCompleted { step });
                }
                PlaybackEvent::Repositioned(moves) => {
                    for (id, to) in moves {
                        if let Err(e) = self.scene.move_to(id, to) {
                            log::warn!("dropping reposition: {e}");
                        }
                    }
                }
                PlaybackEvent::Finished(result) => {
                    let _ = self.reporter.report(&result, now, driver);
                    events.push(EngineEvent::Finished(result));
                }
                PlaybackEvent::Cancelled => events.push(EngineEvent::Cancelled),
            }
        }
        if self.reporter.tick(now, driver) {
            events.push(EngineEvent::AnnouncementCleared);
        }
        events
    }

    /// Take one manual step. Returns `false` if no manual run is waiting.
    pub fn advance(&mut self) -> bool {
        self.controller.advance()
    }

    /// Abort the current run and tear down any announcement. Never fails.
    pub fn cancel(&mut self, now: Instant, driver: &mut dyn AnimationDriver) {
        if self.controller.cancel(driver) {
            self.queued.push(EngineEvent::Cancelled);
        }
        if self.reporter.dismiss_now(now, driver) {
            self.queued.push(EngineEvent::AnnouncementCleared);
        }
    }

    /// Add an element while idle.
    ///
    /// # Errors
    ///
    /// [`StepvizError::Busy`] while a run or announcement is active.
    pub fn insert_element(
        &mut self,
        value: Value,
        at: Vec2,
    ) -> Result<ElementId, StepvizError> {
        self.ensure_idle(format_args!("insert {value}"))?;
        Ok(self.scene.insert(value, at))
    }

    fn start(
        &mut self,
        algorithm: Algorithm,
        now: Instant,
        driver: &mut dyn AnimationDriver,
    ) -> Result<(), StepvizError> {
        let playback = &self.options.playback;
        let run = RunOptions {
            mode: if playback.stepping {
                DriveMode::Manual
            } else {
                DriveMode::Auto
            },
            step_delay: playback.step_delay(),
            arrange: playback
                .arrange_sorts
                .then(|| RowLayout::centered(self.scene.len(), &self.options.layout)),
            spacing: self.options.layout.spacing,
        };
        match self
            .controller
            .start(algorithm, self.scene.elements(), run, now)?
        {
            Started::Running { advisory } => {
                if let Some(advisory) = advisory {
                    self.queued.push(EngineEvent::Advisory(advisory));
                }
            }
            Started::Finished(result) => {
                let _ = self.reporter.report(&result, now, driver);
                self.queued.push(EngineEvent::Finished(result));
            }
        }
        Ok(())
    }

    fn ensure_idle(&self, action: fmt::Arguments<'_>) -> Result<(), StepvizError> {
        if self.is_busy() {
            log::warn!("refusing {action} while busy");
            return Err(StepvizError::Busy);
        }
        Ok(())
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl Visualizer {
    /// The element collection.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Record that the host has drawn the current scene, clearing
    /// [`Scene::is_dirty`]. Allowed while busy; it changes no element.
    pub fn mark_rendered(&mut self) {
        self.scene.mark_rendered();
    }

    /// Source controlling the current run. Cancelling it from elsewhere
    /// ends the run on the next [`tick`](Self::tick) with
    /// [`EngineEvent::Cancelled`]; an announcement already up is left to
    /// close on its own.
    #[must_use]
    pub fn run_cancel_handle(&self) -> Option<CancellationSource> {
        self.controller.cancel_handle()
    }

    /// Whether a run or its announcement is active.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.controller.is_running() || self.reporter.is_displaying()
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    /// Whether new runs are stepped manually.
    #[must_use]
    pub fn is_stepping(&self) -> bool {
        self.options.playback.stepping
    }

    /// Whether [`advance`](Self::advance) would take a step now.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.controller.can_advance()
    }

    /// Algorithm of the current run.
    #[must_use]
    pub fn current_algorithm(&self) -> Option<Algorithm> {
        self.controller.algorithm()
    }

    /// Result currently announced.
    #[must_use]
    pub fn announced_result(&self) -> Option<&TerminalResult> {
        self.reporter.current()
    }
}
