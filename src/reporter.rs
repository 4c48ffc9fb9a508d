//! Timed announcements for finished runs.
//!
//! A terminal result becomes a text announcement that stays up for a fixed
//! window. A found element additionally blinks gold for the duration. Each
//! display owns a [`CancellationSource`]; its timers observe the token, so
//! tearing a display down early can never leave a blink running. Cancelling
//! a clone of that source (see [`ResultReporter::cancel_handle`]) closes the
//! display on the next tick.

use web_time::{Duration, Instant};

use crate::algorithm::TerminalResult;
use crate::animation::{
    AnimationDriver, AnnouncementId, Color, Effect, EffectBatch, EffectSequence,
};
use crate::options::TimingOptions;
use crate::playback::{CancellationSource, CancellationToken, Timer};
use crate::scene::ElementId;

#[derive(Debug)]
struct Blink {
    id: ElementId,
    timer: Timer,
}

#[derive(Debug)]
struct Display {
    result: TerminalResult,
    announcement: AnnouncementId,
    source: CancellationSource,
    window: Timer,
    blink: Option<Blink>,
    sequence: EffectSequence,
    closing: bool,
}

impl Display {
    fn closing_batch(&self) -> EffectBatch {
        let mut effects = vec![Effect::Dismiss {
            id: self.announcement,
        }];
        if let Some(blink) = &self.blink {
            effects.push(Effect::Clear { id: blink.id });
        }
        EffectBatch::of(effects)
    }

    /// Stop blinking and queue the dismissal.
    fn close(&mut self, driver: &mut dyn AnimationDriver) {
        let _ = self.source.cancel();
        let batch = self.closing_batch();
        self.sequence.abandon(driver);
        self.sequence.push(batch);
        self.closing = true;
    }
}

/// Shows one terminal result at a time.
#[derive(Debug)]
pub struct ResultReporter {
    blink_period: Duration,
    result_window: Duration,
    sorted_window: Duration,
    next_announcement: u32,
    display: Option<Display>,
}

impl ResultReporter {
    /// Reporter using the display timings in `timing`.
    #[must_use]
    pub fn new(timing: &TimingOptions) -> Self {
        Self {
            blink_period: timing.blink_period(),
            result_window: timing.result_window(),
            sorted_window: timing.sorted_window(),
            next_announcement: 0,
            display: None,
        }
    }

    /// Replace the timings used by future reports.
    pub fn set_timing(&mut self, timing: &TimingOptions) {
        self.blink_period = timing.blink_period();
        self.result_window = timing.result_window();
        self.sorted_window = timing.sorted_window();
    }

    /// Announce `result`, replacing any display still up.
    pub fn report(
        &mut self,
        result: &TerminalResult,
        now: Instant,
        driver: &mut dyn AnimationDriver,
    ) -> AnnouncementId {
        let _ = self.dismiss_now(now, driver);

        let announcement = AnnouncementId(self.next_announcement);
        self.next_announcement = self.next_announcement.wrapping_add(1);

        let source = CancellationSource::new();
        let window = match result {
            TerminalResult::Sorted => self.sorted_window,
            TerminalResult::Found { .. } | TerminalResult::NotFound { .. } => {
                self.result_window
            }
        };
        let blink = match *result {
            TerminalResult::Found { id, .. } => Some(Blink {
                id,
                timer: Timer::repeating(source.token(), now, self.blink_period),
            }),
            TerminalResult::NotFound { .. } | TerminalResult::Sorted => None,
        };
        log::info!("announcing \"{result}\" for {window:?}");

        let mut display = Display {
            result: result.clone(),
            announcement,
            window: Timer::once(source.token(), now, window),
            source,
            blink,
            sequence: EffectSequence::new(vec![EffectBatch::single(Effect::Announce {
                id: announcement,
                text: result.to_string(),
            })]),
            closing: false,
        };
        let _ = display.sequence.poll(driver, now);
        self.display = Some(display);
        announcement
    }

    /// Advance blinking and the display window. Returns `true` on the tick
    /// the display has fully gone.
    pub fn tick(&mut self, now: Instant, driver: &mut dyn AnimationDriver) -> bool {
        let Some(display) = self.display.as_mut() else {
            return false;
        };

        if !display.closing {
            if display.source.is_cancelled() || display.window.poll(now) > 0 {
                log::debug!("closing announcement {}", display.announcement.0);
                display.close(driver);
            } else if let Some(blink) = display.blink.as_mut() {
                // A blink still playing swallows the beat.
                if blink.timer.poll(now) > 0 && display.sequence.is_idle() {
                    display.sequence.push(EffectBatch::single(Effect::Highlight {
                        id: blink.id,
                        color: Color::Found,
                    }));
                    display
                        .sequence
                        .push(EffectBatch::single(Effect::Clear { id: blink.id }));
                }
            }
        }

        if display.sequence.poll(driver, now).is_ready() && display.closing {
            self.display = None;
            return true;
        }
        false
    }

    /// Tear the display down now: stop the blink, dismiss the announcement
    /// and clear the found element without waiting. Returns whether a
    /// display was up.
    pub fn dismiss_now(&mut self, now: Instant, driver: &mut dyn AnimationDriver) -> bool {
        let Some(mut display) = self.display.take() else {
            return false;
        };
        let _ = display.source.cancel();
        display.sequence.abandon(driver);
        for effect in &display.closing_batch() {
            log::debug!("effect: {effect}");
            let handle = driver.apply(effect, now);
            driver.release(handle);
        }
        true
    }

    /// Whether an announcement is up or fading out.
    #[must_use]
    pub fn is_displaying(&self) -> bool {
        self.display.is_some()
    }

    /// Result currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&TerminalResult> {
        self.display.as_ref().map(|d| &d.result)
    }

    /// Token observing the current display; it is cancelled once the
    /// display starts closing.
    #[must_use]
    pub fn cancellation_token(&self) -> Option<CancellationToken> {
        self.display.as_ref().map(|d| d.source.token())
    }

    /// Source controlling the current display. Cancelling it closes the
    /// display on the next [`tick`](Self::tick), with the usual fade-out.
    #[must_use]
    pub fn cancel_handle(&self) -> Option<CancellationSource> {
        self.display.as_ref().map(|d| d.source.clone())
    }
}
