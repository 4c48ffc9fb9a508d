//! The driver contract and in-order effect sequencing.

use std::collections::VecDeque;
use std::task::Poll;

use web_time::Instant;

use super::effect::{Effect, EffectBatch};

/// Ticket for an effect handed to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u64);

/// Presentation backend: applies effects and reports when each finished.
///
/// This is a poll-based future driven by the host's frame clock: `apply`
/// starts the visual transition, `poll` returns [`Poll::Ready`] only once
/// it is over. The engine never touches presentation any other way.
pub trait AnimationDriver {
    /// Start applying `effect` at `now`.
    fn apply(&mut self, effect: &Effect, now: Instant) -> EffectHandle;

    /// Whether the effect behind `handle` has finished. Unknown handles are
    /// reported as finished.
    fn poll(&mut self, handle: EffectHandle, now: Instant) -> Poll<()>;

    /// Nobody will poll `handle` again. The effect keeps playing; the driver
    /// may drop whatever it tracks for it.
    fn release(&mut self, handle: EffectHandle) {
        let _ = handle;
    }
}

/// Ordered queue of effect batches being played through a driver.
///
/// A batch is applied only after every effect of the previous batch
/// resolved, so effects become visible strictly in emission order.
#[derive(Debug, Default)]
pub struct EffectSequence {
    pending: VecDeque<EffectBatch>,
    in_flight: Vec<EffectHandle>,
}

impl EffectSequence {
    /// Sequence that will play `batches` in order.
    #[must_use]
    pub fn new(batches: Vec<EffectBatch>) -> Self {
        Self {
            pending: batches.into(),
            in_flight: Vec::new(),
        }
    }

    /// Append a batch behind everything already queued.
    pub fn push(&mut self, batch: EffectBatch) {
        self.pending.push_back(batch);
    }

    /// Whether nothing is queued or in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.in_flight.is_empty()
    }

    /// Make progress: drop finished effects, start the next batch once the
    /// current one resolved. Returns `Ready` when the whole sequence is done.
    pub fn poll(
        &mut self,
        driver: &mut dyn AnimationDriver,
        now: Instant,
    ) -> Poll<()> {
        loop {
            self.in_flight
                .retain(|&handle| driver.poll(handle, now).is_pending());
            if !self.in_flight.is_empty() {
                return Poll::Pending;
            }
            let Some(batch) = self.pending.pop_front() else {
                return Poll::Ready(());
            };
            for effect in &batch {
                log::debug!("effect: {effect}");
                self.in_flight.push(driver.apply(effect, now));
            }
        }
    }

    /// Forget every queued and in-flight effect. Effects already handed to
    /// the driver finish on their own and are released; nothing further is
    /// applied.
    pub fn abandon(&mut self, driver: &mut dyn AnimationDriver) {
        self.pending.clear();
        for handle in self.in_flight.drain(..) {
            driver.release(handle);
        }
    }
}
