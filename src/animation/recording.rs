//! Headless driver that records effects instead of drawing them.

use std::task::Poll;

use rustc_hash::FxHashMap;
use web_time::Instant;

use super::driver::{AnimationDriver, EffectHandle};
use super::effect::Effect;

/// Driver that keeps a log of every applied effect.
///
/// Each effect resolves after `latency` polls (0 resolves on the first
/// poll). Useful for headless runs, golden tests, and hosts that only want
/// the effect stream.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    applied: Vec<Effect>,
    /// Handle -> polls left before the effect resolves.
    remaining: FxHashMap<EffectHandle, u32>,
    latency: u32,
    next_handle: u64,
}

impl RecordingDriver {
    /// Driver whose effects resolve immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver whose effects stay pending for `polls` polls.
    #[must_use]
    pub fn with_latency(polls: u32) -> Self {
        Self {
            latency: polls,
            ..Self::default()
        }
    }

    /// Every effect applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> &[Effect] {
        &self.applied
    }

    /// Drain the log.
    pub fn take_applied(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.applied)
    }

    /// Number of effects that have not resolved yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.remaining.len()
    }
}

impl AnimationDriver for RecordingDriver {
    fn apply(&mut self, effect: &Effect, _now: Instant) -> EffectHandle {
        // Entries at zero would resolve on their next poll anyway.
        self.remaining.retain(|_, left| *left > 0);
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;
        self.applied.push(effect.clone());
        let _ = self.remaining.insert(handle, self.latency);
        handle
    }

    fn poll(&mut self, handle: EffectHandle, _now: Instant) -> Poll<()> {
        match self.remaining.get_mut(&handle) {
            Some(left) if *left > 0 => {
                *left -= 1;
                Poll::Pending
            }
            Some(_) => {
                let _ = self.remaining.remove(&handle);
                Poll::Ready(())
            }
            None => Poll::Ready(()),
        }
    }

    fn release(&mut self, handle: EffectHandle) {
        let _ = self.remaining.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ElementId;

    #[test]
    fn latency_counts_polls() {
        let mut driver = RecordingDriver::with_latency(2);
        let now = Instant::now();
        let handle = driver.apply(&Effect::Clear { id: ElementId(0) }, now);

        assert!(driver.poll(handle, now).is_pending());
        assert!(driver.poll(handle, now).is_pending());
        assert!(driver.poll(handle, now).is_ready());
        assert_eq!(driver.pending_count(), 0);
        // Resolved handles stay resolved.
        assert!(driver.poll(handle, now).is_ready());
    }

    #[test]
    fn unpolled_handles_do_not_accumulate() {
        let now = Instant::now();
        let mut immediate = RecordingDriver::new();
        for i in 0..100 {
            let _ = immediate.apply(&Effect::Clear { id: ElementId(i) }, now);
        }
        assert_eq!(immediate.pending_count(), 1);

        let mut slow = RecordingDriver::with_latency(3);
        let handles: Vec<EffectHandle> = (0..10)
            .map(|i| slow.apply(&Effect::Clear { id: ElementId(i) }, now))
            .collect();
        assert_eq!(slow.pending_count(), 10);
        for handle in handles {
            slow.release(handle);
        }
        assert_eq!(slow.pending_count(), 0);
    }

    #[test]
    fn log_can_be_drained() {
        let mut driver = RecordingDriver::new();
        let now = Instant::now();
        let _ = driver.apply(&Effect::Clear { id: ElementId(4) }, now);
        assert_eq!(driver.take_applied().len(), 1);
        assert!(driver.applied().is_empty());
    }
}
