//! Frame-polled timers bound to a cancellation token.

use web_time::{Duration, Instant};

use super::cancellation::CancellationToken;

/// One-shot or repeating deadline, checked from frame ticks.
///
/// A timer whose token is cancelled never fires again, so dropping the
/// owner's interest and cancelling are equivalent from the timer's side.
#[derive(Debug, Clone)]
pub struct Timer {
    token: CancellationToken,
    next: Instant,
    /// `None` for one-shot timers.
    period: Option<Duration>,
    spent: bool,
}

impl Timer {
    /// Timer firing once, `delay` after `now`.
    #[must_use]
    pub fn once(token: CancellationToken, now: Instant, delay: Duration) -> Self {
        Self {
            token,
            next: now + delay,
            period: None,
            spent: false,
        }
    }

    /// Timer firing every `period`, first at `now + period`.
    ///
    /// A zero period is treated as one nanosecond.
    #[must_use]
    pub fn repeating(token: CancellationToken, now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_nanos(1));
        Self {
            token,
            next: now + period,
            period: Some(period),
            spent: false,
        }
    }

    /// Next instant the timer fires at, if it still can.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        (!self.spent && !self.token.is_cancelled()).then_some(self.next)
    }

    /// Whether the timer can no longer fire.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.deadline().is_none()
    }

    /// Number of times the timer fired up to `now`.
    ///
    /// A repeating timer that was polled late reports every period it
    /// missed, so consumers that count fires stay in phase regardless of
    /// frame rate.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.is_spent() || now < self.next {
            return 0;
        }
        match self.period {
            None => {
                self.spent = true;
                1
            }
            Some(period) => {
                let behind = now.saturating_duration_since(self.next);
                let fires = (behind.as_nanos() / period.as_nanos()) as u32 + 1;
                self.next += period * fires;
                fires
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::CancellationSource;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let source = CancellationSource::new();
        let t0 = Instant::now();
        let mut timer = Timer::once(source.token(), t0, ms(300));

        assert_eq!(timer.poll(t0 + ms(299)), 0);
        assert_eq!(timer.deadline(), Some(t0 + ms(300)));
        assert_eq!(timer.poll(t0 + ms(300)), 1);
        assert_eq!(timer.poll(t0 + ms(900)), 0);
        assert!(timer.is_spent());
    }

    #[test]
    fn repeating_catches_up_missed_periods() {
        let source = CancellationSource::new();
        let t0 = Instant::now();
        let mut timer = Timer::repeating(source.token(), t0, ms(600));

        assert_eq!(timer.poll(t0 + ms(599)), 0);
        assert_eq!(timer.poll(t0 + ms(600)), 1);
        assert_eq!(timer.poll(t0 + ms(2000)), 2);
        assert_eq!(timer.deadline(), Some(t0 + ms(2400)));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let source = CancellationSource::new();
        let t0 = Instant::now();
        let mut once = Timer::once(source.token(), t0, ms(10));
        let mut every = Timer::repeating(source.token(), t0, ms(10));
        let _ = source.cancel();

        assert_eq!(once.poll(t0 + ms(100)), 0);
        assert_eq!(every.poll(t0 + ms(100)), 0);
        assert!(once.is_spent() && every.is_spent());
    }

    #[test]
    fn zero_delay_fires_on_first_poll() {
        let source = CancellationSource::new();
        let t0 = Instant::now();
        let mut timer = Timer::once(source.token(), t0, Duration::ZERO);
        assert_eq!(timer.poll(t0), 1);
    }
}
