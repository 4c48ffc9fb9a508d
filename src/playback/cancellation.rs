//! Cooperative cancellation for runs and result displays.
//!
//! A [`CancellationSource`] is held by whoever may abort work, and clones of
//! it abort the same work. The [`CancellationToken`]s it hands out only
//! observe; timers poll them. Nothing blocks: signals are checked from frame
//! ticks.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable, thread-safe view of a cancellation signal.
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Whether cancellation was requested.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Control side of a cancellation signal.
///
/// Clones control the same signal, so a source can be handed to another
/// owner that should be able to abort the work. Dropping a source does not
/// cancel its tokens.
#[derive(Clone)]
pub struct CancellationSource {
    cancelled: Arc<AtomicBool>,
}

impl CancellationSource {
    /// Source whose tokens are not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Token observing this source.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Signal cancellation. Returns `true` if this call changed the state.
    #[must_use = "returns whether this call did the cancelling"]
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::AcqRel)
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSource")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_observe_source() {
        let source = CancellationSource::new();
        let token = source.token();
        let clone = token.clone();
        assert!(!token.is_cancelled());

        assert!(source.cancel());
        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let source = CancellationSource::default();
        assert!(source.cancel());
        assert!(!source.cancel());
        assert!(source.is_cancelled());
    }

    #[test]
    fn dropping_source_does_not_cancel() {
        let token = CancellationSource::new().token();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cloned_sources_share_the_signal() {
        let source = CancellationSource::new();
        let handle = source.clone();
        let token = source.token();

        assert!(handle.cancel());
        assert!(source.is_cancelled());
        assert!(token.is_cancelled());
        assert!(!source.cancel());
    }

    #[test]
    fn tokens_cross_threads() {
        let source = CancellationSource::new();
        let token = source.token();
        let handle = std::thread::spawn(move || {
            while !token.is_cancelled() {
                std::thread::yield_now();
            }
        });
        let _ = source.cancel();
        handle.join().unwrap();
    }
}
