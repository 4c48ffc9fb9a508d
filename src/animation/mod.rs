//! Effect vocabulary and the presentation contract.
//!
//! The engine never draws. It emits [`Effect`]s grouped in
//! [`EffectBatch`]es and hands them to an [`AnimationDriver`], waiting for
//! each batch to resolve before the next one starts.

mod driver;
mod effect;
mod recording;
mod timed;

pub use driver::{AnimationDriver, EffectHandle, EffectSequence};
pub use effect::{AnnouncementId, Color, Effect, EffectBatch};
pub use recording::RecordingDriver;
pub use timed::{TimedDriver, VisibleAnnouncement};
