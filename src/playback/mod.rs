//! Run orchestration: drive modes, step pacing, and cancellation.

mod cancellation;
mod controller;
mod timer;

pub use cancellation::{CancellationSource, CancellationToken};
pub use controller::{
    Advisory, DriveMode, PlaybackController, PlaybackEvent, RunOptions, Started,
};
pub use timer::Timer;
