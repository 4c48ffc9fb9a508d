//! Crate-level error types.

use std::fmt;

use crate::scene::ElementId;

/// Errors produced by the stepviz crate.
#[derive(Debug)]
pub enum StepvizError {
    /// A run (or its result display) is active and the request would
    /// invalidate it.
    Busy,
    /// The search target text was empty.
    EmptyTarget,
    /// The search target text is not an integer.
    InvalidTarget(String),
    /// A comma-separated value list could not be parsed.
    InvalidValues(String),
    /// No element with this id exists in the scene.
    UnknownElement(ElementId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for StepvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "an algorithm run is already active"),
            Self::EmptyTarget => write!(f, "search target is empty"),
            Self::InvalidTarget(text) => {
                write!(f, "search target {text:?} is not an integer")
            }
            Self::InvalidValues(msg) => write!(f, "invalid values: {msg}"),
            Self::UnknownElement(id) => write!(f, "unknown element {id}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for StepvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StepvizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
