//! Text input parsing for element values and search targets.

use super::Value;
use crate::error::StepvizError;

/// Parse a comma-separated list of integers, e.g. `"5, 3, 8, 1"`.
///
/// Blank entries (`"1,,2"`, trailing commas) are skipped. An input with no
/// entries yields an empty list.
///
/// # Errors
///
/// Returns [`StepvizError::InvalidValues`] naming the first entry that is
/// not an integer.
pub fn parse_values(text: &str) -> Result<Vec<Value>, StepvizError> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece.parse::<Value>().map_err(|_| {
                StepvizError::InvalidValues(format!(
                    "{piece:?} is not an integer"
                ))
            })
        })
        .collect()
}

/// Parse the committed search target. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Empty or whitespace-only input is [`StepvizError::EmptyTarget`]; anything
/// that is not a whole integer is [`StepvizError::InvalidTarget`].
pub fn parse_target(text: &str) -> Result<Value, StepvizError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StepvizError::EmptyTarget);
    }
    trimmed
        .parse::<Value>()
        .map_err(|_| StepvizError::InvalidTarget(trimmed.to_owned()))
}
