//! Argument checks run before any repository operation.
//!
//! Each check takes the raw, possibly missing token from the command line and
//! either returns the typed value or a [`TaskError`] scoped to `command`.
//! Empty strings count as missing.

use super::error::{Result, TaskError};
use super::messages::Message;
use super::repository::TaskRepository;
use super::task::Status;

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Parses `raw` as a task id and checks that such a task exists.
///
/// Any finite number is a well-formed id, so `1.0` and `1e0` name task 1
/// while `1.5`, `0` and `-1` are well-formed but never found. Only text that
/// is not a number at all is rejected as malformed.
pub fn require_id(command: &str, raw: Option<&str>, repo: &TaskRepository) -> Result<u32> {
    let raw = present(raw).ok_or_else(|| TaskError::MissingParameter {
        command: command.to_string(),
        detail: Message::TaskIdNotProvided,
    })?;

    let number = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| TaskError::InvalidFormat {
            command: command.to_string(),
            detail: Message::TaskIdNotNumber,
        })?;

    as_task_id(number)
        .filter(|id| repo.contains(*id))
        .ok_or_else(|| TaskError::NotFound {
            command: command.to_string(),
            id: raw.trim().to_string(),
        })
}

// Positive whole numbers in range; everything else cannot match a task.
fn as_task_id(number: f64) -> Option<u32> {
    let whole = number.fract() == 0.0 && number >= 1.0 && number <= f64::from(u32::MAX);
    whole.then_some(number as u32)
}

/// Parses `raw` as one of the recognized status values.
pub fn require_status(command: &str, raw: &str) -> Result<Status> {
    raw.parse::<Status>().map_err(|_| TaskError::InvalidFormat {
        command: command.to_string(),
        detail: Message::InvalidStatus,
    })
}

/// Returns the description, failing if it is absent or empty.
pub fn require_description(command: &str, raw: Option<&str>) -> Result<String> {
    present(raw).map(str::to_string).ok_or_else(|| TaskError::MissingParameter {
        command: command.to_string(),
        detail: Message::TaskDescriptionNotProvided,
    })
}
