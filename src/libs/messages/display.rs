//! Display implementation for task tracker messages.
//!
//! This is the single place where message wording is defined. Callers build a
//! [`Message`] variant and hand it to one of the `msg_*!` macros or embed it in
//! a [`TaskError`](crate::libs::error::TaskError); both render it through this
//! `Display` impl.
//!
//! ```rust
//! use task_tracker::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDeleted(3).to_string(), "Task 3 deleted");
//! ```

use super::types::Message;
use crate::libs::task::Status;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added successfully (ID: {})", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskStatusChanged(id, status) => format!("Task {} marked as {}", id, status),
            Message::TaskNotFound => "Task does not exist".to_string(),
            Message::NoTasks => "You don't have any tasks".to_string(),
            Message::NoTasksWithStatus(status) => format!("You don't have any tasks with status: {}", status),

            // === VALIDATION MESSAGES ===
            Message::TaskIdNotProvided => "Task id was not provided".to_string(),
            Message::TaskIdNotNumber => "Task id must be a number".to_string(),
            Message::TaskDescriptionNotProvided => "Task description was not provided".to_string(),
            Message::InvalidStatus => format!(
                "Task status format is incorrect, possible values are: {}",
                Status::possible_values()
            ),
            Message::UnknownCommand(arg) => format!("Unknown argument: {}", arg),
            Message::ExtraArgumentsIgnored(args) => format!("Ignoring extra arguments: {}", args.join(" ")),

            // === STORAGE MESSAGES ===
            Message::StoreCreated(path) => format!("Created empty task store at {}", path),
            Message::StoreLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::StoreSaved(count, path) => format!("Saved {} task(s) to {}", count, path),

            // === CONFIG MESSAGES ===
            Message::ConfigResolved(path) => format!("Using task store {}", path),
            Message::InvalidTimestampFormat(format) => format!("Invalid timestamp format: {}", format),
            Message::UsagePrintFailed(reason) => format!("Could not print command-line error: {}", reason),

            // === HELP MESSAGES ===
            Message::HelpHeader => "ToDo CLI.\n\nUsage:".to_string(),
        };
        write!(f, "{}", s)
    }
}
