//! Message catalogue for the task tracker.
//!
//! Every piece of user-facing text is a variant here; the wording lives in
//! [`display`](super::display). Variants that need runtime data carry it as
//! fields so callers never assemble text by hand.

use crate::libs::task::Status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(u32),
    TaskUpdated(u32),
    TaskDeleted(u32),
    TaskStatusChanged(u32, Status),
    TaskNotFound,
    NoTasks,
    NoTasksWithStatus(Status),

    // === VALIDATION MESSAGES ===
    TaskIdNotProvided,
    TaskIdNotNumber,
    TaskDescriptionNotProvided,
    InvalidStatus,
    UnknownCommand(String),
    ExtraArgumentsIgnored(Vec<String>),

    // === STORAGE MESSAGES ===
    StoreCreated(String),
    StoreLoaded(usize, String),
    StoreSaved(usize, String),

    // === CONFIG MESSAGES ===
    ConfigResolved(String),
    InvalidTimestampFormat(String),
    UsagePrintFailed(String),

    // === HELP MESSAGES ===
    HelpHeader,
}
