//! Task data model.
//!
//! A [`Task`] is a single todo item as it is stored on disk. Field names are
//! serialized in camelCase (`createdAt`, `updatedAt`) and statuses in
//! kebab-case (`in-progress`) so the store file stays readable by other tools
//! that share the same format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Every recognized status, in the order they are offered to the user.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Comma-separated list of accepted values, used in error messages and help text.
    pub fn possible_values() -> String {
        Self::ALL.iter().map(Status::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the recognized status values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    /// Set once when the task is added.
    pub created_at: String,
    /// Set whenever the description changes. Status changes leave it alone.
    pub updated_at: Option<String>,
}

impl Task {
    pub fn new(id: u32, description: &str, created_at: &str) -> Self {
        Task {
            id,
            description: description.to_string(),
            status: Status::Todo,
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }
}

/// Selection applied by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByStatus(Status),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::ByStatus(status) => task.status == *status,
        }
    }
}

impl From<Option<Status>> for TaskFilter {
    fn from(status: Option<Status>) -> Self {
        status.map_or(TaskFilter::All, TaskFilter::ByStatus)
    }
}
