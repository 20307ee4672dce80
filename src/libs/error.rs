//! Error types for task commands.
//!
//! Every failure a command can report maps to one [`TaskError`] variant, and
//! every variant maps to a distinct process exit code. Validation failures
//! carry the name of the command that produced them so they can be reported
//! as `Error: <command>: <message>`.

use super::messages::Message;

/// Top-level error type for the task tracker.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// A required command parameter was absent or empty.
    #[error("{command}: {detail}")]
    MissingParameter { command: String, detail: Message },

    /// A parameter was present but malformed (non-numeric id, unknown status).
    #[error("{command}: {detail}")]
    InvalidFormat { command: String, detail: Message },

    /// No task carries the requested id. `id` is the token as typed.
    #[error("{command}: {}", Message::TaskNotFound)]
    NotFound { command: String, id: String },

    /// The first argument is not a known command.
    #[error("{}", Message::UnknownCommand(.0.clone()))]
    UnknownCommand(String),

    /// The command line could not be parsed for another reason.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Reading or writing the store file failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file is not a valid task storage record.
    #[error("store file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TaskError {
    /// Process exit code for this class of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            TaskError::Io(_) | TaskError::Parse(_) => 1,
            TaskError::UnknownCommand(_) | TaskError::Usage(_) => 2,
            TaskError::MissingParameter { .. } => 3,
            TaskError::InvalidFormat { .. } => 4,
            TaskError::NotFound { .. } => 5,
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_scoped_to_their_command() {
        let err = TaskError::MissingParameter {
            command: "add".to_string(),
            detail: Message::TaskDescriptionNotProvided,
        };
        assert_eq!(err.to_string(), "add: Task description was not provided");

        let err = TaskError::NotFound {
            command: "delete".to_string(),
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "delete: Task does not exist");
    }

    #[test]
    fn each_error_class_has_its_own_exit_code() {
        let missing = TaskError::MissingParameter {
            command: "add".to_string(),
            detail: Message::TaskDescriptionNotProvided,
        };
        let invalid = TaskError::InvalidFormat {
            command: "update".to_string(),
            detail: Message::TaskIdNotNumber,
        };
        let not_found = TaskError::NotFound {
            command: "update".to_string(),
            id: "1".to_string(),
        };
        let unknown = TaskError::UnknownCommand("frobnicate".to_string());
        let io = TaskError::from(std::io::Error::other("disk full"));

        let codes = [
            missing.exit_code(),
            invalid.exit_code(),
            not_found.exit_code(),
            unknown.exit_code(),
            io.exit_code(),
        ];
        assert_eq!(codes, [3, 4, 5, 2, 1]);
        assert!(codes.iter().all(|code| *code != 0));
    }

    #[test]
    fn unknown_command_names_the_argument() {
        let err = TaskError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown argument: frobnicate");
    }
}
