use super::{ignore_extra, Session};
use crate::libs::error::{Result, TaskError};
use crate::libs::messages::Message;
use crate::libs::task::Status;
use crate::libs::validate::require_id;
use crate::{msg_info, msg_success};
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkArgs {
    #[arg(value_name = "TASK-ID", allow_hyphen_values = true)]
    id: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,
}

/// Name of the `mark-*` command that sets `status`.
pub fn command_name(status: Status) -> String {
    format!("mark-{}", status)
}

/// Handles `mark-todo`, `mark-in-progress` and `mark-done`.
pub fn cmd(status: Status, args: MarkArgs, session: &mut Session) -> Result<()> {
    ignore_extra(args.extra);
    let command = command_name(status);
    let id = match require_id(&command, args.id.as_deref(), &session.repo) {
        Err(TaskError::NotFound { .. }) if session.repo.is_empty() => {
            msg_info!(Message::NoTasks);
            return Ok(());
        }
        result => result?,
    };

    session.repo.change_status(id, status);
    session.commit()?;

    msg_success!(Message::TaskStatusChanged(id, status));
    Ok(())
}
