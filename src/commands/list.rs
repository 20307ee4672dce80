use super::{ignore_extra, Session};
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::validate::require_status;
use crate::libs::view::View;
use crate::msg_info;
use clap::Args;

const COMMAND: &str = "list";

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list tasks in this status (todo, in-progress, done)
    #[arg(value_name = "STATUS")]
    status: Option<String>,

    /// Render the tasks as a table
    #[arg(short, long)]
    table: bool,

    #[arg(hide = true)]
    extra: Vec<String>,
}

/// Prints all tasks, or those in the requested status. An unknown status is
/// rejected even when the store is empty.
pub fn cmd(args: ListArgs, session: &Session) -> Result<()> {
    ignore_extra(args.extra);
    let status = args
        .status
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(|raw| require_status(COMMAND, raw))
        .transpose()?;

    if session.repo.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    let tasks = session.repo.list(status.into());
    if tasks.is_empty() {
        if let Some(status) = status {
            msg_info!(Message::NoTasksWithStatus(status));
        }
        return Ok(());
    }

    if args.table {
        View::tasks_table(&tasks);
    } else {
        View::tasks(&tasks);
    }
    Ok(())
}
