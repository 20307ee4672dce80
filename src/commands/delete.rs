use super::{ignore_extra, Session};
use crate::libs::error::{Result, TaskError};
use crate::libs::messages::Message;
use crate::libs::validate::require_id;
use crate::{msg_info, msg_success};
use clap::Args;

const COMMAND: &str = "delete";

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "TASK-ID", allow_hyphen_values = true)]
    id: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,
}

pub fn cmd(args: DeleteArgs, session: &mut Session) -> Result<()> {
    ignore_extra(args.extra);
    let id = match require_id(COMMAND, args.id.as_deref(), &session.repo) {
        Err(TaskError::NotFound { .. }) if session.repo.is_empty() => {
            msg_info!(Message::NoTasks);
            return Ok(());
        }
        result => result?,
    };

    session.repo.delete(id);
    session.commit()?;

    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
