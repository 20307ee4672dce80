use super::{ignore_extra, Session};
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::validate::{require_description, require_id};
use crate::msg_success;
use clap::Args;

const COMMAND: &str = "update";

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_name = "TASK-ID", allow_hyphen_values = true)]
    id: Option<String>,

    /// New task description
    #[arg(value_name = "TASK-DESCRIPTION", allow_hyphen_values = true)]
    description: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,
}

/// Replaces a task description. The id is validated before the description.
pub fn cmd(args: UpdateArgs, session: &mut Session) -> Result<()> {
    ignore_extra(args.extra);
    let id = require_id(COMMAND, args.id.as_deref(), &session.repo)?;
    let description = require_description(COMMAND, args.description.as_deref())?;

    let now = session.config.now();
    session.repo.update_description(id, &description, &now);
    session.commit()?;

    msg_success!(Message::TaskUpdated(id));
    Ok(())
}
