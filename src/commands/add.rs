use super::{ignore_extra, Session};
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::libs::validate::require_description;
use crate::msg_success;
use clap::Args;

const COMMAND: &str = "add";

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Text of the new task
    #[arg(value_name = "TASK-DESCRIPTION", allow_hyphen_values = true)]
    description: Option<String>,

    #[arg(hide = true)]
    extra: Vec<String>,
}

pub fn cmd(args: AddArgs, session: &mut Session) -> Result<()> {
    ignore_extra(args.extra);
    let description = require_description(COMMAND, args.description.as_deref())?;

    let now = session.config.now();
    let id = session.repo.add(&description, &now);
    session.commit()?;

    msg_success!(Message::TaskAdded(id));
    Ok(())
}
