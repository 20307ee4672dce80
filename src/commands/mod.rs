//! Command-line dispatcher.
//!
//! Parses the process arguments into one [`Commands`] variant, opens the task
//! store for commands that need it and hands a [`Session`] to the matching
//! handler. Exactly one command runs per invocation.

pub mod add;
pub mod delete;
pub mod help;
pub mod list;
pub mod mark;
pub mod update;

use crate::libs::config::Config;
use crate::libs::error::{self, TaskError};
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::storage::Storage;
use crate::libs::task::Status;
use crate::{msg_debug, msg_error};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Lists the available commands")]
    Help,
    #[command(about = "Lists all tasks, or only the tasks in a status")]
    List(list::ListArgs),
    #[command(about = "Adds a task")]
    Add(add::AddArgs),
    #[command(about = "Updates a task description")]
    Update(update::UpdateArgs),
    #[command(about = "Deletes a task and renumbers the rest")]
    Delete(delete::DeleteArgs),
    #[command(about = "Marks a task as todo")]
    MarkTodo(mark::MarkArgs),
    #[command(about = "Marks a task as in-progress")]
    MarkInProgress(mark::MarkArgs),
    #[command(about = "Marks a task as done")]
    MarkDone(mark::MarkArgs),
}

#[derive(Debug, Parser)]
#[command(name = "task-cli", author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Task store to use instead of ./tasks.json
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Loaded state handed to each command handler.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub storage: Storage,
    pub repo: TaskRepository,
}

impl Session {
    /// Resolves configuration, then opens the configured store.
    pub fn load(file: Option<PathBuf>) -> anyhow::Result<Session> {
        let config = Config::read(file)?;
        Ok(Session::open(config)?)
    }

    /// Creates the store if it is missing and loads it.
    pub fn open(config: Config) -> error::Result<Session> {
        let storage = Storage::new(config.store_path.clone());
        let repo = storage.open()?;
        Ok(Session { config, storage, repo })
    }

    /// Writes the current collection back to the store.
    pub fn commit(&self) -> error::Result<()> {
        self.storage.save(&self.repo)
    }
}

impl Cli {
    /// Runs the command named by the process arguments.
    pub fn menu() -> anyhow::Result<()> {
        Self::run(std::env::args_os())
    }

    pub fn run<I, T>(args: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Self::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => return parse_failure(err),
        };

        match cli.command {
            None | Some(Commands::Help) => help::cmd(),
            Some(Commands::List(args)) => list::cmd(args, &Session::load(cli.file)?)?,
            Some(Commands::Add(args)) => add::cmd(args, &mut Session::load(cli.file)?)?,
            Some(Commands::Update(args)) => update::cmd(args, &mut Session::load(cli.file)?)?,
            Some(Commands::Delete(args)) => delete::cmd(args, &mut Session::load(cli.file)?)?,
            Some(Commands::MarkTodo(args)) => mark::cmd(Status::Todo, args, &mut Session::load(cli.file)?)?,
            Some(Commands::MarkInProgress(args)) => mark::cmd(Status::InProgress, args, &mut Session::load(cli.file)?)?,
            Some(Commands::MarkDone(args)) => mark::cmd(Status::Done, args, &mut Session::load(cli.file)?)?,
        }
        Ok(())
    }
}

fn parse_failure(err: clap::Error) -> anyhow::Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(())
        }
        ErrorKind::InvalidSubcommand => {
            let arg = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => String::new(),
            };
            Err(TaskError::UnknownCommand(arg).into())
        }
        _ => Err(TaskError::Usage(err).into()),
    }
}

/// Prints a failed invocation to stderr. Unknown commands are followed by the
/// usage table.
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TaskError>() {
        Some(TaskError::Usage(usage)) => {
            if let Err(print_err) = usage.print() {
                msg_debug!(Message::UsagePrintFailed(print_err.to_string()));
            }
        }
        Some(unknown @ TaskError::UnknownCommand(_)) => {
            msg_error!(unknown);
            help::cmd();
        }
        Some(task_error) => msg_error!(task_error),
        None => msg_error!(format!("{:#}", err)),
    }
}

/// Exit status for a failed invocation.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<TaskError>().map_or(1, TaskError::exit_code)
}

/// Logs and drops tokens a command does not consume.
pub(crate) fn ignore_extra(extra: Vec<String>) {
    if !extra.is_empty() {
        msg_debug!(Message::ExtraArgumentsIgnored(extra));
    }
}
