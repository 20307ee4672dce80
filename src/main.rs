use std::process::ExitCode;
use task_tracker::commands::{self, Cli};
use task_tracker::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        // Diagnostics go to stderr.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("task_tracker=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report(&err);
            ExitCode::from(commands::exit_code(&err))
        }
    }
}
