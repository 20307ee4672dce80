//! Runtime configuration.
//!
//! Settings are resolved once per invocation, in this order of precedence:
//!
//! 1. `--file <path>` on the command line
//! 2. `TASK_CLI_FILE` / `TASK_CLI_TIME_FORMAT` in the environment (a `.env`
//!    file in the working directory is loaded first)
//! 3. Built-in defaults: `tasks.json` in the working directory and a US
//!    locale style timestamp
//!
//! ```rust,no_run
//! use task_tracker::libs::config::Config;
//!
//! let config = Config::read(None)?;
//! println!("{}", config.store_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::{format_timestamp, is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
use super::messages::Message;
use super::storage::STORE_FILE_NAME;
use crate::msg_debug;
use anyhow::{bail, Result};
use chrono::Local;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the store file.
pub const FILE_ENV: &str = "TASK_CLI_FILE";
/// Environment variable holding a `strftime` pattern for timestamps.
pub const TIME_FORMAT_ENV: &str = "TASK_CLI_TIME_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the JSON store.
    pub store_path: PathBuf,
    /// `strftime` pattern used for `createdAt` / `updatedAt`.
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(STORE_FILE_NAME),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Resolves configuration from the command line override, `.env` and the
    /// process environment.
    pub fn read(file: Option<PathBuf>) -> Result<Config> {
        let _ = dotenv::dotenv();
        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Resolves configuration using `lookup` in place of the environment.
    pub fn resolve<F>(file: Option<PathBuf>, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let store_path = file
            .or_else(|| lookup(FILE_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or(defaults.store_path);

        let timestamp_format = lookup(TIME_FORMAT_ENV).unwrap_or(defaults.timestamp_format);
        if !is_valid_timestamp_format(&timestamp_format) {
            bail!(Message::InvalidTimestampFormat(timestamp_format));
        }

        msg_debug!(Message::ConfigResolved(store_path.display().to_string()));
        Ok(Config {
            store_path,
            timestamp_format,
        })
    }

    /// Current local time rendered with the configured pattern.
    pub fn now(&self) -> String {
        format_timestamp(&Local::now(), &self.timestamp_format)
    }
}
