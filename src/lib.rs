//! # task-tracker
//!
//! A command-line todo list kept in a local JSON file.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete and re-status tasks
//! - **Positional Ids**: Ids stay contiguous from 1; deleting renumbers the rest
//! - **Filtering**: List every task or only those in one status
//! - **Plain Storage**: The whole collection lives in one pretty-printed JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_tracker::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
