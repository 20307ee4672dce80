//! Core library modules for the task tracker.
//!
//! - **Data Model**: [`task`] defines tasks and statuses
//! - **Operations**: [`repository`] mutates the in-memory collection
//! - **Persistence**: [`storage`] reads and writes the JSON store
//! - **Validation**: [`validate`] checks raw command arguments
//! - **Infrastructure**: configuration, errors, messages and output
//!
//! ```rust,no_run
//! use task_tracker::libs::repository::TaskRepository;
//! use task_tracker::libs::storage::Storage;
//!
//! let storage = Storage::new("tasks.json");
//! let mut repo = storage.open()?;
//! repo.add("buy milk", "1/2/2024, 3:04:05 PM");
//! storage.save(&repo)?;
//! # Ok::<(), task_tracker::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod repository;
pub mod storage;
pub mod task;
pub mod validate;
pub mod view;
