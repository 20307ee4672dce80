//! Persistence of the task collection.
//!
//! The store is one JSON file holding a [`TaskStorage`] record:
//!
//! ```json
//! {
//!   "tasks": [
//!     {
//!       "id": 1,
//!       "description": "buy milk",
//!       "status": "todo",
//!       "createdAt": "1/2/2024, 3:04:05 PM",
//!       "updatedAt": null
//!     }
//!   ]
//! }
//! ```
//!
//! `tasks` is `null` until the first task is added. The whole file is
//! rewritten on every save; there are no partial updates and no locking, so
//! two processes saving at once race and the last writer wins.

use super::error::Result;
use super::messages::Message;
use super::repository::TaskRepository;
use super::task::Task;
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Default store file name, resolved against the working directory.
pub const STORE_FILE_NAME: &str = "tasks.json";

/// On-disk shape of the store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStorage {
    pub tasks: Option<Vec<Task>>,
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the store file with an empty record if it does not exist yet.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.write(&TaskStorage::default())?;
        msg_debug!(Message::StoreCreated(self.path.display().to_string()));
        Ok(true)
    }

    /// Reads and parses the whole store file.
    pub fn load(&self) -> Result<TaskRepository> {
        let contents = fs::read_to_string(&self.path)?;
        let storage: TaskStorage = serde_json::from_str(&contents)?;
        let repo = TaskRepository::from_tasks(storage.tasks.unwrap_or_default());
        msg_debug!(Message::StoreLoaded(repo.len(), self.path.display().to_string()));
        Ok(repo)
    }

    /// Creates the store if needed, then loads it.
    pub fn open(&self) -> Result<TaskRepository> {
        self.ensure_exists()?;
        self.load()
    }

    /// Writes the full task list back to the store.
    pub fn save(&self, repo: &TaskRepository) -> Result<()> {
        let storage = TaskStorage {
            tasks: Some(repo.tasks().to_vec()),
        };
        self.write(&storage)?;
        msg_debug!(Message::StoreSaved(repo.len(), self.path.display().to_string()));
        Ok(())
    }

    // Temp file + rename: readers see either the old store or the new one.
    fn write(&self, storage: &TaskStorage) -> Result<()> {
        let tmp = self.temp_path();
        let data = serde_json::to_string_pretty(storage)?;
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
