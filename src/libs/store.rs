//! Whole-collection persistence of tasks to a single JSON file.
//!
//! The file holds a JSON array of task records. Every save rewrites the
//! complete collection: the JSON is written to a sibling temporary file which
//! is then renamed over the target, so readers never observe a half-written
//! file. There is no locking; one process is expected to own the file.

use super::config::Config;
use super::data_storage::DataStorage;
use super::error::StoreError;
use super::task::Task;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const TASKS_FILE_ENV: &str = "TASKLIST_FILE";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Resolves the default tasks file: `TASKLIST_FILE`, then the configured
    /// `tasks_file`, then `tasks.json` in the data directory.
    pub fn new() -> Result<Self> {
        if let Ok(path) = std::env::var(TASKS_FILE_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::at(path));
            }
        }

        if let Some(path) = Config::read_or_default().tasks_file {
            return Ok(Self::at(path));
        }

        Ok(Self::at(DataStorage::new().get_path(TASKS_FILE_NAME)?))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection, treating a missing or unparseable file as empty.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable tasks file");
                Vec::new()
            }
        }
    }

    /// Loads the collection, reporting a corrupt or unreadable file instead of
    /// substituting an empty one. A missing file is still an empty collection.
    pub fn try_load(&self) -> Result<Vec<Task>, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "tasks file does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        // Invalid UTF-8 is a parse failure, not an I/O one
        let tasks: Vec<Task> = serde_json::from_slice(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrites the file with the full collection.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut json = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        tasks.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp_path = self.tmp_path();
        let write = || -> std::io::Result<()> {
            let mut tmp_file = File::create(&tmp_path)?;
            tmp_file.write_all(&json)?;
            tmp_file.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Copies the current file to `<file>.bak`, returning the backup path.
    pub fn backup_corrupt(&self) -> Result<PathBuf, StoreError> {
        let backup_path = self.sibling_path("bak");
        fs::copy(&self.path, &backup_path).map_err(|e| StoreError::io(&self.path, e))?;
        warn!(backup = %backup_path.display(), "backed up corrupt tasks file");
        Ok(backup_path)
    }

    fn tmp_path(&self) -> PathBuf {
        self.sibling_path("tmp")
    }

    fn sibling_path(&self, extension: &str) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| TASKS_FILE_NAME.into());
        file_name.push(".");
        file_name.push(extension);
        self.path.with_file_name(file_name)
    }
}
