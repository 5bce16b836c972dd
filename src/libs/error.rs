//! Error taxonomy for the task store and task operations.
//!
//! Storage failures are expressed by [`StoreError`]. The fail-soft
//! [`Store::load`](crate::libs::store::Store::load) absorbs them into an empty
//! collection, while [`Store::try_load`](crate::libs::store::Store::try_load)
//! hands them to the caller. Operation failures that the user caused are
//! expressed by [`TaskError`] and end only the current operation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access tasks file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tasks file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid input '{0}'. Enter a positive number.")]
    InvalidInput(String),

    #[error("Task with ID {0} not found.")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
