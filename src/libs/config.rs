//! Configuration management for the tasklist application.
//!
//! The configuration lives in `config.json` inside the platform data
//! directory (see [`DataStorage`]). Today it only carries the location of the
//! tasks file; everything is optional so a missing file is a valid setup.
//!
//! ## Tasks File Resolution
//!
//! 1. `--file` on the command line
//! 2. the `TASKLIST_FILE` environment variable
//! 3. `tasks_file` from this configuration
//! 4. `tasks.json` in the data directory

use super::data_storage::DataStorage;
use super::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Custom location of the tasks file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`], but an unreadable configuration only logs a
    /// warning and yields the defaults.
    pub fn read_or_default() -> Config {
        match DataStorage::new().get_path(CONFIG_FILE_NAME) {
            Ok(path) => Self::read_from_or_default(&path),
            Err(e) => {
                warn!(error = %e, "cannot locate configuration, using defaults");
                Config::default()
            }
        }
    }

    pub fn read_from_or_default(path: &Path) -> Config {
        Self::read_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
            Config::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Pre-fills the current value; an empty answer
    /// resets to the default location.
    pub fn init() -> Result<Self> {
        let mut config = Self::read_or_default();
        let current = config
            .tasks_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(current)
            .allow_empty(true)
            .interact_text()?;

        let tasks_file = tasks_file.trim();
        config.tasks_file = if tasks_file.is_empty() { None } else { Some(PathBuf::from(tasks_file)) };

        Ok(config)
    }
}
