//! Core library modules for the tasklist application.
//!
//! - **Persistence**: [`store`] reads and writes the tasks file, [`data_storage`]
//!   locates the platform data directory, [`config`] holds user settings
//! - **Tasks**: [`task`] is the record and its input parsing, [`tasks`] is the
//!   session that owns the collection and implements add, mark-done and delete
//! - **Presentation**: [`formatter`] projects tasks into printable records,
//!   [`view`] renders them, [`messages`] defines every user-facing string
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::tasks::Tasks;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.add("Implement feature", Some("2025-03-01".to_string()), vec![])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod store;
pub mod task;
pub mod tasks;
pub mod view;
