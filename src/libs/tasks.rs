//! The task collection session.
//!
//! [`Tasks`] owns the in-memory collection for the lifetime of the process
//! together with the [`Store`] it came from. Every mutation is write-through:
//! the resulting collection is saved first and only becomes the in-memory
//! state when the save succeeded, so memory and disk never diverge.
//!
//! Task IDs are dense: after any operation the IDs are exactly `1..=N`.
//! Deleting a task renumbers every task that follows it, so an ID must not be
//! reused across a delete.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::store::Store;
//! use tasklist::libs::tasks::Tasks;
//!
//! let mut tasks = Tasks::open(Store::at("tasks.json"));
//! tasks.add("Buy milk", None, vec!["errand".to_string()])?;
//! tasks.mark_done("1")?;
//! for task in tasks.list() {
//!     println!("{}", task);
//! }
//! # Ok::<(), tasklist::libs::error::TaskError>(())
//! ```

use super::error::TaskError;
use super::formatter::FormattedTasks;
use super::store::Store;
use super::task::{parse_id, Task};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Tasks {
    store: Store,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Opens the default store, see [`Store::new`].
    pub fn new() -> Result<Tasks> {
        Ok(Self::open(Store::new()?))
    }

    /// Loads the collection from `store`; a missing or corrupt file yields an
    /// empty collection.
    pub fn open(store: Store) -> Self {
        let tasks = store.load();
        Self { store, tasks }
    }

    /// Builds a session from an already loaded collection.
    pub fn with_tasks(store: Store, tasks: Vec<Task>) -> Self {
        Self { store, tasks }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a pending task with `id = len + 1` and persists the collection.
    pub fn add(&mut self, title: &str, due_date: Option<String>, tags: Vec<String>) -> Result<&Task, TaskError> {
        let index = self.tasks.len();
        self.tasks.push(Task::new(position_id(index), title, due_date, tags));

        if let Err(e) = self.store.save(&self.tasks) {
            self.tasks.pop();
            return Err(e.into());
        }

        let task = &self.tasks[index];
        info!(id = task.id, title = %task.title, "task added");
        Ok(task)
    }

    /// Marks the task with the given ID as done. Marking a done task again
    /// succeeds without changing anything.
    pub fn mark_done(&mut self, id_text: &str) -> Result<&Task, TaskError> {
        let id = parse_id(id_text)?;
        let index = self.position(id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let was_done = self.tasks[index].done;
        self.tasks[index].done = true;

        if let Err(e) = self.store.save(&self.tasks) {
            self.tasks[index].done = was_done;
            return Err(e.into());
        }

        info!(id, "task marked as done");
        Ok(&self.tasks[index])
    }

    /// Removes the task with the given ID and renumbers the survivors by
    /// position. Returns the removed task with its original ID.
    pub fn delete(&mut self, id_text: &str) -> Result<Task, TaskError> {
        let id = parse_id(id_text)?;

        let (removed, mut remaining): (Vec<Task>, Vec<Task>) =
            self.tasks.iter().cloned().partition(|task| task.id == id);
        if remaining.len() == self.tasks.len() {
            return Err(TaskError::NotFound(id.to_string()));
        }

        renumber(&mut remaining);
        self.store.save(&remaining)?;
        self.tasks = remaining;

        info!(id, remaining = self.tasks.len(), "task deleted");
        removed.into_iter().next().ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Formatted records for every task, in collection order.
    pub fn list(&self) -> FormattedTasks<'_> {
        FormattedTasks::new(&self.tasks)
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

/// Overwrites every ID with its 1-based position.
pub fn renumber(tasks: &mut [Task]) {
    for (index, task) in tasks.iter_mut().enumerate() {
        task.id = position_id(index);
    }
}

/// 1-based ID for a 0-based position. A collection never gets near
/// `u32::MAX` tasks; past it the ID saturates instead of wrapping.
fn position_id(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |index| index.saturating_add(1))
}
