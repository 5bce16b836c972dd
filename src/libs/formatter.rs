//! Human-readable projections of tasks.
//!
//! Formatting never touches the store: [`FormattedTasks`] borrows the
//! collection and yields one [`FormattedTask`] per task, in collection order.
//! It is `Clone`, so a listing can be walked again from the start.

use super::task::Task;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::slice;

pub const STATUS_DONE: &str = "done";
pub const STATUS_PENDING: &str = "pending";
pub const NO_DUE_DATE: &str = "none";
pub const TAG_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTask {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub due_date: String,
    pub tags: String,
}

impl From<&Task> for FormattedTask {
    fn from(task: &Task) -> Self {
        FormattedTask {
            id: task.id,
            title: task.title.clone(),
            status: format_status(task.done).to_string(),
            due_date: task.due_date.clone().unwrap_or_else(|| NO_DUE_DATE.to_string()),
            tags: task.tags.join(TAG_SEPARATOR),
        }
    }
}

impl Display for FormattedTask {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Task: {}", self.title)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Due Date: {}", self.due_date)?;
        writeln!(f, "Tags: {}", self.tags)?;
        write!(f, "---------------------------")
    }
}

pub fn format_status(done: bool) -> &'static str {
    if done {
        STATUS_DONE
    } else {
        STATUS_PENDING
    }
}

#[derive(Debug, Clone)]
pub struct FormattedTasks<'a> {
    inner: slice::Iter<'a, Task>,
}

impl<'a> FormattedTasks<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        Self { inner: tasks.iter() }
    }

    /// True when there is nothing left to list.
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }
}

impl Iterator for FormattedTasks<'_> {
    type Item = FormattedTask;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(FormattedTask::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FormattedTasks<'_> {}
