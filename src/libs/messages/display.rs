//! Display implementation for tasklist messages.
//!
//! Single source of truth for every piece of text the command layer prints.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task added successfully with ID {}.", id),
            Message::TaskMarkedDone(id) => format!("Task {} marked as done!", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully!", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksRenumbered => "Remaining tasks have been renumbered.".to_string(),

            // === STORAGE MESSAGES ===
            Message::TasksFileCorrupt(error) => format!("{}. Starting with an empty task list.", error),
            Message::TasksFileBackedUp(path) => format!("The unreadable file was backed up to {}", path),
            Message::TasksFileUnreadable(error) => format!("{}. Continuing with an empty task list.", error),
            Message::TasksFileBackupFailed(error) => format!("Failed to back up the unreadable tasks file: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::TasksFileLocation(path) => format!("Tasks are stored in {}", path),

            // === MENU ===
            Message::MenuTitle => "==== TO-DO LIST MANAGER ====".to_string(),
            Message::MenuAddTask => "Add Task".to_string(),
            Message::MenuViewTasks => "View Tasks".to_string(),
            Message::MenuMarkDone => "Mark Task as Done".to_string(),
            Message::MenuDeleteTask => "Delete Task".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::MenuGoodbye => "Exiting... Tasks saved.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptDueDate => "Enter due date (YYYY-MM-DD) or leave blank".to_string(),
            Message::PromptTags => "Enter tags (comma separated)".to_string(),
            Message::PromptMarkDoneId => "Enter task ID to mark as done".to_string(),
            Message::PromptDeleteId => "Enter task ID to delete".to_string(),
            Message::PromptTasksFile => "Tasks file location (leave blank for default)".to_string(),

            // === ERRORS ===
            Message::Error(error) => error.clone(),
        };
        write!(f, "{}", text)
    }
}
