use super::error::TaskError;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// A single to-do item as persisted in the tasks file.
///
/// `id` is a positional handle: it always lies in `1..=N` and is
/// reassigned whenever a task before it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    pub fn new(id: u32, title: &str, due_date: Option<String>, tags: Vec<String>) -> Self {
        Task {
            id,
            title: title.to_string(),
            done: false,
            due_date,
            tags,
        }
    }
}

/// Parses a user-supplied task identifier. Only integers `>= 1` are accepted.
/// An integer too large for any task ID cannot match one, so it is `NotFound`.
pub fn parse_id(input: &str) -> Result<u32, TaskError> {
    let id = input.trim();
    match id.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(TaskError::NotFound(id.to_string())),
        _ => Err(TaskError::InvalidInput(input.to_string())),
    }
}

/// Blank input means "no due date". The format is not validated.
pub fn parse_due_date(input: &str) -> Option<String> {
    let due_date = input.trim();
    if due_date.is_empty() {
        None
    } else {
        Some(due_date.to_string())
    }
}

/// Splits comma-separated tags, trimming each one.
pub fn parse_tags(input: &str) -> Vec<String> {
    let tags = input.trim();
    if tags.is_empty() {
        return Vec::new();
    }
    tags.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        for input in ["abc", "", "1.5", "-3", "0", "2x"] {
            match parse_id(input) {
                Err(TaskError::InvalidInput(text)) => assert_eq!(text, input),
                other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_id_overflow_is_not_found() {
        for input in ["5000000000", " 99999999999999999999999 "] {
            match parse_id(input) {
                Err(TaskError::NotFound(id)) => assert_eq!(id, input.trim()),
                other => panic!("expected NotFound for {input:?}, got {other:?}"),
            }
        }
        assert!(matches!(parse_id("-5000000000"), Err(TaskError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("   "), None);
        assert_eq!(parse_due_date(" 2025-01-15 "), Some("2025-01-15".to_string()));
        // Format is the caller's business
        assert_eq!(parse_due_date("tomorrow"), Some("tomorrow".to_string()));
    }

    #[test]
    fn test_parse_tags() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  ").is_empty());
        assert_eq!(parse_tags("work, home ,urgent"), vec!["work", "home", "urgent"]);
        assert_eq!(parse_tags("a,a"), vec!["a", "a"]);
        assert_eq!(parse_tags("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(3, "Buy milk", None, vec![]);
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert_eq!(task.due_date, None);
        assert!(task.tags.is_empty());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 1, "title": "A"}"#).unwrap();
        assert_eq!(task, Task::new(1, "A", None, vec![]));
    }
}
