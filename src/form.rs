// Add/edit task form state and validation
//
// Validation lives here, not in the store: the store accepts any well-typed
// record.

use crate::config::FormDefaults;
use crate::models::{Task, TaskDraft, TaskPriority, TaskStatus, parse_date};
use chrono::{Days, NaiveDate};
use std::fmt;

/// Raw field values as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Kept as text so that a malformed entry can be reported
    pub due_date: String,
}

/// Per-field validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub title: bool,
    pub description: bool,
    pub due_date: DueDateError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDateError {
    #[default]
    None,
    Missing,
    Malformed,
}

impl FormErrors {
    pub fn any(&self) -> bool {
        self.title || self.description || self.due_date != DueDateError::None
    }

    /// One message per failing field, in form order
    pub fn messages(&self) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if self.title {
            messages.push("Title is required");
        }
        if self.description {
            messages.push("Description is required");
        }
        match self.due_date {
            DueDateError::None => {}
            DueDateError::Missing => messages.push("Due date is required"),
            DueDateError::Malformed => messages.push("Due date must be YYYY-MM-DD"),
        }
        messages
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl TaskForm {
    /// Blank form for a new task, due `defaults.due_in_days` after `today`
    pub fn new(defaults: &FormDefaults, today: NaiveDate) -> Self {
        let due = u64::try_from(defaults.due_in_days)
            .ok()
            .and_then(|days| today.checked_add_days(Days::new(days)))
            .unwrap_or(today);

        Self {
            title: String::new(),
            description: String::new(),
            status: defaults.status,
            priority: defaults.priority,
            due_date: due.format("%Y-%m-%d").to_string(),
        }
    }

    /// Form pre-filled from an existing task, for editing
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Check required fields and produce a draft
    pub fn validate(&self) -> Result<TaskDraft, FormErrors> {
        let mut errors = FormErrors {
            title: self.title.trim().is_empty(),
            description: self.description.trim().is_empty(),
            ..FormErrors::default()
        };

        let due_date = if self.due_date.trim().is_empty() {
            errors.due_date = DueDateError::Missing;
            None
        } else {
            match parse_date(&self.due_date) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.due_date = DueDateError::Malformed;
                    None
                }
            }
        };

        match due_date {
            Some(due_date) if !errors.any() => Ok(TaskDraft {
                title: self.title.clone(),
                description: self.description.clone(),
                status: self.status,
                priority: self.priority,
                due_date,
            }),
            _ => Err(errors),
        }
    }
}
