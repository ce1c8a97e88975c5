// User-facing notifications for completed or failed operations

use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// A short toast-style message: a title plus one line of detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::failure("Error", description)
    }

    pub fn task_created() -> Self {
        Self::success("Task created", "Your new task has been created successfully.")
    }

    pub fn task_updated() -> Self {
        Self::success("Task updated", "Your task has been updated successfully.")
    }

    pub fn task_deleted() -> Self {
        Self::success("Task deleted", "The task has been successfully deleted.")
    }

    pub fn task_completed() -> Self {
        Self::success("Task completed", "The task has been marked as completed.")
    }

    pub fn already_completed() -> Self {
        Self::success("Already completed", "The task was already marked as completed.")
    }

    pub fn status_changed(label: &str) -> Self {
        Self::success("Status updated", format!("The task is now {}.", label))
    }

    pub fn not_found() -> Self {
        Self::error("Task not found.")
    }

    pub fn validation_failed() -> Self {
        Self::failure("Validation Error", "Please fill in all required fields.")
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.variant {
            Variant::Default => self.title.green().bold(),
            Variant::Destructive => self.title.red().bold(),
        };
        write!(f, "{}: {}", title, self.description)
    }
}
