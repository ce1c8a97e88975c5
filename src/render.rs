// Terminal rendering of tasks, the dashboard and the filter bar

use crate::filter::Filter;
use crate::models::{Task, TaskPriority, TaskStatus};
use colored::{ColoredString, Colorize};
use eyre::{Context, Result};
use std::io::Write;

pub fn status_badge(status: TaskStatus) -> ColoredString {
    let label = format!("[{}]", status.label());
    match status {
        TaskStatus::Pending => label.yellow(),
        TaskStatus::InProgress => label.blue(),
        TaskStatus::Completed => label.green(),
    }
}

pub fn priority_badge(priority: TaskPriority) -> ColoredString {
    let label = format!("{} Priority", priority.label());
    match priority {
        TaskPriority::Low => label.green(),
        TaskPriority::Medium => label.yellow(),
        TaskPriority::High => label.red(),
    }
}

/// "1 Task Found" / "N Tasks Found"
pub fn heading(count: usize) -> String {
    let noun = if count == 1 { "Task" } else { "Tasks" };
    format!("{} {} Found", count, noun)
}

/// Heading plus one card per task, or the empty-state hint
pub fn write_dashboard<W: Write>(out: &mut W, tasks: &[&Task]) -> Result<()> {
    writeln!(out, "{}", heading(tasks.len()).bold())?;

    if tasks.is_empty() {
        writeln!(out, "{}", "No tasks found matching your filters.".dimmed())?;
        writeln!(out, "Use `add` to create a task or `clear` to reset the filters.")?;
        return Ok(());
    }

    for task in tasks {
        writeln!(out)?;
        write_card(out, task)?;
    }
    Ok(())
}

pub fn write_card<W: Write>(out: &mut W, task: &Task) -> Result<()> {
    writeln!(out, "{} {}", task.title.bold(), status_badge(task.status))?;
    writeln!(out, "  {}", task.description)?;
    writeln!(out, "  {}  Due: {}", priority_badge(task.priority), task.due_date)?;
    writeln!(out, "  {}", format!("id: {}", task.id).dimmed())?;
    Ok(())
}

/// Full view of one task
pub fn write_details<W: Write>(out: &mut W, task: &Task) -> Result<()> {
    writeln!(out, "{} {}", task.title.bold(), status_badge(task.status))?;
    writeln!(out, "{}  Due: {}", priority_badge(task.priority), task.due_date)?;
    writeln!(out)?;
    writeln!(out, "{}", "Description".underline())?;
    for line in task.description.lines() {
        writeln!(out, "  {}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", format!("Created on: {}", task.created_at).dimmed())?;
    writeln!(out, "{}", format!("id: {}", task.id).dimmed())?;
    Ok(())
}

pub fn write_filter<W: Write>(out: &mut W, filter: &Filter) -> Result<()> {
    let search = if filter.search_term.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", filter.search_term)
    };
    writeln!(
        out,
        "Filter: status={} priority={} search={}",
        filter.status, filter.priority, search
    )?;
    Ok(())
}

/// Pretty JSON array of the given tasks
pub fn tasks_json(tasks: &[&Task]) -> Result<String> {
    serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::models::seed_tasks;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(0), "0 Tasks Found");
        assert_eq!(heading(1), "1 Task Found");
        assert_eq!(heading(3), "3 Tasks Found");
    }

    #[test]
    fn test_dashboard_lists_cards() {
        let tasks = seed_tasks();
        let refs: Vec<&Task> = tasks.iter().collect();
        let out = rendered(|buf| write_dashboard(buf, &refs));

        assert!(out.contains("3 Tasks Found"));
        assert!(out.contains("Complete project proposal"));
        assert!(out.contains("Weekly team meeting"));
        assert!(out.contains("Due: 2025-05-05"));
    }

    #[test]
    fn test_dashboard_empty() {
        let out = rendered(|buf| write_dashboard(buf, &[]));
        assert!(out.contains("0 Tasks Found"));
        assert!(out.contains("No tasks found matching your filters."));
    }

    #[test]
    fn test_details_includes_created_on() {
        let task = seed_tasks().remove(1);
        let out = rendered(|buf| write_details(buf, &task));
        assert!(out.contains("Created on: 2025-05-08"));
        assert!(out.contains("Discuss project progress"));
    }

    #[test]
    fn test_badges() {
        assert!(status_badge(TaskStatus::InProgress).to_string().contains("[In Progress]"));
        assert!(priority_badge(TaskPriority::High).to_string().contains("High Priority"));
    }

    #[test]
    fn test_filter_line() {
        let filter = Filter {
            status: Selection::Only(TaskStatus::Pending),
            priority: Selection::All,
            search_term: "docs".to_string(),
        };
        let out = rendered(|buf| write_filter(buf, &filter));
        assert_eq!(out, "Filter: status=pending priority=all search=\"docs\"\n");

        let out = rendered(|buf| write_filter(buf, &Filter::default()));
        assert!(out.contains("search=(none)"));
    }

    #[test]
    fn test_tasks_json() {
        let tasks = seed_tasks();
        let refs: Vec<&Task> = tasks.iter().take(1).collect();
        let json = tasks_json(&refs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "1");
        assert_eq!(value[0]["status"], "in-progress");
    }
}
