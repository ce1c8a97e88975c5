// View filtering for tasks

use crate::models::{Task, TaskPriority, TaskStatus};
use eyre::Result;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A filter field that either passes everything or pins one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// True if `value` passes this selection
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = eyre::Report>,
{
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Only)
    }
}

pub type StatusFilter = Selection<TaskStatus>;
pub type PriorityFilter = Selection<TaskPriority>;

/// Current view criteria
///
/// The default value passes every task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub search_term: String,
}

impl Filter {
    /// True if no field constrains the view
    pub fn is_clear(&self) -> bool {
        *self == Filter::default()
    }

    /// Whether `task` belongs in the filtered view
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_with_needle(task, &self.search_term.to_lowercase())
    }

    fn matches_with_needle(&self, task: &Task, needle: &str) -> bool {
        self.status.accepts(&task.status) && self.priority.accepts(&task.priority) && matches_search(task, needle)
    }
}

/// Case-insensitive substring match on title or description
///
/// `needle` must already be lower-cased.
fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

/// Tasks that pass `filter`, in their original order
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: &Filter) -> Vec<&'a Task> {
    let needle = filter.search_term.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches_with_needle(task, &needle))
        .collect()
}

/// Holder of the session's current filter
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    filter: Filter,
    revision: u64,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        debug!(%status, "filter: status");
        self.filter.status = status;
        self.revision += 1;
    }

    pub fn set_priority(&mut self, priority: PriorityFilter) {
        debug!(%priority, "filter: priority");
        self.filter.priority = priority;
        self.revision += 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        debug!(term = %self.filter.search_term, "filter: search term");
        self.revision += 1;
    }

    /// Reset every field to the all-pass state
    pub fn clear(&mut self) {
        debug!("filter: cleared");
        self.filter = Filter::default();
        self.revision += 1;
    }

    pub fn current(&self) -> &Filter {
        &self.filter
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: &str, title: &str, description: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            priority,
            due_date: date,
            created_at: date,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Write report", "Quarterly numbers", TaskStatus::Pending, TaskPriority::High),
            task("2", "Buy milk", "Semi-skimmed", TaskStatus::Completed, TaskPriority::Low),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let tasks = sample();
        let filter = Filter::default();
        assert!(filter.is_clear());
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["1", "2"]);
    }

    #[test]
    fn test_status_filter() {
        let tasks = sample();
        let filter = Filter {
            status: Selection::Only(TaskStatus::Pending),
            ..Filter::default()
        };
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["1"]);
    }

    #[test]
    fn test_priority_filter() {
        let tasks = sample();
        let filter = Filter {
            priority: Selection::Only(TaskPriority::Low),
            ..Filter::default()
        };
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["2"]);

        let filter = Filter {
            priority: Selection::Only(TaskPriority::Medium),
            ..Filter::default()
        };
        assert!(visible_tasks(&tasks, &filter).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tasks = sample();
        let filter = Filter {
            search_term: "report".to_string(),
            ..Filter::default()
        };
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["1"]);

        let filter = Filter {
            search_term: "MiLk".to_string(),
            ..Filter::default()
        };
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["2"]);
    }

    #[test]
    fn test_search_matches_description() {
        let tasks = sample();
        let filter = Filter {
            search_term: "skimmed".to_string(),
            ..Filter::default()
        };
        assert_eq!(ids(&visible_tasks(&tasks, &filter)), vec!["2"]);
    }

    #[test]
    fn test_all_constraints_must_hold() {
        let tasks = sample();
        let filter = Filter {
            status: Selection::Only(TaskStatus::Pending),
            priority: Selection::Only(TaskPriority::High),
            search_term: "milk".to_string(),
        };
        assert!(visible_tasks(&tasks, &filter).is_empty());
    }

    #[test]
    fn test_visible_preserves_order_and_is_pure() {
        let mut tasks = sample();
        tasks.insert(1, task("3", "Report bug", "", TaskStatus::Pending, TaskPriority::Low));
        let filter = Filter {
            search_term: "REPORT".to_string(),
            ..Filter::default()
        };

        let first = ids(&visible_tasks(&tasks, &filter));
        let second = ids(&visible_tasks(&tasks, &filter));
        assert_eq!(first, vec!["1", "3"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_agrees_with_visible_tasks() {
        let tasks = sample();
        let filter = Filter {
            status: Selection::Only(TaskStatus::Completed),
            ..Filter::default()
        };
        let expected: Vec<bool> = tasks.iter().map(|t| filter.matches(t)).collect();
        assert_eq!(expected, vec![false, true]);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<PriorityFilter>().unwrap(), Selection::All);
        assert_eq!(
            "in-progress".parse::<StatusFilter>().unwrap(),
            Selection::Only(TaskStatus::InProgress)
        );
        assert!("sometimes".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(StatusFilter::All.to_string(), "all");
        assert_eq!(Selection::Only(TaskPriority::High).to_string(), "high");
    }

    #[test]
    fn test_filter_store_setters() {
        let mut store = FilterStore::new();
        store.set_status(Selection::Only(TaskStatus::Completed));
        store.set_priority(Selection::Only(TaskPriority::Medium));
        store.set_search_term("docs");

        let current = store.current();
        assert_eq!(current.status, Selection::Only(TaskStatus::Completed));
        assert_eq!(current.priority, Selection::Only(TaskPriority::Medium));
        assert_eq!(current.search_term, "docs");
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_filter_store_clear() {
        let mut store = FilterStore::new();
        store.set_status(Selection::Only(TaskStatus::Pending));
        store.set_search_term("x");
        store.clear();

        assert_eq!(
            store.current(),
            &Filter {
                status: Selection::All,
                priority: Selection::All,
                search_term: String::new(),
            }
        );

        // Clearing an already-clear filter is harmless
        store.clear();
        assert!(store.current().is_clear());
    }
}
