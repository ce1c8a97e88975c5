// In-memory task store

use crate::models::{Task, TaskDraft, TaskStatus, seed_tasks, today};
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// Canonical, ordered list of tasks for one session
///
/// Newest tasks sit at the front. Mutations that reference an unknown id are
/// no-ops and report `false` instead of failing.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: u64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given tasks, in the given order
    ///
    /// Ids must be unique: a task whose id is already held is dropped, so the
    /// first occurrence wins.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::new();
        let tasks = tasks
            .into_iter()
            .filter(|task| {
                let fresh = seen.insert(task.id.clone());
                if !fresh {
                    warn!(id = %task.id, "with_tasks: dropping task with duplicate id");
                }
                fresh
            })
            .collect();

        Self { tasks, revision: 0 }
    }

    /// Create a store holding the example tasks
    pub fn seeded() -> Self {
        Self::with_tasks(seed_tasks())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a new task at the front of the list
    ///
    /// The store assigns the id and sets `created_at` to today's date.
    /// Returns the new id.
    pub fn add(&mut self, draft: TaskDraft) -> String {
        let id = self.fresh_id();
        let task = draft.into_task(id.clone(), today());

        debug!(id = %task.id, title = %task.title, "add: inserting task");
        self.tasks.insert(0, task);
        self.bump();

        id
    }

    /// Replace the task with the same id
    ///
    /// The stored `id` and `created_at` are kept; every other field comes from
    /// `task`. Returns `false` and changes nothing if the id is unknown.
    /// Replacing a task with identical fields leaves the revision alone.
    pub fn update(&mut self, task: Task) -> bool {
        let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            debug!(id = %task.id, "update: no such task");
            return false;
        };

        let replacement = Task {
            created_at: existing.created_at,
            ..task
        };
        if *existing == replacement {
            debug!(id = %existing.id, "update: nothing changed");
            return true;
        }
        *existing = replacement;

        debug!(id = %existing.id, "update: replaced task");
        self.bump();
        true
    }

    /// Change only the status of a task
    ///
    /// Returns `true` whenever the task exists, even if it already had
    /// `status`; the revision only moves on an actual change.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "set_status: no such task");
            return false;
        };
        if task.status == status {
            debug!(id, %status, "set_status: already set");
            return true;
        }

        debug!(id, from = %task.status, to = %status, "set_status: changing status");
        task.status = status;
        self.bump();
        true
    }

    /// Remove a task; removing an unknown id is a no-op
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(id, "remove: no such task");
            return false;
        }

        debug!(id, "remove: deleted task");
        self.bump();
        true
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All tasks, most recently added first
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counter bumped by every mutation that changed the list
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if !self.contains(&id) {
                return id;
            }
            warn!(id = %id, "Generated task id already in use, retrying");
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
