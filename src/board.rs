// Session state: one task store plus one filter store

use crate::filter::{FilterStore, visible_tasks};
use crate::models::Task;
use crate::store::TaskStore;

/// Everything a presentation layer needs for one session
///
/// The two stores stay independent and are only combined when the visible
/// view is requested, so `visible()` always reflects the latest mutation.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub tasks: TaskStore,
    pub filter: FilterStore,
}

impl Board {
    pub fn new(tasks: TaskStore) -> Self {
        Self {
            tasks,
            filter: FilterStore::new(),
        }
    }

    /// Board starting with the example tasks
    pub fn seeded() -> Self {
        Self::new(TaskStore::seeded())
    }

    /// Tasks that pass the current filter, in store order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.tasks.list(), self.filter.current())
    }

    /// Combined revision of both stores
    ///
    /// Changes whenever either store mutates; a renderer can cache the
    /// visible view against it.
    pub fn revision(&self) -> (u64, u64) {
        (self.tasks.revision(), self.filter.revision())
    }
}
