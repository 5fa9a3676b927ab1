//! Task store: the single owner of the task list.
//!
//! Every mutation goes through this type; the UI only ever sees the
//! read-only snapshot returned by [`TaskStore::tasks`]. Invalid input
//! (whitespace-only title, unknown id) is a silent no-op, never an error.

use uuid::Uuid;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id, generated at creation, immutable for the task's lifetime
    pub id: String,
    /// Trimmed, non-empty title
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

/// Completion counts derived from the current list (never stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl Stats {
    /// Completed fraction in `[0, 1]`. Zero for an empty list.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Ordered task collection. Insertion order is display order; there is no
/// reordering operation.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Trims `raw` and appends a new, uncompleted task.
    ///
    /// Whitespace-only input is ignored. Returns the new task's id on
    /// success so callers can track what they created.
    pub fn add(&mut self, raw: &str) -> Option<String> {
        let title = raw.trim();
        if title.is_empty() {
            return None;
        }

        let id = Uuid::new_v4().to_string();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flips the completion flag of the task with `id`. No other task is
    /// touched; unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Removes the task with `id`, preserving the order of the rest.
    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Scans the current list and counts completed/total.
    pub fn stats(&self) -> Stats {
        Stats {
            completed: self.tasks.iter().filter(|t| t.completed).count(),
            total: self.tasks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_title() {
        let mut store = TaskStore::new();
        store.add("  Buy milk  ");

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_add_whitespace_only_is_noop() {
        let mut store = TaskStore::new();
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("\t\n"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap();
        let b = store.add("B").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap();
        let b = store.add("B").unwrap();

        store.toggle(&a);
        assert!(store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);

        store.toggle(&a);
        assert!(!store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);

        // b untouched throughout
        assert_eq!(store.tasks()[1].id, b);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("A");
        let before = store.tasks().to_vec();

        store.toggle("no-such-id");
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = TaskStore::new();
        store.add("A");
        let b = store.add("B").unwrap();
        store.add("C");

        store.delete(&b);

        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("A");
        store.add("B");
        let before = store.tasks().to_vec();

        store.delete("no-such-id");
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_stats_counts_and_progress() {
        let mut store = TaskStore::new();
        assert_eq!(store.stats(), Stats { completed: 0, total: 0 });
        assert_eq!(store.stats().progress(), 0.0);

        let a = store.add("A").unwrap();
        store.add("B");
        store.add("C");
        store.add("D");
        store.toggle(&a);

        let stats = store.stats();
        assert_eq!(stats, Stats { completed: 1, total: 4 });
        assert_eq!(stats.progress(), 0.25);
    }

    #[test]
    fn test_add_toggle_delete_sequence() {
        let mut store = TaskStore::new();
        let a = store.add("A").unwrap();
        let b = store.add("B").unwrap();

        store.toggle(&a);
        store.delete(&b);

        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "A");
        assert!(store.tasks()[0].completed);
        assert_eq!(store.stats(), Stats { completed: 1, total: 1 });
        assert_eq!(store.stats().progress(), 1.0);
    }
}
