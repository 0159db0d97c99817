//! In-memory task store

use tracing::debug;

use super::error::Result;
use super::model::Task;

/// Ordered, in-memory collection of tasks.
///
/// The store owns its tasks and lives for the process duration; nothing is
/// persisted. All operations are linear scans over insertion order. Titles
/// are not unique: by-title operations act on every matching row.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the due date and append a new pending task.
    ///
    /// The only fallible operation on the store: a malformed date string
    /// leaves the store untouched.
    pub fn add_task(&mut self, title: &str, description: &str, due_date_str: &str) -> Result<()> {
        let task = Task::new(title, description, due_date_str)?;
        debug!("Added task '{}' due {}", task.title, task.due_date_display());
        self.tasks.push(task);
        Ok(())
    }

    /// Remove every task whose title matches exactly. Matching nothing is
    /// not an error.
    pub fn remove_task(&mut self, title: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.title != title);
        debug!("Removed {} task(s) titled '{}'", before - self.tasks.len(), title);
    }

    /// Set the completed flag on every task whose title matches exactly
    pub fn mark_as_completed(&mut self, title: &str) {
        self.set_completed(title, true);
    }

    /// Clear the completed flag on every task whose title matches exactly
    pub fn mark_as_not_completed(&mut self, title: &str) {
        self.set_completed(title, false);
    }

    fn set_completed(&mut self, title: &str, completed: bool) {
        let mut matched = 0;
        for task in self.tasks.iter_mut().filter(|t| t.title == title) {
            task.completed = completed;
            matched += 1;
        }
        if matched == 0 {
            debug!("No tasks titled '{}' to mark", title);
        } else {
            debug!("Marked {} task(s) titled '{}' completed={}", matched, title, completed);
        }
    }

    /// Tasks not yet completed, in insertion order
    pub fn get_pending_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.completed).collect()
    }

    /// Completed tasks, in insertion order
    pub fn get_completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.completed).collect()
    }

    /// Every task, in insertion order
    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether any task carries this exact title
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    /// Number of tasks currently stored
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
