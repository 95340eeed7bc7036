//! The task record.

use std::fmt;

/// Opaque identity of a task, unique within the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        TaskId(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    pub text: String,
    pub is_completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            is_completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Flip the completion state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(TaskId::from_raw(1), "buy milk".into());
        assert!(!task.is_completed);
        assert_eq!(task.text, "buy milk");
    }

    #[test]
    fn toggle_flips_both_ways() {
        let mut task = Task::new(TaskId::from_raw(1), "walk dog".into());
        assert!(task.toggle());
        assert!(task.is_completed);
        assert!(!task.toggle());
        assert!(!task.is_completed);
    }

    #[test]
    fn id_display() {
        assert_eq!(TaskId::from_raw(3).to_string(), "task-3");
    }
}
