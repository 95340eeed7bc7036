//! The task sequence shared by the list and completed screens.
//!
//! [`TaskStore`] keeps tasks in creation order. Screens never see the raw
//! positions; they work with *display indices*, the position of a task inside
//! a filtered view (incomplete or completed). Once any task is completed the
//! two index spaces diverge, so every operation that takes a display index
//! resolves it to a [`TaskId`] against the current view before touching the
//! underlying sequence.

use std::collections::HashSet;

use crate::task::{Task, TaskId};

/// How submitted text is validated before a task is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Reject only the exactly-empty string. Whitespace-only input creates a
    /// blank-looking task.
    #[default]
    LiteralEmpty,
    /// Trim the input first, reject it if nothing is left, and store the
    /// trimmed text.
    TrimmedEmpty,
}

impl InputPolicy {
    /// Returns the text to store, or `None` if the input is rejected.
    pub fn accept(self, text: &str) -> Option<String> {
        match self {
            InputPolicy::LiteralEmpty => (!text.is_empty()).then(|| text.to_owned()),
            InputPolicy::TrimmedEmpty => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
        }
    }
}

/// Ordered, in-memory task sequence plus the text currently being typed.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Contents of the input row. Cleared after a successful submission.
    pub pending_input: String,
    policy: InputPolicy,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_policy(policy: InputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.policy
    }

    fn next_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::from_raw(self.next_id)
    }

    /// Append a new incomplete task.
    ///
    /// Input the policy rejects is silently ignored and `None` is returned.
    /// On success `pending_input` is cleared.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let text = self.policy.accept(text)?;
        let id = self.next_id();
        tracing::debug!(%id, "adding task");
        self.tasks.push(Task::new(id, text));
        self.pending_input.clear();
        Some(id)
    }

    /// Submit whatever is in `pending_input`.
    pub fn submit_pending(&mut self) -> Option<TaskId> {
        let text = self.pending_input.clone();
        self.add_task(&text)
    }

    /// Flip completion of the task with `id`. Returns `false` if it does not exist.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                let now = task.toggle();
                tracing::debug!(%id, completed = now, "toggled task");
                true
            }
            None => false,
        }
    }

    /// Remove the tasks shown at `display_indices` in the incomplete view.
    ///
    /// Indices past the end of the view and repeated indices are ignored.
    /// Completed tasks are never removed. Returns how many tasks were removed.
    pub fn delete_at<I>(&mut self, display_indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let view = self.incomplete_ids();
        let ids: Vec<TaskId> = display_indices
            .into_iter()
            .filter_map(|index| view.get(index).copied())
            .collect();
        self.delete_ids(ids)
    }

    /// Remove incomplete tasks by identity. Unknown and completed ids are skipped.
    pub fn delete_ids<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = TaskId>,
    {
        let doomed: HashSet<TaskId> = ids.into_iter().collect();
        if doomed.is_empty() {
            return 0;
        }

        let before = self.tasks.len();
        self.tasks
            .retain(|task| task.is_completed || !doomed.contains(&task.id()));
        let removed = before - self.tasks.len();
        tracing::debug!(removed, "deleted tasks");
        removed
    }

    /// Ids of the incomplete view, in display order.
    pub fn incomplete_ids(&self) -> Vec<TaskId> {
        self.incomplete().map(|(_, task)| task.id()).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// All tasks in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Incomplete tasks paired with their display index.
    pub fn incomplete(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .filter(|task| !task.is_completed)
            .enumerate()
    }

    /// Mutable incomplete view, used by the list screen to draw toggleable rows.
    ///
    /// Toggling a task while iterating does not shift later display indices;
    /// the filter is evaluated before each task is yielded.
    pub fn incomplete_mut(&mut self) -> impl Iterator<Item = (usize, &mut Task)> {
        self.tasks
            .iter_mut()
            .filter(|task| !task.is_completed)
            .enumerate()
    }

    /// Completed tasks paired with their display index.
    pub fn completed(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .filter(|task| task.is_completed)
            .enumerate()
    }

    pub fn incomplete_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
