use serde::{Deserialize, Serialize};

use super::task::Task;

/// The ordered task list for one named day.
///
/// Tasks stay sorted by `(start, end)` ascending: every addition re-sorts
/// (stably, so ties keep insertion order), removal never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    name: String,
    tasks: Vec<Task>,
}

impl DaySchedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.sort_by_time();
    }

    /// Remove the task at `index`. The remaining order is untouched.
    pub fn remove_task(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Swap in an edited task and restore the time ordering.
    pub fn replace_task(&mut self, index: usize, task: Task) -> bool {
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                self.sort_by_time();
                true
            }
            None => false,
        }
    }

    /// Flip a completion flag in place; does not reorder.
    pub fn set_completed(&mut self, index: usize, completed: bool) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    fn sort_by_time(&mut self) {
        self.tasks
            .sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    }
}
