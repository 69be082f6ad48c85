use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::task::{TaskId, TaskRecord};

/// An immutable, ordered set of tasks loaded from one source.
///
/// Cloning is cheap: the task list is shared. Loading a new file builds a
/// new `Schedule` rather than mutating the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub name: String,
    tasks: Arc<[TaskRecord]>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new("Untitled Schedule", Vec::new())
    }
}

impl Schedule {
    pub fn new(name: impl Into<String>, tasks: Vec<TaskRecord>) -> Self {
        Self {
            name: name.into(),
            tasks: tasks.into(),
        }
    }

    /// Tasks in source order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Map each id to the index of the first task carrying it.
    pub fn id_index(&self) -> HashMap<TaskId, usize> {
        let mut index = HashMap::with_capacity(self.tasks.len());
        for (i, task) in self.tasks.iter().enumerate() {
            index.entry(task.id).or_insert(i);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn id_index_prefers_first_occurrence() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let schedule = Schedule::new(
            "dupes",
            vec![
                TaskRecord::new(7, "first", day, day),
                TaskRecord::new(8, "other", day, day),
                TaskRecord::new(7, "second", day, day),
            ],
        );
        let index = schedule.id_index();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&7], 0);
        assert_eq!(index[&8], 1);
    }

    #[test]
    fn clones_share_tasks() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let schedule = Schedule::new("s", vec![TaskRecord::new(1, "a", day, day)]);
        let copy = schedule.clone();
        assert!(std::ptr::eq(schedule.tasks(), copy.tasks()));
    }
}
