//! Vertical slot assignment.

use crate::model::{Schedule, TaskRecord};

/// Vertical position of each task, zero-based.
///
/// Tasks are identified by their index in [`Schedule::tasks`], so duplicate
/// ids still get distinct slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    /// Task indices in slot order.
    order: Vec<usize>,
    /// `slots[task_index]` is that task's slot.
    slots: Vec<usize>,
}

impl SlotAssignment {
    /// Order tasks by outline level, then id. Equal keys keep input order.
    pub fn for_schedule(schedule: &Schedule) -> Self {
        let tasks = schedule.tasks();
        let mut order: Vec<usize> = (0..tasks.len()).collect();
        order.sort_by_key(|&i| sort_key(&tasks[i]));

        let mut slots = vec![0; tasks.len()];
        for (slot, &task_index) in order.iter().enumerate() {
            slots[task_index] = slot;
        }

        Self { order, slots }
    }

    /// Slot of the task at `task_index`.
    pub fn slot_of(&self, task_index: usize) -> Option<usize> {
        self.slots.get(task_index).copied()
    }

    /// Task indices from slot 0 upwards.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(slot, task)` pairs in slot order.
    pub fn iter<'a>(
        &'a self,
        schedule: &'a Schedule,
    ) -> impl Iterator<Item = (usize, &'a TaskRecord)> + 'a {
        self.order
            .iter()
            .enumerate()
            .map(move |(slot, &i)| (slot, &schedule.tasks()[i]))
    }
}

fn sort_key(task: &TaskRecord) -> (u32, u32) {
    (task.outline_level, task.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn task(id: u32, level: u32, name: &str) -> TaskRecord {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut t = TaskRecord::new(id, name, day, day);
        t.outline_level = level;
        t
    }

    #[test]
    fn orders_by_level_then_id() {
        let schedule = Schedule::new(
            "s",
            vec![task(5, 2, "e"), task(3, 1, "c"), task(9, 1, "i"), task(1, 2, "a")],
        );
        let slots = SlotAssignment::for_schedule(&schedule);
        let names: Vec<&str> = slots.iter(&schedule).map(|(_, t)| t.name.as_str()).collect();
        assert_eq!(names, vec!["c", "i", "a", "e"]);
        assert_eq!(slots.slot_of(0), Some(3));
        assert_eq!(slots.slot_of(3), Some(2));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let schedule = Schedule::new(
            "s",
            vec![task(4, 0, "first"), task(4, 0, "second"), task(2, 0, "head")],
        );
        let slots = SlotAssignment::for_schedule(&schedule);
        assert_eq!(slots.order(), &[2, 0, 1]);
    }

    #[test]
    fn slots_are_unique_and_stable() {
        let schedule = Schedule::new(
            "s",
            (0..20).map(|i| task((i * 7) % 11, i % 3, "t")).collect(),
        );
        let first = SlotAssignment::for_schedule(&schedule);
        let second = SlotAssignment::for_schedule(&schedule);
        assert_eq!(first, second);

        let mut seen: Vec<usize> = (0..schedule.len())
            .map(|i| first.slot_of(i).unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..schedule.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_schedule_has_no_slots() {
        let slots = SlotAssignment::for_schedule(&Schedule::default());
        assert!(slots.is_empty());
        assert_eq!(slots.slot_of(0), None);
    }
}
