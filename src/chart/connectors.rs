//! Dependency lines between bars.

use serde::{Deserialize, Serialize};

use super::axis::date_to_coord;
use super::layout::SlotAssignment;
use crate::model::{DependencyKind, Schedule, TaskId};

/// A line from a predecessor's finish to its successor's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorPrimitive {
    pub from_task: TaskId,
    pub to_task: TaskId,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Relation parsed from the predecessor field. Drawing does not vary
    /// with it yet.
    pub kind: DependencyKind,
    pub label: String,
}

/// One connector per resolvable predecessor entry.
///
/// Entries whose id matches no task are skipped; cycles and
/// self-references are drawn like any other link.
pub fn build_connectors(
    schedule: &Schedule,
    slots: &SlotAssignment,
    label: &str,
) -> Vec<ConnectorPrimitive> {
    let tasks = schedule.tasks();
    let by_id = schedule.id_index();
    let mut connectors = Vec::new();
    let mut dangling = 0usize;

    for &task_index in slots.order() {
        let task = &tasks[task_index];
        let Some(to_slot) = slots.slot_of(task_index) else {
            continue;
        };
        for link in &task.predecessors {
            let Some(&pred_index) = by_id.get(&link.id) else {
                dangling += 1;
                continue;
            };
            let Some(from_slot) = slots.slot_of(pred_index) else {
                continue;
            };
            let predecessor = &tasks[pred_index];
            connectors.push(ConnectorPrimitive {
                from_task: predecessor.id,
                to_task: task.id,
                x0: date_to_coord(predecessor.finish),
                y0: from_slot as f64,
                x1: date_to_coord(task.start),
                y1: to_slot as f64,
                kind: link.kind,
                label: label.to_string(),
            });
        }
    }

    if dangling > 0 {
        tracing::debug!(dangling, "Skipped predecessor references with no matching task");
    }
    connectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskRecord;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    fn build(tasks: Vec<TaskRecord>) -> Vec<ConnectorPrimitive> {
        let schedule = Schedule::new("s", tasks);
        let slots = SlotAssignment::for_schedule(&schedule);
        build_connectors(&schedule, &slots, "FS")
    }

    #[test]
    fn finish_of_predecessor_to_start_of_successor() {
        let connectors = build(vec![
            TaskRecord::new(2, "b", d(6), d(9)).with_predecessors("1"),
            TaskRecord::new(1, "a", d(1), d(5)),
        ]);
        assert_eq!(
            connectors,
            vec![ConnectorPrimitive {
                from_task: 1,
                to_task: 2,
                x0: date_to_coord(d(5)),
                y0: 0.0,
                x1: date_to_coord(d(6)),
                y1: 1.0,
                kind: DependencyKind::FinishToStart,
                label: "FS".into(),
            }]
        );
    }

    #[test]
    fn dangling_references_are_skipped() {
        let connectors = build(vec![
            TaskRecord::new(1, "a", d(1), d(2)),
            TaskRecord::new(2, "b", d(3), d(4)).with_predecessors("999,1"),
        ]);
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].from_task, 1);
    }

    #[test]
    fn label_is_fixed_whatever_the_kind() {
        let connectors = build(vec![
            TaskRecord::new(1, "a", d(1), d(2)),
            TaskRecord::new(2, "b", d(3), d(4)).with_predecessors("1SS"),
        ]);
        assert_eq!(connectors[0].kind, DependencyKind::StartToStart);
        assert_eq!(connectors[0].label, "FS");
        assert_eq!(connectors[0].x0, date_to_coord(d(2)));
    }

    #[test]
    fn self_reference_and_cycles_are_drawn() {
        let connectors = build(vec![
            TaskRecord::new(1, "a", d(1), d(2)).with_predecessors("1,2"),
            TaskRecord::new(2, "b", d(3), d(4)).with_predecessors("1"),
        ]);
        let pairs: Vec<(TaskId, TaskId)> =
            connectors.iter().map(|c| (c.from_task, c.to_task)).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 1), (1, 2)]);
        assert_eq!(connectors[0].y0, connectors[0].y1);
    }

    #[test]
    fn duplicate_entries_draw_twice() {
        let connectors = build(vec![
            TaskRecord::new(1, "a", d(1), d(2)),
            TaskRecord::new(2, "b", d(3), d(4)).with_predecessors("1FS;1"),
        ]);
        assert_eq!(connectors.len(), 2);
    }
}
