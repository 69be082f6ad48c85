use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::chart::geometry::percent_label;
use crate::model::TaskRecord;
use crate::ui::theme;

/// Deepest outline level that still adds indentation.
const MAX_INDENT_LEVELS: usize = 16;

/// Actions that the task table can request.
pub enum TaskTableAction {
    None,
    Select(usize),
}

/// Render the left-side task list, one row per slot.
pub fn show_task_table(
    tasks_by_slot: &[&TaskRecord],
    selected_slot: Option<usize>,
    ui: &mut Ui,
) -> TaskTableAction {
    let mut action = TaskTableAction::None;

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Tasks")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks_by_slot.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(4.0);
    ui.separator();

    let header = |ui: &mut Ui, text: &str| {
        ui.label(RichText::new(text).size(9.0).color(theme::TEXT_DIM).strong());
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(28.0))
        .column(Column::remainder().at_least(110.0).clip(true))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto().clip(true))
        .header(18.0, |mut row| {
            row.col(|ui| header(ui, "ID"));
            row.col(|ui| header(ui, "TASK"));
            row.col(|ui| header(ui, "START"));
            row.col(|ui| header(ui, "FINISH"));
            row.col(|ui| header(ui, "DONE"));
            row.col(|ui| header(ui, "PRED"));
        })
        .body(|mut body| {
            for (slot, task) in tasks_by_slot.iter().enumerate() {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(task.id.to_string()).color(theme::TEXT_DIM));
                    });
                    row.col(|ui| {
                        let selected = selected_slot == Some(slot);
                        if ui
                            .selectable_label(selected, indented_name(task))
                            .clicked()
                        {
                            action = TaskTableAction::Select(slot);
                        }
                    });
                    row.col(|ui| {
                        ui.label(task.start.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(task.finish.format("%Y-%m-%d").to_string());
                    });
                    row.col(|ui| {
                        ui.label(percent_label(task.percent_complete));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&task.predecessors_raw).color(theme::TEXT_SECONDARY));
                    });
                });
            }
        });

    action
}

/// Task name indented by outline level, capped at [`MAX_INDENT_LEVELS`].
fn indented_name(task: &TaskRecord) -> String {
    let depth = (task.outline_level as usize).min(MAX_INDENT_LEVELS);
    format!("{}{}", "  ".repeat(depth), task.name)
}
