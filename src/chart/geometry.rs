//! Bars and note callouts, one pass over the tasks in slot order.

use egui::{Align, Align2, Color32};
use serde::{Deserialize, Serialize};

use super::axis::{date_to_coord, slot_band};
use super::color::{hex_color, resolve_color_or};
use super::layout::SlotAssignment;
use super::notes::sanitize_notes;
use super::{ChartStyle, BAR_HALF_HEIGHT, NOTE_FONT_SIZE, NOTE_MAX_WIDTH, NOTE_OFFSET};
use crate::model::{Schedule, TaskId, TaskRecord};

/// A filled task bar in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub task_id: TaskId,
    pub slot: usize,
    pub x0: f64,
    /// Never less than `x0`.
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    #[serde(with = "hex_color")]
    pub fill: Color32,
    /// Percent complete, e.g. `"45%"`.
    pub label: String,
}

impl BarPrimitive {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

/// Which point of the text box sits on the callout position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl TextAnchor {
    pub const CENTER_BOTTOM: Self = Self {
        horizontal: HorizontalAnchor::Center,
        vertical: VerticalAnchor::Bottom,
    };

    pub fn align2(self) -> Align2 {
        let h = match self.horizontal {
            HorizontalAnchor::Left => Align::Min,
            HorizontalAnchor::Center => Align::Center,
            HorizontalAnchor::Right => Align::Max,
        };
        // Screen space: the bottom of the text box is the max y.
        let v = match self.vertical {
            VerticalAnchor::Top => Align::Min,
            VerticalAnchor::Middle => Align::Center,
            VerticalAnchor::Bottom => Align::Max,
        };
        Align2([h, v])
    }
}

/// A wrapped text box attached above a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteCallout {
    pub task_id: TaskId,
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Wrap width in layout units.
    pub max_width: f32,
    pub font_size: f32,
    pub anchor: TextAnchor,
}

/// Text shown inside a bar.
pub fn percent_label(percent_complete: f64) -> String {
    format!("{}%", percent_complete)
}

/// Build the bar for one task at `slot`.
pub fn build_bar(task: &TaskRecord, slot: usize, style: &ChartStyle) -> BarPrimitive {
    let x0 = date_to_coord(task.start);
    let x1 = date_to_coord(task.finish).max(x0);
    let (y0, y1) = slot_band(slot, BAR_HALF_HEIGHT);
    BarPrimitive {
        task_id: task.id,
        slot,
        x0,
        x1,
        y0,
        y1,
        fill: resolve_color_or(&task.color_code, style.fallback_color),
        label: percent_label(task.percent_complete),
    }
}

/// Build the note callout for a bar, if the task has any note text left
/// after sanitizing.
pub fn build_callout(task: &TaskRecord, bar: &BarPrimitive) -> Option<NoteCallout> {
    let text = sanitize_notes(&task.notes);
    if text.is_empty() {
        return None;
    }
    Some(NoteCallout {
        task_id: task.id,
        x: (bar.x0 + bar.x1) / 2.0,
        y: bar.slot as f64 + NOTE_OFFSET,
        text,
        max_width: NOTE_MAX_WIDTH,
        font_size: NOTE_FONT_SIZE,
        anchor: TextAnchor::CENTER_BOTTOM,
    })
}

/// Bars and callouts for every task, in slot order.
pub fn build_task_geometry(
    schedule: &Schedule,
    slots: &SlotAssignment,
    style: &ChartStyle,
) -> (Vec<BarPrimitive>, Vec<NoteCallout>) {
    let mut bars = Vec::with_capacity(slots.len());
    let mut callouts = Vec::new();
    for (slot, task) in slots.iter(schedule) {
        let bar = build_bar(task, slot, style);
        if let Some(callout) = build_callout(task, &bar) {
            callouts.push(callout);
        }
        bars.push(bar);
    }
    (bars, callouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn percent_is_bare_number() {
        assert_eq!(percent_label(50.0), "50%");
        assert_eq!(percent_label(12.5), "12.5%");
        assert_eq!(percent_label(150.0), "150%");
        assert_eq!(percent_label(-5.0), "-5%");
    }

    #[test]
    fn bar_spans_start_to_finish() {
        let mut task = TaskRecord::new(1, "a", d(2024, 1, 1), d(2024, 1, 4));
        task.color_code = "#102030".into();
        task.percent_complete = 25.0;
        let bar = build_bar(&task, 2, &ChartStyle::default());
        assert_eq!(bar.width(), 3.0);
        assert_eq!(bar.x0, date_to_coord(task.start));
        assert!((bar.y0 - 1.6).abs() < 1e-9);
        assert!((bar.y1 - 2.4).abs() < 1e-9);
        assert_eq!(bar.fill, Color32::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(bar.label, "25%");
    }

    #[test]
    fn inverted_dates_clamp_to_zero_width() {
        let task = TaskRecord::new(1, "a", d(2024, 1, 9), d(2024, 1, 4));
        let bar = build_bar(&task, 0, &ChartStyle::default());
        assert_eq!(bar.width(), 0.0);
        assert_eq!(bar.x0, date_to_coord(task.start));
    }

    #[test]
    fn malformed_color_uses_style_fallback() {
        let mut task = TaskRecord::new(1, "a", d(2024, 1, 1), d(2024, 1, 2));
        task.color_code = "bogus".into();
        let style = ChartStyle {
            fallback_color: Color32::BLACK,
        };
        assert_eq!(build_bar(&task, 0, &style).fill, Color32::BLACK);
    }

    #[test]
    fn callout_sits_above_bar_midpoint() {
        let mut task = TaskRecord::new(4, "a", d(2024, 1, 1), d(2024, 1, 5));
        task.notes = "<p>Check&nbsp;vendor</p>".into();
        let bar = build_bar(&task, 1, &ChartStyle::default());
        let callout = build_callout(&task, &bar).unwrap();
        assert_eq!(callout.text, "Check vendor");
        assert_eq!(callout.x, bar.x0 + 2.0);
        assert!((callout.y - 1.6).abs() < 1e-9);
        assert_eq!(callout.max_width, 200.0);
        assert_eq!(callout.font_size, 12.0);
        assert_eq!(callout.anchor, TextAnchor::CENTER_BOTTOM);
        assert_eq!(callout.anchor.align2(), Align2::CENTER_BOTTOM);
    }

    #[test]
    fn blank_notes_have_no_callout() {
        let mut task = TaskRecord::new(4, "a", d(2024, 1, 1), d(2024, 1, 5));
        let bar = build_bar(&task, 0, &ChartStyle::default());
        assert_eq!(build_callout(&task, &bar), None);
        task.notes = "   ".into();
        assert_eq!(build_callout(&task, &bar), None);
        task.notes = "<p></p>".into();
        assert_eq!(build_callout(&task, &bar), None);
    }

    #[test]
    fn geometry_follows_slot_order() {
        let mut late = TaskRecord::new(2, "late", d(2024, 1, 3), d(2024, 1, 6));
        late.notes = "n".into();
        let early = TaskRecord::new(1, "early", d(2024, 1, 1), d(2024, 1, 2));
        let schedule = Schedule::new("s", vec![late, early]);
        let slots = SlotAssignment::for_schedule(&schedule);
        let (bars, callouts) = build_task_geometry(&schedule, &slots, &ChartStyle::default());
        let ids: Vec<TaskId> = bars.iter().map(|b| b.task_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(bars[1].slot, 1);
        assert_eq!(callouts.len(), 1);
        assert_eq!(callouts[0].task_id, 2);
    }
}
