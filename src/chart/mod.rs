//! Schedule to chart geometry.
//!
//! [`build_scene`] runs the whole pipeline: slot assignment, axis bounds,
//! bars with their note callouts, then dependency connectors. The result is
//! a plain value that any drawing surface can consume.

pub mod axis;
pub mod color;
pub mod connectors;
pub mod geometry;
pub mod layout;
pub mod notes;
pub mod predecessors;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::EmptyScheduleError;
use crate::model::Schedule;

pub use axis::DateAxis;
pub use connectors::ConnectorPrimitive;
pub use geometry::{BarPrimitive, NoteCallout, TextAnchor};
pub use layout::SlotAssignment;

/// Half the bar thickness in slot units.
pub const BAR_HALF_HEIGHT: f64 = 0.4;
/// Vertical distance from a slot to its note callout.
pub const NOTE_OFFSET: f64 = 0.6;
pub const NOTE_MAX_WIDTH: f32 = 200.0;
pub const NOTE_FONT_SIZE: f32 = 12.0;
/// Text on every connector, whatever the parsed relation.
pub const CONNECTOR_LABEL: &str = "FS";

/// User-adjustable chart appearance. Geometry is fixed by the constants
/// above and is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    #[serde(with = "color::hex_color")]
    pub fallback_color: Color32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            fallback_color: color::SKY_BLUE,
        }
    }
}

/// Axis setup handed to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub title: String,
    pub date_title: String,
    /// `strftime` pattern for date tick labels.
    pub date_format: String,
    pub dates: DateAxis,
    pub category_title: String,
    /// Task names, one per slot, slot 0 first.
    pub categories: Vec<String>,
}

/// Everything needed to draw one schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub axes: AxisConfig,
    pub bars: Vec<BarPrimitive>,
    pub connectors: Vec<ConnectorPrimitive>,
    pub callouts: Vec<NoteCallout>,
}

/// Build the drawable scene for a schedule.
pub fn build_scene(schedule: &Schedule, style: &ChartStyle) -> Result<ChartScene, EmptyScheduleError> {
    build_scene_with_slots(schedule, &SlotAssignment::for_schedule(schedule), style)
}

/// Build the scene from a slot assignment the caller already holds.
pub fn build_scene_with_slots(
    schedule: &Schedule,
    slots: &SlotAssignment,
    style: &ChartStyle,
) -> Result<ChartScene, EmptyScheduleError> {
    let dates = DateAxis::from_schedule(schedule)?;

    let categories = slots.iter(schedule).map(|(_, t)| t.name.clone()).collect();
    let (bars, callouts) = geometry::build_task_geometry(schedule, slots, style);
    let connectors = connectors::build_connectors(schedule, slots, CONNECTOR_LABEL);

    tracing::debug!(
        schedule = %schedule.name,
        tasks = schedule.len(),
        bars = bars.len(),
        connectors = connectors.len(),
        callouts = callouts.len(),
        "Built chart scene"
    );

    Ok(ChartScene {
        axes: AxisConfig {
            title: "Gantt Chart".into(),
            date_title: "Date".into(),
            date_format: "%Y-%m-%d".into(),
            dates,
            category_title: "Tasks".into(),
            categories,
        },
        bars,
        connectors,
        callouts,
    })
}
