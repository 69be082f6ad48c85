//! Gantt chart viewer for CSV schedules.
//!
//! [`io::csv_import`] reads a schedule, [`chart::build_scene`] turns it into
//! bars, connectors and note callouts in chart coordinates, and the egui
//! shell in [`app`] and [`ui`] paints them.

pub mod app;
pub mod chart;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod ui;

pub use chart::{build_scene, ChartScene, ChartStyle};
pub use error::{EmptyScheduleError, ExportError, ImportError};
pub use model::{Schedule, TaskRecord};
