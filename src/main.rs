#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use csv_gantt_viewer::app;
use tracing_subscriber::EnvFilter;

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    // Optional CSV path to open on startup.
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("CSV Gantt Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Gantt Viewer",
        options,
        Box::new(|cc| Ok(Box::new(app::GanttApp::new(cc, initial_file)))),
    )
}
