use std::path::PathBuf;

use crate::chart::{build_scene_with_slots, ChartScene, SlotAssignment, NOTE_OFFSET};
use crate::config::{AppSettings, ViewSettings};
use crate::error::EmptyScheduleError;
use crate::io::csv_import::{self, ImportReport};
use crate::io::scene_export;
use crate::model::{Schedule, TaskRecord, TimelineViewport};
use crate::ui;

const SAMPLE_CSV: &str = include_str!("../demos/sample_schedule.csv");

/// A schedule together with everything derived from it.
///
/// Built in one go and replaced wholesale when a new file is loaded.
pub struct LoadedChart {
    pub schedule: Schedule,
    pub slots: SlotAssignment,
    pub scene: ChartScene,
}

impl LoadedChart {
    pub fn build(schedule: Schedule, settings: &AppSettings) -> Result<Self, EmptyScheduleError> {
        let slots = SlotAssignment::for_schedule(&schedule);
        let scene = build_scene_with_slots(&schedule, &slots, &settings.chart)?;
        Ok(Self {
            schedule,
            slots,
            scene,
        })
    }

    pub fn tasks_by_slot(&self) -> Vec<&TaskRecord> {
        self.slots.iter(&self.schedule).map(|(_, task)| task).collect()
    }

    fn viewport(&self, settings: &AppSettings) -> TimelineViewport {
        let dates = &self.scene.axes.dates;
        let top = self.scene.bars.len() as f64 + NOTE_OFFSET;
        let mut viewport = TimelineViewport::new(dates.min_coord(), dates.max_coord(), -1.0, top);
        viewport.pixels_per_day = settings.view.pixels_per_day;
        viewport.row_height = settings.view.row_height;
        viewport
    }
}

/// Main application state.
pub struct GanttApp {
    pub chart: Option<LoadedChart>,
    pub viewport: TimelineViewport,
    pub file_path: Option<PathBuf>,
    pub selected_slot: Option<usize>,

    pub settings: AppSettings,
    pub settings_path: PathBuf,

    pub show_about: bool,
    pub status_message: String,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load(&settings_path);

        let mut app = Self {
            chart: None,
            viewport: TimelineViewport::new(0.0, 1.0, 0.0, 1.0),
            file_path: None,
            selected_slot: None,
            settings,
            settings_path,
            show_about: false,
            status_message: "Ready".to_string(),
        };

        match initial_file {
            Some(path) => app.load_file(path),
            None => match csv_import::parse_csv("Sample Schedule", SAMPLE_CSV) {
                Ok(report) => {
                    app.replace_schedule(report.schedule);
                }
                Err(e) => tracing::warn!("Failed to load sample schedule: {}", e),
            },
        }
        app
    }

    /// Swap in a new schedule and rebuild all derived state.
    ///
    /// On failure the current schedule stays in place.
    fn replace_schedule(&mut self, schedule: Schedule) -> bool {
        match LoadedChart::build(schedule, &self.settings) {
            Ok(chart) => {
                self.viewport = chart.viewport(&self.settings);
                self.chart = Some(chart);
                self.selected_slot = None;
                true
            }
            Err(e) => {
                tracing::warn!("Chart not rebuilt: {}", e);
                self.status_message = format!("Error loading CSV file: {}", e);
                ui::dialogs::show_error("Error", &self.status_message);
                false
            }
        }
    }

    pub fn open_csv(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select a CSV File")
            .add_filter("CSV files", &["csv", "txt"]);
        if let Some(dir) = &self.settings.view.last_directory {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            if let Some(dir) = path.parent() {
                self.settings.view.last_directory = Some(dir.to_path_buf());
                self.settings.save(&self.settings_path);
            }
            self.load_file(path);
        }
    }

    fn load_file(&mut self, path: PathBuf) {
        match csv_import::import_csv(&path) {
            Ok(ImportReport { schedule, skipped }) => {
                let count = schedule.len();
                if self.replace_schedule(schedule) {
                    self.file_path = Some(path);
                    self.status_message = if skipped > 0 {
                        format!("Loaded {} tasks ({} rows skipped)", count, skipped)
                    } else {
                        format!("Loaded {} tasks", count)
                    };
                }
            }
            Err(e) => {
                tracing::warn!("CSV import failed: {}", e);
                self.status_message = format!("Error loading CSV file: {}", e);
                ui::dialogs::show_error("Error", &self.status_message);
            }
        }
    }

    pub fn export_scene(&mut self) {
        let Some(chart) = &self.chart else {
            self.status_message = "Nothing to export, no chart loaded".to_string();
            return;
        };

        let default_name = format!("{}.json", chart.schedule.name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .set_file_name(&default_name)
            .save_file()
        {
            self.status_message = match scene_export::export_scene(&chart.scene, &path) {
                Ok(count) => format!("Exported {} bars to {}", count, path.display()),
                Err(e) => format!("Scene export failed: {}", e),
            };
        }
    }

    pub fn schedule_name(&self) -> &str {
        self.chart.as_ref().map_or("", |c| c.schedule.name.as_str())
    }

    pub fn task_count(&self) -> usize {
        self.chart.as_ref().map_or(0, |c| c.schedule.len())
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.remember_zoom();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.remember_zoom();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.pixels_per_day = ViewSettings::default().pixels_per_day;
        self.remember_zoom();
    }

    fn remember_zoom(&mut self) {
        self.settings.view.pixels_per_day = self.viewport.pixels_per_day;
        self.settings.save(&self.settings_path);
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_open = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::O));
        if should_open {
            self.open_csv();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.task_count()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(egui::RichText::new(" · ").size(10.5).color(ui::theme::TEXT_DIM));
                        let default_ppd = ViewSettings::default().pixels_per_day;
                        ui.label(
                            egui::RichText::new(format!(
                                "Zoom: {:.0}%",
                                self.viewport.pixels_per_day / default_ppd * 100.0
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        if self.chart.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a CSV file to display its schedule (File → Open CSV...)");
                });
            });
            ui::dialogs::show_about_dialog(self, ctx);
            return;
        }
        let Some(chart) = &self.chart else {
            return;
        };
        let tasks_by_slot = chart.tasks_by_slot();

        // Left panel: task table
        let mut clicked_slot = None;
        egui::SidePanel::left("task_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                if let ui::task_table::TaskTableAction::Select(slot) =
                    ui::task_table::show_task_table(&tasks_by_slot, self.selected_slot, ui)
                {
                    clicked_slot = Some(slot);
                }
            });

        // Central panel: chart
        let mut zoomed = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let interaction = ui::gantt_chart::show_gantt_chart(
                    &chart.scene,
                    &tasks_by_slot,
                    &mut self.viewport,
                    self.selected_slot,
                    ui,
                );
                clicked_slot = clicked_slot.or(interaction.clicked_slot);
                zoomed = interaction.zoomed;
            });

        if let Some(slot) = clicked_slot {
            self.selected_slot = Some(slot);
        }
        if zoomed {
            self.remember_zoom();
        }

        ui::dialogs::show_about_dialog(self, ctx);
    }
}
