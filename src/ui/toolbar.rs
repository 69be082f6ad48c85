use crate::app::GanttApp;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut GanttApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button("  File  ", |ui| {
            if ui.button(format!("{}  Open CSV...", icons::FOLDER_OPEN)).clicked() {
                app.open_csv();
                ui.close_menu();
            }
            if ui.button(format!("{}  Export Scene...", icons::EXPORT)).clicked() {
                app.export_scene();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Exit", icons::SIGN_OUT)).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button("  View  ", |ui| {
            if ui
                .button(format!("{}  Zoom In        Ctrl+Scroll ↑", icons::MAGNIFYING_GLASS_PLUS))
                .clicked()
            {
                app.zoom_in();
                ui.close_menu();
            }
            if ui
                .button(format!("{}  Zoom Out      Ctrl+Scroll ↓", icons::MAGNIFYING_GLASS_MINUS))
                .clicked()
            {
                app.zoom_out();
                ui.close_menu();
            }
            if ui.button(format!("{}  Reset Zoom", icons::ARROW_COUNTER_CLOCKWISE)).clicked() {
                app.reset_zoom();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Open Settings Folder", icons::GEAR)).clicked() {
                let dir = crate::config::AppSettings::config_dir();
                if let Err(e) = std::fs::create_dir_all(&dir) {
                    tracing::warn!("Failed to create {:?}: {}", dir, e);
                }
                if let Err(e) = open::that(&dir) {
                    tracing::warn!("Failed to open {:?}: {}", dir, e);
                }
                ui.close_menu();
            }
        });

        ui.menu_button("  Help  ", |ui| {
            if ui.button(format!("{}  About", icons::INFO)).clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned schedule name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let source = if app.file_path.is_some() { "" } else { " (sample)" };
            ui.label(
                RichText::new(format!("{}{}", app.schedule_name(), source))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
