use crate::app::GanttApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut open = app.show_about;
    Window::new(RichText::new("About").strong().size(14.0))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("CSV Gantt Viewer {}", env!("CARGO_PKG_VERSION")))
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(env!("CARGO_PKG_DESCRIPTION")).color(theme::TEXT_SECONDARY));
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Expected columns: OutlineLevel, ID, Name, Start, Finish, PercentComplete, \
                     Predecessors, Resource, ColorCode, Notes",
                )
                .size(11.0)
                .color(theme::TEXT_DIM),
            );
        });
    app.show_about = open;
}

/// Show a blocking error message box.
pub fn show_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_title(title)
        .set_description(message)
        .set_level(rfd::MessageLevel::Error)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
