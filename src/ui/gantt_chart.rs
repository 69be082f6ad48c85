use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

use crate::chart::axis::{coord_to_date, date_to_coord};
use crate::chart::{BarPrimitive, ChartScene};
use crate::model::{TaskRecord, TimelineViewport};
use crate::ui::theme;

const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const GUTTER_WIDTH: f32 = theme::GUTTER_WIDTH;

/// Result details from interactions in the Gantt chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Slot of a bar that was clicked.
    pub clicked_slot: Option<usize>,
    /// Zoom level changed through Ctrl+Scroll.
    pub zoomed: bool,
}

/// Chart-space to screen-space transform for one frame.
struct Canvas<'a> {
    origin: Pos2,
    viewport: &'a TimelineViewport,
}

impl Canvas<'_> {
    fn x(&self, x: f64) -> f32 {
        self.origin.x + GUTTER_WIDTH + self.viewport.x_to_px(x)
    }

    fn y(&self, y: f64) -> f32 {
        self.origin.y + HEADER_HEIGHT + self.viewport.y_to_px(y)
    }

    fn point(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(self.x(x), self.y(y))
    }

    fn bar_rect(&self, bar: &BarPrimitive) -> Rect {
        Rect::from_two_pos(self.point(bar.x0, bar.y0), self.point(bar.x1, bar.y1))
    }
}

/// Render the chart scene (central panel).
pub fn show_gantt_chart(
    scene: &ChartScene,
    tasks_by_slot: &[&TaskRecord],
    viewport: &mut TimelineViewport,
    selected_slot: Option<usize>,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let available = ui.available_size();

    // Handle zoom with scroll wheel
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        if scroll_delta.y > 0.0 {
            viewport.zoom_in();
            interaction.zoomed = true;
        } else if scroll_delta.y < 0.0 {
            viewport.zoom_out();
            interaction.zoomed = true;
        }
    }

    let chart_width = (GUTTER_WIDTH + viewport.total_width()).max(available.x);
    let chart_height = (HEADER_HEIGHT + viewport.total_height()).max(available.y);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(chart_width, chart_height), Sense::hover());
            let canvas = Canvas {
                origin: response.rect.min,
                viewport,
            };

            painter.rect_filled(response.rect, 0.0, theme::BG_CHART);

            draw_date_header(&painter, &canvas, scene, response.rect.size());
            draw_category_gutter(&painter, &canvas, scene, selected_slot, chart_height);

            for bar in &scene.bars {
                let rect = canvas.bar_rect(bar);
                let is_selected = selected_slot == Some(bar.slot);
                draw_bar(&painter, rect, bar, is_selected);

                let bar_response = ui.interact(
                    rect.expand2(Vec2::new(2.0, 0.0)),
                    ui.make_persistent_id(("task-bar", bar.slot)),
                    Sense::click(),
                );
                if bar_response.clicked() {
                    interaction.clicked_slot = Some(bar.slot);
                }
                if bar_response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    if let Some(task) = tasks_by_slot.get(bar.slot) {
                        let text = tooltip_text(scene, task, bar);
                        egui::show_tooltip_at_pointer(
                            ui.ctx(),
                            ui.layer_id(),
                            egui::Id::new(("task-tip", bar.slot)),
                            |ui| {
                                ui.label(text);
                            },
                        );
                    }
                }
            }

            for connector in &scene.connectors {
                let from = canvas.point(connector.x0, connector.y0);
                let to = canvas.point(connector.x1, connector.y1);
                painter.line_segment([from, to], Stroke::new(1.0, theme::CONNECTOR));
                painter.text(
                    Pos2::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0),
                    Align2::CENTER_BOTTOM,
                    &connector.label,
                    theme::font_sub(),
                    theme::CONNECTOR,
                );
            }

            for callout in &scene.callouts {
                let galley = painter.layout(
                    callout.text.clone(),
                    FontId::proportional(callout.font_size),
                    theme::TEXT_ON_CHART,
                    callout.max_width,
                );
                let anchor = canvas.point(callout.x, callout.y);
                let rect = callout.anchor.align2().anchor_size(anchor, galley.size());
                painter.rect_filled(rect.expand(2.0), Rounding::same(2.0), theme::CALLOUT_BG);
                painter.galley(rect.min, galley, theme::TEXT_ON_CHART);
            }
        });

    interaction
}

fn tooltip_text(scene: &ChartScene, task: &TaskRecord, bar: &BarPrimitive) -> String {
    let fmt = scene.axes.date_format.as_str();
    let mut text = format!(
        "Task: {}\nStart: {}\nFinish: {}\n% Complete: {}",
        task.name,
        task.start.format(fmt),
        task.finish.format(fmt),
        bar.label,
    );
    if !task.resource.is_empty() {
        text.push_str(&format!("\nResource: {}", task.resource));
    }
    if !task.predecessors_raw.is_empty() {
        text.push_str(&format!("\nPredecessors: {}", task.predecessors_raw));
    }
    text
}

fn draw_date_header(painter: &egui::Painter, canvas: &Canvas<'_>, scene: &ChartScene, size: Vec2) {
    let origin = canvas.origin;
    let (width, height) = (size.x, size.y);

    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.text(
        Pos2::new(origin.x + GUTTER_WIDTH + 6.0, origin.y + 12.0),
        Align2::LEFT_CENTER,
        format!("{} · {}", scene.axes.title, scene.axes.date_title),
        theme::font_header(),
        theme::TEXT_ON_CHART,
    );

    let label_every = (theme::DATE_LABEL_SPACING / canvas.viewport.pixels_per_day).ceil().max(1.0) as usize;
    for (i, date) in scene.axes.dates.days().enumerate() {
        let x = canvas.x(date_to_coord(date));
        painter.line_segment(
            [Pos2::new(x, origin.y + HEADER_HEIGHT), Pos2::new(x, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
        if i % label_every == 0 {
            painter.text(
                Pos2::new(x + 3.0, origin.y + 30.0),
                Align2::LEFT_CENTER,
                date.format(&scene.axes.date_format).to_string(),
                theme::font_sub(),
                theme::TEXT_DIM,
            );
        }
    }

    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::GRID_LINE),
    );

    // Date under the pointer, snapped to the day.
    if let Some(pointer) = painter.ctx().pointer_hover_pos() {
        let px = pointer.x - origin.x - GUTTER_WIDTH;
        if px >= 0.0 && pointer.y > origin.y + HEADER_HEIGHT && painter.clip_rect().contains(pointer) {
            let date = coord_to_date(canvas.viewport.px_to_x(px));
            painter.text(
                Pos2::new(pointer.x, origin.y + HEADER_HEIGHT - 2.0),
                Align2::CENTER_BOTTOM,
                date.format(&scene.axes.date_format).to_string(),
                theme::font_sub(),
                theme::ACCENT,
            );
        }
    }
}

fn draw_category_gutter(
    painter: &egui::Painter,
    canvas: &Canvas<'_>,
    scene: &ChartScene,
    selected_slot: Option<usize>,
    height: f32,
) {
    let origin = canvas.origin;
    painter.rect_filled(
        Rect::from_min_size(
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Vec2::new(GUTTER_WIDTH, height - HEADER_HEIGHT),
        ),
        0.0,
        theme::BG_GUTTER,
    );
    painter.text(
        Pos2::new(origin.x + 8.0, origin.y + 12.0),
        Align2::LEFT_CENTER,
        &scene.axes.category_title,
        theme::font_header(),
        theme::TEXT_ON_CHART,
    );

    for (slot, name) in scene.axes.categories.iter().enumerate() {
        let y = canvas.y(slot as f64);
        if selected_slot == Some(slot) {
            let band = canvas.viewport.row_height / 2.0;
            painter.rect_filled(
                Rect::from_min_max(
                    Pos2::new(origin.x, y - band),
                    Pos2::new(origin.x + GUTTER_WIDTH, y + band),
                ),
                0.0,
                theme::BG_SELECTED,
            );
        }
        let clipped = painter.with_clip_rect(Rect::from_min_size(
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Vec2::new(GUTTER_WIDTH - 6.0, height),
        ));
        clipped.text(
            Pos2::new(origin.x + GUTTER_WIDTH - 8.0, y),
            Align2::RIGHT_CENTER,
            name,
            theme::font_bar(),
            theme::TEXT_ON_CHART,
        );
    }
}

fn draw_bar(painter: &egui::Painter, rect: Rect, bar: &BarPrimitive, is_selected: bool) {
    painter.rect(rect, Rounding::ZERO, bar.fill, Stroke::new(1.0, theme::BAR_STROKE));

    if is_selected {
        painter.rect_stroke(rect.expand(1.5), Rounding::same(1.5), Stroke::new(2.0, theme::BORDER_ACCENT));
    }

    // Percent label inside the bar, only when it fits.
    let galley = painter.layout_no_wrap(bar.label.clone(), theme::font_bar(), label_color(bar.fill));
    if galley.size().x + 4.0 <= rect.width() {
        let pos = rect.center() - galley.size() / 2.0;
        painter.galley(pos, galley, Color32::TRANSPARENT);
    }
}

/// Black or white, whichever reads better on `fill`.
fn label_color(fill: Color32) -> Color32 {
    let luma = 0.299 * f32::from(fill.r()) + 0.587 * f32::from(fill.g()) + 0.114 * f32::from(fill.b());
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
