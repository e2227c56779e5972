// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::{App, ResultsView};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let text = app.status_text();
    ui.horizontal(|ui| {
        if matches!(app.view, ResultsView::Failed(_)) && !app.running() {
            ui.colored_label(ui.visuals().error_fg_color, text);
        } else {
            ui.label(text);
        }
        if app.in_flight > 1 {
            ui.weak(format!("({} searches running)", app.in_flight));
        }
    });
}
