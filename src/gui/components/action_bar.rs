// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::{App, ResultsView}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // A second search while one is in flight is allowed; the button only
        // needs an ID and a semester.
        let ready = !app.state.options.query.student_id.trim().is_empty()
            && app.state.options.query.semester.is_some();

        let button_search = ui.add_enabled(ready, egui::Button::new("Search"));
        if button_search.clicked() {
            actions::search(app, ui.ctx());
        }

        let has_rows = matches!(&app.view, ResultsView::Ready(v) if !v.is_empty());
        let button_copy = ui.add_enabled(has_rows, egui::Button::new("Copy"));
        if button_copy.on_hover_text("Copy results as TSV").clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.checkbox(&mut app.state.gui.show_type_code, "Show type code");

        if app.running() {
            ui.add(Spinner::new());
        }
    });
}
