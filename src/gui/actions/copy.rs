// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::{App, ResultsView}, table};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let ResultsView::Ready(records) = &app.view else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there are no results");
        return;
    };
    if records.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let headers = table::headers();
    let rows = table::grade_rows(records);
    let txt = csv::rows_to_string(Some(headers.as_slice()), &rows, '\t');
    logf!("Copy: rows={}", rows.len());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}
