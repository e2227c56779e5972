// src/gui/components/results_table.rs
//
// Read-only view of the current results.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    grades::ExamKind,
    gui::app::{App, ResultsView},
    table::{self, GRADE_HEADERS},
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let records = match &app.view {
        ResultsView::Empty => {
            ui.weak("Enter a student ID, pick a semester and press Search.");
            return;
        }
        ResultsView::Failed(msg) => {
            ui.colored_label(ui.visuals().error_fg_color, format!("No results: {msg}"));
            return;
        }
        ResultsView::Ready(v) if v.is_empty() => {
            ui.weak("No grades found.");
            return;
        }
        ResultsView::Ready(v) => v,
    };

    let show_code = app.state.gui.show_type_code;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(240.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::initial(70.0).resizable(true))
        .column(Column::remainder().at_least(70.0))
        .header(24.0, |mut header| {
            for h in GRADE_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, records.len(), |mut row| {
                let g = &records[row.index()];
                let cells = table::grade_row(g);

                row.col(|ui| { ui.label(&cells[0]); });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(&cells[1]); });
                });
                row.col(|ui| {
                    let mut rt = RichText::new(&cells[2]);
                    if g.exam_kind() == ExamKind::Final {
                        rt = rt.strong();
                    }
                    ui.label(rt);
                    if show_code {
                        ui.weak(format!("({})", g.type_code));
                    }
                });
            });
        });
}
