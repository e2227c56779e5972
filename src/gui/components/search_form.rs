// src/gui/components/search_form.rs
//
// Student ID, start year and semester inputs. Writes straight into
// app.state.options.query; Enter in the ID field starts a search.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Course grade lookup");
    ui.add_space(6.0);

    let mut submit = false;

    egui::Grid::new("search_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Student ID:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.state.options.query.student_id)
                    .hint_text("e.g. 20200001")
                    .desired_width(200.0),
            );
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.end_row();

            ui.label("From year:");
            let before = app.state.options.query.start_year;
            ui.add(egui::DragValue::new(&mut app.state.options.query.start_year).range(2000..=2100));
            if app.state.options.query.start_year != before {
                logf!("UI: Start year → {}", app.state.options.query.start_year);
                app.refresh_semesters();
            }
            ui.end_row();

            ui.label("Semester:");
            semester_combo(ui, app);
            ui.end_row();
        });

    // same gate as the Search button; a search may already be in flight
    if submit
        && !app.state.options.query.student_id.trim().is_empty()
        && app.state.options.query.semester.is_some()
    {
        actions::search(app, ui.ctx());
    }
}

fn semester_combo(ui: &mut egui::Ui, app: &mut App) {
    let query = &mut app.state.options.query;
    let before = query.semester;

    let selected_text = match query.semester {
        Some(code) => code.to_string(),
        None => s!("Select semester"),
    };

    egui::ComboBox::from_id_salt("semester")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            // newest first, like the portal
            for code in app.semesters.iter().rev() {
                ui.selectable_value(&mut query.semester, Some(*code), code.to_string());
            }
        });

    if query.semester != before {
        logf!("UI: Semester → {:?}", query.semester.map(|c| c.to_string()));
    }
}
