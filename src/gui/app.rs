// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc, Mutex,
    },
};

use eframe::egui;

use crate::{
    config::state::AppState,
    grades::CourseGrade,
    search::Query,
    semester::{self, SemesterCode},
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "QLDT Grade Lookup",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// What the results area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// Nothing searched yet
    Empty,
    Ready(Vec<CourseGrade>),
    Failed(String),
}

/// Sent back by a search worker.
pub struct SearchOutcome {
    pub request: u64,
    pub query: Query,
    pub result: Result<Vec<CourseGrade>, String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // semester drop-down entries for the current start year
    pub semesters: Vec<SemesterCode>,

    pub view: ResultsView,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // searches in flight; last one to resolve wins
    pub in_flight: usize,
    pub next_request: u64,
    pub last_applied: u64,
    pub tx: Sender<SearchOutcome>,
    rx: Receiver<SearchOutcome>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            state,
            semesters: Vec::new(),
            view: ResultsView::Empty,
            status: Arc::new(Mutex::new(s!("Idle"))),
            in_flight: 0,
            next_request: 0,
            last_applied: 0,
            tx,
            rx,
        };
        app.refresh_semesters();
        logf!(
            "Init: start_year={}, semesters={}",
            app.state.options.query.start_year,
            app.semesters.len()
        );
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool { self.in_flight > 0 }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the drop-down for the current start year and today's date.
    /// Drops the selection if it is no longer offered.
    pub fn refresh_semesters(&mut self) {
        let today = chrono::Local::now().date_naive();
        let query = &mut self.state.options.query;
        self.semesters = semester::enumerate_semesters(query.start_year, &today);

        if let Some(sel) = query.semester {
            if !self.semesters.contains(&sel) {
                logd!("UI: Semester {} not offered from {}, cleared", sel, query.start_year);
                query.semester = None;
            }
        }
    }

    /// Apply finished searches. Display follows resolve order, not request order.
    pub fn drain_outcomes(&mut self) {
        while let Ok(out) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if out.request < self.last_applied {
                logd!("Search: #{} resolved after #{}", out.request, self.last_applied);
            }
            self.last_applied = out.request;

            let Query { student_id, semester } = &out.query;
            match out.result {
                Ok(records) => {
                    if records.is_empty() {
                        self.status(format!("No grades found for {student_id} in {semester}"));
                    } else {
                        self.status(format!(
                            "{} grade(s) for {student_id} in {semester}",
                            records.len()
                        ));
                    }
                    self.view = ResultsView::Ready(records);
                }
                Err(msg) => {
                    self.status(format!("Error: {msg}"));
                    self.view = ResultsView::Failed(msg);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcomes();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::search_form::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::results_table::draw(ui, self);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::{CourseGrade, Grade, TypeCode};

    fn outcome(request: u64, result: Result<Vec<CourseGrade>, String>) -> SearchOutcome {
        SearchOutcome {
            request,
            query: Query::new("20200001", Some(SemesterCode::new(2023, 1))).unwrap(),
            result,
        }
    }

    fn record() -> CourseGrade {
        CourseGrade {
            staff_name: s!("A"),
            grade: Grade::Number(serde_json::Number::from(8i64)),
            type_code: TypeCode::Int(1),
        }
    }

    #[test]
    fn last_resolved_outcome_wins() {
        let mut app = App::new(AppState::default());
        app.in_flight = 2;

        app.tx.send(outcome(2, Err(s!("timed out")))).unwrap();
        app.tx.send(outcome(1, Ok(vec![record()]))).unwrap();
        app.drain_outcomes();

        assert_eq!(app.view, ResultsView::Ready(vec![record()]));
        assert_eq!(app.in_flight, 0);
        assert!(!app.running());
        assert_eq!(app.last_applied, 1);
    }

    #[test]
    fn failure_replaces_earlier_results() {
        let mut app = App::new(AppState::default());
        app.in_flight = 1;
        app.tx.send(outcome(1, Ok(vec![record()]))).unwrap();
        app.drain_outcomes();
        assert_eq!(app.view, ResultsView::Ready(vec![record()]));

        app.in_flight = 1;
        app.tx.send(outcome(2, Err(s!("HTTP status 500")))).unwrap();
        app.drain_outcomes();

        assert_eq!(app.view, ResultsView::Failed(s!("HTTP status 500")));
        assert_eq!(app.status_text(), "Error: HTTP status 500");
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn empty_result_is_reported() {
        let mut app = App::new(AppState::default());
        app.in_flight = 1;
        app.tx.send(outcome(1, Ok(Vec::new()))).unwrap();
        app.drain_outcomes();

        assert_eq!(app.view, ResultsView::Ready(Vec::new()));
        assert_eq!(app.status_text(), "No grades found for 20200001 in 20231");
    }
}
