// src/gui/actions/search.rs
use std::thread;

use eframe::egui;

use crate::{
    core::HttpTransport,
    error::SearchError,
    gui::{
        app::{App, ResultsView, SearchOutcome},
        progress::GuiProgress,
    },
    search::{self, Query},
};

/// Validate the form and start a worker. The UI thread never blocks on the
/// network; the outcome comes back through `App::drain_outcomes`.
pub fn search(app: &mut App, ctx: &egui::Context) {
    let q = &app.state.options.query;
    let query = match Query::new(&q.student_id, q.semester) {
        Ok(query) => query,
        Err(e) => {
            logd!("Search: Rejected ({e})");
            app.status(format!("Error: {e}"));
            app.view = ResultsView::Failed(e.to_string());
            return;
        }
    };

    app.next_request += 1;
    app.in_flight += 1;
    let request = app.next_request;

    logf!(
        "Search: Begin #{} student={} semester={}",
        request, query.student_id, query.semester
    );

    let endpoint = app.state.options.endpoint.clone();
    let tx = app.tx.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    // → This is where the request happens ←
    thread::spawn(move || {
        let result = HttpTransport::new(&endpoint)
            .map_err(SearchError::from)
            .and_then(|t| search::search(&t, &endpoint, &query, Some(&mut prog)))
            .map_err(|e| e.to_string());

        if tx.send(SearchOutcome { request, query, result }).is_err() {
            // window closed while we were out
            return;
        }
        ctx.request_repaint();
    });
}
