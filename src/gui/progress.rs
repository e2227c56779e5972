// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Worker-side status sink: writes the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    what: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, what: s!() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, what: &str) {
        self.what = s!(what);
        self.set_status(format!("Searching {what}"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(format!("{} ({})", msg, self.what));
    }
    // finish: the outcome handler on the UI thread writes the final status
}
