// src/gui/mod.rs
pub mod app;
pub mod progress;
pub mod components;
mod actions;

pub use app::run;
