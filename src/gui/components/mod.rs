// src/gui/components/mod.rs
pub mod action_bar;
pub mod results_table;
pub mod search_form;
pub mod status_bar;
