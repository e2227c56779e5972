// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod grades;
pub mod gui;
pub mod progress;
pub mod rpc;
pub mod search;
pub mod semester;
pub mod table;
