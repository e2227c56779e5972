// src/config/consts.rs

// Net config (captured from the portal's deployed GWT build)
pub const ENDPOINT_URL: &str = "https://qldt.hust.edu.vn/soicteducationstudent/data";
pub const MODULE_BASE: &str = "https://qldt.hust.edu.vn/soicteducationstudent/";
pub const PERMUTATION: &str = "136D87FF9D7295F6DE93F1903B794378";
pub const POLICY_STRONG_NAME: &str = "0B50602DA554407940B4DC7885C62414";
pub const ACCEPT_LANGUAGE: &str = "vi-VN,vi;q=0.9,fr-FR;q=0.8,fr;q=0.7,en-US;q=0.6,en;q=0.5,ja;q=0.4";
pub const USER_AGENT: &str = concat!("qldt_grades/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Semesters
pub const ACADEMIC_YEAR_START_MONTH: u32 = 9; // September
pub const DEFAULT_START_YEAR: i32 = 2022;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
