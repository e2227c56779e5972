// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::semester::SemesterCode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub endpoint: EndpointOptions,
    pub export: ExportOptions,
}

/* ---------------- Query ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub student_id: String,
    /// None → latest enumerated semester (CLI) / nothing picked yet (GUI)
    pub semester: Option<SemesterCode>,
    /// First academic year offered in the semester list
    pub start_year: i32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            student_id: s!(),
            semester: None,
            start_year: DEFAULT_START_YEAR,
        }
    }
}

/* ---------------- Endpoint ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointOptions {
    pub url: String,
    pub module_base: String,
    pub permutation: String,
    pub strong_name: String,
    pub timeout_secs: u64,
}

impl Default for EndpointOptions {
    fn default() -> Self {
        Self {
            url: s!(ENDPOINT_URL),
            module_base: s!(MODULE_BASE),
            permutation: s!(PERMUTATION),
            strong_name: s!(POLICY_STRONG_NAME),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl EndpointOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Aligned plain-text table
    Table,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Table | ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" | "text" => Some(ExportFormat::Table),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// None → stdout
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Table,
            include_headers: false,
            out: None,
        }
    }
}
