// src/table.rs
//
// Records → display rows, and the text renderings of those rows.

use crate::{
    config::options::{ExportFormat, ExportOptions},
    core::sanitize::normalize_ws,
    csv,
    grades::CourseGrade,
};

pub const GRADE_HEADERS: [&str; 3] = ["Staff name", "Grade", "Type"];

pub fn headers() -> Vec<String> {
    GRADE_HEADERS.iter().map(|h| s!(*h)).collect()
}

pub fn grade_row(g: &CourseGrade) -> Vec<String> {
    vec![
        normalize_ws(&g.staff_name),
        g.grade.to_string(),
        s!(g.exam_kind().label()),
    ]
}

pub fn grade_rows(records: &[CourseGrade]) -> Vec<Vec<String>> {
    records.iter().map(grade_row).collect()
}

/// Left-aligned columns separated by two spaces; always has a header line.
pub fn to_aligned_text(headers: &[String], rows: &[Vec<String>]) -> String {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (ci, cell) in r.iter().enumerate().take(cols) {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let mut line = String::new();
        for (ci, cell) in cells.iter().enumerate().take(cols) {
            if ci + 1 == cols {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<w$}  ", cell, w = widths[ci]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(headers);
    for r in rows {
        push_line(r);
    }
    out
}

/// Render records in the requested format.
pub fn render(records: &[CourseGrade], export: &ExportOptions) -> Result<String, serde_json::Error> {
    let rows = grade_rows(records);
    let hdrs = headers();

    Ok(match export.format {
        ExportFormat::Table => to_aligned_text(&hdrs, &rows),
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(records)?;
            s.push('\n');
            s
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            let h = export.include_headers.then_some(hdrs.as_slice());
            csv::rows_to_string(h, &rows, sep)
        }
    })
}
