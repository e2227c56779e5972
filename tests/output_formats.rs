// tests/output_formats.rs
use qldt_grades::config::options::{ExportFormat, ExportOptions};
use qldt_grades::grades::{CourseGrade, Grade, TypeCode};
use qldt_grades::table;

fn sample() -> Vec<CourseGrade> {
    vec![
        CourseGrade {
            staff_name: "Nguyen Van An".into(),
            grade: Grade::Number(serde_json::Number::from(8i64)),
            type_code: TypeCode::Int(1),
        },
        CourseGrade {
            staff_name: "Le,  Binh".into(),
            grade: Grade::Text("A+".into()),
            type_code: TypeCode::Int(2),
        },
    ]
}

fn opts(format: ExportFormat, include_headers: bool) -> ExportOptions {
    ExportOptions { format, include_headers, ..ExportOptions::default() }
}

#[test]
fn table_is_aligned_with_headers() {
    let out = table::render(&sample(), &opts(ExportFormat::Table, false)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Staff name     Grade  Type");
    assert_eq!(lines[1], "Nguyen Van An  8      Final");
    assert_eq!(lines[2], "Le, Binh       A+     Midterm");
}

#[test]
fn csv_quotes_names_with_commas() {
    let out = table::render(&sample(), &opts(ExportFormat::Csv, true)).unwrap();
    assert_eq!(out, "Staff name,Grade,Type\nNguyen Van An,8,Final\n\"Le, Binh\",A+,Midterm\n");
}

#[test]
fn tsv_without_headers() {
    let out = table::render(&sample(), &opts(ExportFormat::Tsv, false)).unwrap();
    assert_eq!(out, "Nguyen Van An\t8\tFinal\nLe, Binh\tA+\tMidterm\n");
}

#[test]
fn json_keeps_portal_field_names() {
    let out = table::render(&sample(), &opts(ExportFormat::Json, false)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v[0]["staffName"], "Nguyen Van An");
    assert_eq!(v[0]["grade"], 8);
    assert_eq!(v[0]["type"], 1);
    assert_eq!(v[1]["grade"], "A+");
}

#[test]
fn empty_results_render_headers_only_for_table() {
    let out = table::render(&[], &opts(ExportFormat::Table, false)).unwrap();
    assert_eq!(out, "Staff name  Grade  Type\n");
    assert_eq!(table::render(&[], &opts(ExportFormat::Csv, false)).unwrap(), "");
}
