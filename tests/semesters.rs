// tests/semesters.rs
//
// Enumerator properties across start years and months.
use chrono::NaiveDate;
use qldt_grades::semester::{current_academic_year, enumerate_semesters, latest_semester, SemesterCode};

fn day(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 10).unwrap()
}

#[test]
fn strictly_ascending_without_duplicates() {
    for month in 1..=12 {
        let now = day(2025, month);
        for start in 2015..=current_academic_year(&now) {
            let codes = enumerate_semesters(start, &now);
            let text: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
            for w in codes.windows(2) {
                assert!(w[0] < w[1], "start={start} month={month}: {:?}", text);
            }
            for w in text.windows(2) {
                assert!(w[0] < w[1], "lexical order broken: {:?}", text);
            }
        }
    }
}

#[test]
fn month_cutoff_controls_both_edges() {
    let first = SemesterCode::new(2021, 1);
    let last = SemesterCode::new(2024, 3);

    let jan = enumerate_semesters(2021, &day(2025, 1));
    assert!(!jan.contains(&first));
    assert!(!jan.contains(&last));
    assert_eq!(jan.len(), 4 * 3 - 2);

    let oct = enumerate_semesters(2021, &day(2025, 10));
    assert!(oct.contains(&first));
    assert!(oct.contains(&last));
    assert_eq!(oct.len(), 4 * 3);

    // August is still before the academic year starts
    assert_eq!(enumerate_semesters(2021, &day(2025, 8)), jan);
}

#[test]
fn codes_use_year_then_index() {
    let codes = enumerate_semesters(2022, &day(2023, 12));
    let text: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    assert_eq!(text, ["20221", "20222", "20223"]);
    assert_eq!(latest_semester(2022, &day(2023, 12)), Some(SemesterCode::new(2022, 3)));
}

#[test]
fn start_after_current_year_is_empty() {
    assert!(enumerate_semesters(2025, &day(2025, 10)).is_empty());
    assert!(enumerate_semesters(2099, &day(2025, 1)).is_empty());
}
