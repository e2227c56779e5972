// src/semester.rs
//
// Semester codes are "{year}{index}" (index 1..=3), e.g. "20231".
// An academic year starts in September, so the "current" academic year is
// always the calendar year before today's.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::config::consts::ACADEMIC_YEAR_START_MONTH;

pub const SEMESTERS_PER_YEAR: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemesterCode {
    year: i32,
    index: u8,
}

impl SemesterCode {
    /// Generation-side constructor; no validation (the enumerator only
    /// produces indexes 1..=3).
    pub const fn new(year: i32, index: u8) -> Self {
        Self { year, index }
    }
}

impl fmt::Display for SemesterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.year, self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSemester(pub String);

impl fmt::Display for InvalidSemester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid semester code '{}' (expected YYYYN with N in 1..=3)", self.0)
    }
}

impl std::error::Error for InvalidSemester {}

impl FromStr for SemesterCode {
    type Err = InvalidSemester;

    /// Exactly four year digits followed by one index digit in 1..=3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let bad = || InvalidSemester(s!(s));

        if t.len() != 5 || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let year: i32 = t[..4].parse().map_err(|_| bad())?;
        let index = t.as_bytes()[4] - b'0';
        if !(1..=SEMESTERS_PER_YEAR).contains(&index) {
            return Err(bad());
        }
        Ok(Self { year, index })
    }
}

/// The most recently started academic year, named by its first calendar year.
pub fn current_academic_year(now: &impl Datelike) -> i32 {
    now.year() - 1
}

/// All semester codes from `start_year` up to the current academic period.
///
/// Before September, semester 1 of `start_year` and semester 3 of the
/// current academic year are left out. A `start_year` after the current
/// academic year gives an empty list.
pub fn enumerate_semesters(start_year: i32, now: &impl Datelike) -> Vec<SemesterCode> {
    let current = current_academic_year(now);
    let before_start_month = now.month() < ACADEMIC_YEAR_START_MONTH;

    let mut out = Vec::new();
    for year in start_year..=current {
        for index in 1..=SEMESTERS_PER_YEAR {
            if before_start_month && year == start_year && index == 1 {
                continue;
            }
            if before_start_month && year == current && index == SEMESTERS_PER_YEAR {
                continue;
            }
            out.push(SemesterCode::new(year, index));
        }
    }
    out
}

/// Last entry of `enumerate_semesters`, if any.
pub fn latest_semester(start_year: i32, now: &impl Datelike) -> Option<SemesterCode> {
    enumerate_semesters(start_year, now).pop()
}
