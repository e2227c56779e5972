// src/grades.rs
use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Type code the portal uses for final-exam grades.
pub const FINAL_EXAM_TYPE: i64 = 1;

/// A score as the portal sent it: usually a number, sometimes text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Grade {
    Number(Number),
    Text(String),
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Number(n) => write!(f, "{n}"),
            Grade::Text(t) => f.write_str(t),
        }
    }
}

/// The record's `type` field. Integral numbers (including `1.0`) become
/// `Int`; any other truthy value is kept as sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeCode {
    Int(i64),
    Other(Value),
}

impl TypeCode {
    fn from_value(v: &Value) -> Self {
        let int = v.as_i64().or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        });
        match int {
            Some(n) => TypeCode::Int(n),
            None => TypeCode::Other(v.clone()),
        }
    }
}

impl PartialEq<i64> for TypeCode {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, TypeCode::Int(n) if n == other)
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCode::Int(n) => write!(f, "{n}"),
            TypeCode::Other(Value::String(s)) => f.write_str(s),
            TypeCode::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Only `1` is known to mean "final"; every other code is shown as midterm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamKind {
    Final,
    Midterm,
}

impl ExamKind {
    /// Only the number 1 means final; `"1"` as text does not.
    pub fn from_code(code: &TypeCode) -> Self {
        if *code == FINAL_EXAM_TYPE { ExamKind::Final } else { ExamKind::Midterm }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExamKind::Final => "Final",
            ExamKind::Midterm => "Midterm",
        }
    }
}

/// One decoded course-grade entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseGrade {
    #[serde(rename = "staffName")]
    pub staff_name: String,
    pub grade: Grade,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
}

impl CourseGrade {
    pub fn exam_kind(&self) -> ExamKind {
        ExamKind::from_code(&self.type_code)
    }

    /// Build from one parsed record object.
    ///
    /// All three fields must be present and truthy (non-empty string,
    /// non-zero number, `true`). Values of any other JSON type are kept in
    /// their text form.
    pub fn from_object(obj: &serde_json::Map<String, Value>) -> Option<Self> {
        let staff_name = match obj.get("staffName").filter(|v| truthy(v))? {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        let grade = match obj.get("grade").filter(|v| truthy(v))? {
            Value::Number(n) => Grade::Number(n.clone()),
            Value::String(s) => Grade::Text(s.clone()),
            other => Grade::Text(other.to_string()),
        };

        let type_code = TypeCode::from_value(obj.get("type").filter(|v| truthy(v))?);

        Some(Self { staff_name, grade, type_code })
    }
}

/// Loose "has a value" test used for record fields.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
