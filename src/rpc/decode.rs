// src/rpc/decode.rs
//
// A getCourseMembers reply looks like
//   //OK[<ints…>,["java.util.ArrayList/…", …, "{\"staffId\":…}", …],0,7]
// Objects of interest arrive as JSON-encoded strings inside the string table.
// This is not a GWT deserializer: it cuts the table out by position and keeps
// the strings that look like course-member records.

use serde_json::Value;

use crate::error::MalformedResponse;
use crate::grades::CourseGrade;

/// Start of the type-tagged string table.
pub const PAYLOAD_MARKER: &str = "[\"java";

/// Chars between the string table's `]` and the stream's final `]` (",0,7").
pub const TRAILER_LEN: usize = 4;

/// Record strings start like this; everything else is wire noise.
pub const RECORD_PREFIX: &str = "{\"staffId";

const EXCEPTION_PREFIX: &str = "//EX";

/// Cut the embedded JSON array out of a raw reply.
///
/// The array runs from the first `["java` to `TRAILER_LEN` chars before the
/// last `]`. Any drift in the server's stream shape is fixed here.
pub fn extract_payload(raw: &str) -> Result<&str, MalformedResponse> {
    if raw.trim_start().starts_with(EXCEPTION_PREFIX) {
        return Err(MalformedResponse::RemoteException);
    }

    let start = raw.find(PAYLOAD_MARKER).ok_or(MalformedResponse::MissingMarker)?;
    let end = raw.rfind(']').ok_or(MalformedResponse::MissingTerminator)?;
    let cut = end
        .checked_sub(TRAILER_LEN)
        .filter(|&c| c > start)
        .ok_or(MalformedResponse::MissingTerminator)?;

    raw.get(start..cut).ok_or(MalformedResponse::MissingTerminator)
}

/// Decode every valid course-grade record, in stream order.
///
/// Candidates with a missing or empty field are dropped, not reported.
pub fn decode_course_grades(raw: &str) -> Result<Vec<CourseGrade>, MalformedResponse> {
    let payload = extract_payload(raw)?;
    let items: Vec<Value> = serde_json::from_str(payload).map_err(MalformedResponse::InvalidJson)?;

    let candidates: Vec<&str> = items
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| s.starts_with(RECORD_PREFIX))
        .collect();

    let records: Vec<CourseGrade> = candidates.iter().filter_map(|s| parse_record(s)).collect();

    logd!(
        "Decode: items={} candidates={} records={}",
        items.len(),
        candidates.len(),
        records.len()
    );
    Ok(records)
}

fn parse_record(s: &str) -> Option<CourseGrade> {
    let v: Value = serde_json::from_str(s).ok()?;
    CourseGrade::from_object(v.as_object()?)
}
