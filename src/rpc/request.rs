// src/rpc/request.rs
//
// GWT-RPC v7 request body:
//   7|0|<n>|<string table, n entries>|<payload tokens>|
// Payload tokens are either 1-based indexes into the string table or raw
// values (counts, encoded longs).

use crate::semester::SemesterCode;

const RPC_VERSION: u32 = 7;
const RPC_FLAGS: u32 = 0;

const SERVICE_INTERFACE: &str = "com.soict.edu.core.client.DataService";
const METHOD_COURSE_MEMBERS: &str = "getCourseMembers";

const TYPE_LONG: &str = "java.lang.Long/4227064769";
const TYPE_STRING: &str = "java.lang.String/2004016611";
const TYPE_LIST: &str = "java.util.List";
const TYPE_ARRAYS_LIST: &str = "java.util.Arrays$ArrayList/2507071751";

/// First argument of getCourseMembers, an opaque GWT-encoded long captured
/// from the portal's own requests.
const COURSE_MEMBERS_LONG_ARG: &str = "THGFkwAAA";

/// Escape a string for the pipe-delimited stream.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\!"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out
}

/// Accumulates the string table and payload tokens of one call.
#[derive(Default)]
pub struct RpcWriter {
    strings: Vec<String>,
    tokens: Vec<String>,
}

impl RpcWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based table index; repeated strings share one entry.
    fn intern(&mut self, s: &str) -> usize {
        if let Some(i) = self.strings.iter().position(|x| x == s) {
            return i + 1;
        }
        self.strings.push(s!(s));
        self.strings.len()
    }

    /// Reference to a string table entry.
    pub fn write_string(&mut self, s: &str) -> &mut Self {
        let ix = self.intern(s);
        self.tokens.push(ix.to_string());
        self
    }

    pub fn write_int(&mut self, v: usize) -> &mut Self {
        self.tokens.push(v.to_string());
        self
    }

    /// Value token written verbatim (e.g. an encoded long).
    pub fn write_raw(&mut self, tok: &str) -> &mut Self {
        self.tokens.push(s!(tok));
        self
    }

    pub fn finish(&self) -> String {
        let mut out = format!("{RPC_VERSION}|{RPC_FLAGS}|{}|", self.strings.len());
        for s in &self.strings {
            out.push_str(&escape(s));
            out.push('|');
        }
        for t in &self.tokens {
            out.push_str(t);
            out.push('|');
        }
        out
    }
}

/// Body for `DataService.getCourseMembers(Long, String studentId, List<String> semesters)`
/// with a single semester.
pub fn course_members_body(
    module_base: &str,
    strong_name: &str,
    student_id: &str,
    semester: &SemesterCode,
) -> String {
    let semester = semester.to_string();
    let mut w = RpcWriter::new();

    // header: module, policy, service, method
    w.write_string(module_base)
        .write_string(strong_name)
        .write_string(SERVICE_INTERFACE)
        .write_string(METHOD_COURSE_MEMBERS);

    // parameter signature
    w.write_int(3)
        .write_string(TYPE_LONG)
        .write_string(TYPE_STRING)
        .write_string(TYPE_LIST);

    // arguments
    w.write_string(TYPE_LONG).write_raw(COURSE_MEMBERS_LONG_ARG);
    w.write_string(student_id);
    w.write_string(TYPE_ARRAYS_LIST)
        .write_int(1)
        .write_string(TYPE_STRING)
        .write_string(&semester);

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{MODULE_BASE, POLICY_STRONG_NAME};

    #[test]
    fn matches_captured_portal_request() {
        let sem: SemesterCode = "20231".parse().unwrap();
        let body = course_members_body(MODULE_BASE, POLICY_STRONG_NAME, "20200001", &sem);
        let expected = "7|0|10|https://qldt.hust.edu.vn/soicteducationstudent/|0B50602DA554407940B4DC7885C62414|com.soict.edu.core.client.DataService|getCourseMembers|java.lang.Long/4227064769|java.lang.String/2004016611|java.util.List|20200001|java.util.Arrays$ArrayList/2507071751|20231|1|2|3|4|3|5|6|7|5|THGFkwAAA|8|9|1|6|10|";
        assert_eq!(body, expected);
    }

    #[test]
    fn pipes_in_input_are_escaped() {
        assert_eq!(escape(r"a|b\c"), r"a\!b\\c");
        let sem: SemesterCode = "20231".parse().unwrap();
        let body = course_members_body(MODULE_BASE, POLICY_STRONG_NAME, "1|2", &sem);
        assert!(body.contains(r"|1\!2|"));
        assert!(body.starts_with("7|0|10|"));
    }

    #[test]
    fn repeated_strings_share_an_index() {
        let mut w = RpcWriter::new();
        w.write_string("x").write_string("y").write_string("x");
        assert_eq!(w.finish(), "7|0|2|x|y|1|2|1|");
    }
}
