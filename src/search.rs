// src/search.rs
//
// One search: validate the query, build the call, send it, decode the reply.

use crate::{
    config::options::EndpointOptions,
    core::sanitize::normalize_student_id,
    error::{NetworkError, QueryError, SearchError},
    grades::CourseGrade,
    progress::{NullProgress, Progress},
    rpc,
    semester::SemesterCode,
};

/// Moves a request body to the portal and brings the reply text back.
/// `core::net::HttpTransport` is the real one; tests plug in canned replies.
pub trait Transport {
    fn post(&self, body: String) -> Result<String, NetworkError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub student_id: String,
    pub semester: SemesterCode,
}

impl Query {
    pub fn new(student_id: &str, semester: Option<SemesterCode>) -> Result<Self, QueryError> {
        let student_id = normalize_student_id(student_id);
        if student_id.is_empty() {
            return Err(QueryError::EmptyStudentId);
        }
        let semester = semester.ok_or(QueryError::MissingSemester)?;
        Ok(Self { student_id, semester })
    }
}

pub fn search(
    transport: &dyn Transport,
    endpoint: &EndpointOptions,
    query: &Query,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<CourseGrade>, SearchError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(&format!("{} / {}", query.student_id, query.semester));
    let res = run(transport, endpoint, query, progress);

    match &res {
        Ok(records) => logf!(
            "Search: OK student={} semester={} records={}",
            query.student_id, query.semester, records.len()
        ),
        Err(e) => loge!(
            "Search: Error student={} semester={}: {}",
            query.student_id, query.semester, e
        ),
    }
    progress.finish(res.is_ok());
    res
}

fn run(
    transport: &dyn Transport,
    endpoint: &EndpointOptions,
    query: &Query,
    progress: &mut dyn Progress,
) -> Result<Vec<CourseGrade>, SearchError> {
    let body = rpc::course_members_body(
        &endpoint.module_base,
        &endpoint.strong_name,
        &query.student_id,
        &query.semester,
    );

    progress.log("Requesting grades…");
    let raw = transport.post(body)?;

    progress.log("Decoding response…");
    Ok(rpc::decode_course_grades(&raw)?)
}
