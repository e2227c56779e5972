// src/error.rs
use std::error::Error;
use std::fmt;

/// The response body did not have the shape this endpoint is known to send.
#[derive(Debug)]
pub enum MalformedResponse {
    /// The server answered with a GWT `//EX` exception stream.
    RemoteException,
    /// No `["java` payload marker.
    MissingMarker,
    /// No closing bracket after the marker, or the trailer cut lands before it.
    MissingTerminator,
    /// The cut payload is not a JSON array.
    InvalidJson(serde_json::Error),
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedResponse::RemoteException => write!(f, "malformed response: server raised an exception"),
            MalformedResponse::MissingMarker => write!(f, "malformed response: payload marker not found"),
            MalformedResponse::MissingTerminator => write!(f, "malformed response: payload is truncated"),
            MalformedResponse::InvalidJson(e) => write!(f, "malformed response: invalid JSON payload ({e})"),
        }
    }
}

impl Error for MalformedResponse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MalformedResponse::InvalidJson(e) => Some(e),
            _ => None,
        }
    }
}

/// The HTTP exchange itself failed.
#[derive(Debug)]
pub enum NetworkError {
    /// Connect, TLS, timeout or body read failure.
    Transport(String),
    /// Non-success HTTP status.
    Status(u16),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport(msg) => write!(f, "network error: {msg}"),
            NetworkError::Status(code) => write!(f, "network error: HTTP status {code}"),
        }
    }
}

impl Error for NetworkError {}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(st) => NetworkError::Status(st.as_u16()),
            None if e.is_timeout() => NetworkError::Transport(format!("request timed out ({e})")),
            None => NetworkError::Transport(e.to_string()),
        }
    }
}

/// Rejected before anything was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    EmptyStudentId,
    MissingSemester,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptyStudentId => write!(f, "student ID is empty"),
            QueryError::MissingSemester => write!(f, "no semester selected"),
        }
    }
}

impl Error for QueryError {}

#[derive(Debug)]
pub enum SearchError {
    Query(QueryError),
    Network(NetworkError),
    Malformed(MalformedResponse),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Query(e) => e.fmt(f),
            SearchError::Network(e) => e.fmt(f),
            SearchError::Malformed(e) => e.fmt(f),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SearchError::Query(e) => Some(e),
            SearchError::Network(e) => Some(e),
            SearchError::Malformed(e) => Some(e),
        }
    }
}

impl From<QueryError> for SearchError {
    fn from(e: QueryError) -> Self { SearchError::Query(e) }
}

impl From<NetworkError> for SearchError {
    fn from(e: NetworkError) -> Self { SearchError::Network(e) }
}

impl From<MalformedResponse> for SearchError {
    fn from(e: MalformedResponse) -> Self { SearchError::Malformed(e) }
}
