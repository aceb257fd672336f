//! Per-browser quiz state, keyed by a session cookie.

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

use drill_core::Question;

pub const SESSION_COOKIE: &str = "sid";

/// Result of the last answered question, kept until the next round starts.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub correct: bool,
    pub term: String,
    pub answer: String,
    pub sentence: String,
    pub save_failed: bool,
}

/// One learner's running quiz. `feedback` doubles as the answered flag:
/// while it is set, further answers for the round are ignored.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub question: Option<Question>,
    pub feedback: Option<Feedback>,
    pub score: u32,
    pub streak: u32,
}

/// Session id from the request cookies, if present and well-formed.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE)
            .then(|| Uuid::parse_str(value).ok())
            .flatten()
    })
}

/// Set-Cookie value pinning the session to this browser.
pub fn session_cookie(id: Uuid) -> HeaderValue {
    // A uuid plus fixed attributes is always valid ASCII.
    HeaderValue::from_str(&format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly"))
        .expect("cookie value is ASCII")
}
