//! Cookie-based sessions.
//!
//! # Responsibilities
//! - Read the session id from the request cookie, or issue a new one
//! - Expose it to handlers as a `SessionId` request extension
//!
//! # Design Decisions
//! - Ids are UUID v4; only short `[A-Za-z0-9-]` cookie values are accepted
//! - The cookie is set only when a new id was issued

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::http::server::AppState;

/// Session identifier attached to every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = session_from_headers(request.headers(), &state.cookie_name);
    let issued = existing.is_none();
    let session = existing.unwrap_or_else(SessionId::generate);

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    if issued {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            state.cookie_name,
            session.as_str()
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// Session id carried in the `Cookie` header(s), if well-formed.
pub fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim())
        .filter(|value| is_valid_session_value(value))
        .map(|value| SessionId(value.to_string()))
}

fn is_valid_session_value(value: &str) -> bool {
    (1..=128).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; REACTO_SESSID=abc-123 ; other=1"),
        );
        assert_eq!(
            session_from_headers(&headers, "REACTO_SESSID"),
            Some(SessionId("abc-123".to_string()))
        );
        assert_eq!(session_from_headers(&headers, "PHPSESSID"), None);
    }

    #[test]
    fn test_rejects_odd_values() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("REACTO_SESSID=../../etc"));
        assert_eq!(session_from_headers(&headers, "REACTO_SESSID"), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("REACTO_SESSID="));
        assert_eq!(session_from_headers(&headers, "REACTO_SESSID"), None);
    }

    #[test]
    fn test_generated_ids_are_accepted() {
        let id = SessionId::generate();
        assert!(is_valid_session_value(id.as_str()));
    }
}
