//! Debug viewer for captured errors.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::record::{ErrorId, ErrorRecord};
use super::store::ErrorStore;

/// Viewer failures; the messages are the JSON `error` field verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("ID errore non fornito")]
    Missing,

    #[error("ID errore non valido")]
    Invalid,

    #[error("Errore non trovato")]
    NotFound,
}

impl ViewError {
    pub fn status(&self) -> StatusCode {
        match self {
            ViewError::Missing | ViewError::Invalid => StatusCode::BAD_REQUEST,
            ViewError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// A found record, served as pretty-printed JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView(pub ErrorRecord);

impl IntoResponse for ErrorView {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize error record");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Look up a captured record.
///
/// `None`, `""` and `"0"` all count as no id at all.
pub fn view_error(store: &dyn ErrorStore, id: Option<&str>) -> Result<ErrorView, ViewError> {
    let raw = match id {
        None | Some("") | Some("0") => return Err(ViewError::Missing),
        Some(raw) => raw,
    };
    let id = ErrorId::parse(raw).ok_or(ViewError::Invalid)?;
    store.find(&id).map(ErrorView).ok_or(ViewError::NotFound)
}
