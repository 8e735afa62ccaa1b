//! Request handlers for the gateway routes.

use axum::{
    body::Bytes,
    extract::{Extension, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::{ParamSpec, Signature};
use crate::errors::{view_error, ViewError};
use crate::http::server::AppState;
use crate::http::session::SessionId;
use crate::service::ServiceError;

/// Query parameter that switches any request to the error viewer.
pub const VIEW_ERROR_PARAM: &str = "view_error";

#[derive(Serialize)]
pub struct CallSummary {
    pub name: &'static str,
    pub positional: bool,
    pub params: &'static [ParamSpec],
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `POST /api/{call}`: body is a JSON array of positional arguments.
pub async fn call_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(call): Path<String>,
    body: Bytes,
) -> Response {
    let args = match parse_arguments(&body) {
        Ok(args) => args,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("invalid arguments: {e}") })),
            )
                .into_response();
        }
    };

    let store = state.sessions.scope(session.0);
    match state.service.call(&store, &call, &args).await {
        Ok(decoded) => Json(decoded).into_response(),
        Err(ServiceError::UnknownCall(name)) => {
            tracing::warn!(call = %name, "Unknown call requested");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("unknown call '{name}'") })),
            )
                .into_response()
        }
        Err(ServiceError::Failed(failure)) => failure.into_response(),
        Err(e @ ServiceError::Decode { .. }) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// Empty body, `null` and `[]` all mean "no arguments"; a bare value is a
/// single argument.
fn parse_arguments(body: &[u8]) -> Result<Vec<Value>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    })
}

/// `GET /api/calls`: the catalog.
pub async fn list_calls(State(state): State<AppState>) -> Json<Vec<CallSummary>> {
    let calls = state
        .service
        .catalog()
        .iter()
        .map(|spec| match spec.signature {
            Signature::Positional => CallSummary {
                name: spec.name,
                positional: true,
                params: &[],
            },
            Signature::Named(params) => CallSummary {
                name: spec.name,
                positional: false,
                params,
            },
        })
        .collect();
    Json(calls)
}

/// `GET /errors/{id}`: direct entry to the viewer.
pub async fn view_error_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<String>,
) -> Response {
    let store = state.sessions.scope(session.0);
    view_error(&store, Some(&id)).into_response()
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

/// Serves `?view_error=<id>` on any path before routing happens.
pub async fn view_error_intercept(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let requested = request.uri().query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == VIEW_ERROR_PARAM)
            .map(|(_, value)| value.into_owned())
    });

    let Some(id) = requested else {
        return next.run(request).await;
    };

    tracing::debug!(error_id = %id, "Serving error viewer");
    match request.extensions().get::<SessionId>() {
        Some(session) => {
            let store = state.sessions.scope(session.0.clone());
            view_error(&store, Some(&id)).into_response()
        }
        None => ViewError::NotFound.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_arguments(b"").unwrap(), Vec::<Value>::new());
        assert_eq!(parse_arguments(b"  \n").unwrap(), Vec::<Value>::new());
        assert_eq!(parse_arguments(b"null").unwrap(), Vec::<Value>::new());
        assert_eq!(parse_arguments(b"[1, \"it\"]").unwrap(), vec![json!(1), json!("it")]);
        assert_eq!(parse_arguments(b"42").unwrap(), vec![json!(42)]);
        assert!(parse_arguments(b"[1,").is_err());
    }
}
