use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Required/format validation failed; carries one message per violation.
    Validation(Vec<String>),
    /// The request itself was unusable (e.g. malformed JSON body).
    BadRequest(String),
    /// Anything unexpected. Surfaced as a 500 with a best-effort detail.
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(details) => {
                write!(f, "Validation failed: {}", details.join(", "))
            }
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": details,
                }),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": msg }),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": "Internal server error",
                        "details": msg,
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
