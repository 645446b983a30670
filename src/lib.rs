pub mod config;
pub mod cors;
pub mod db;
pub mod email;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::response::IntoResponse;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::email::Notifier;
use crate::error::AppError;
use crate::state::{AppState, Forms, SharedState};

pub fn build_app(
    store: Option<Arc<dyn SubmissionStore>>,
    mailer: Option<Arc<dyn Notifier>>,
    config: Config,
) -> Router {
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        mailer,
        config,
        forms: Forms::standard(),
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Top-level catch for anything a handler didn't account for, keeping the
/// wire contract uniform even for panics.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unhandled panic".to_string()
    };
    AppError::Internal(detail).into_response()
}
