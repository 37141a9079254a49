//! HTTP route handlers.

pub mod document;
pub mod quiz;
pub mod status;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Json, Router};
use docquiz_core::Error;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::session::Session;
use crate::state::AppState;

/// Error half of every handler result: a status and `{"error": ...}`.
pub type ApiError = (StatusCode, Json<Value>);
pub type ApiResult = Result<Json<Value>, ApiError>;

/// Slack on top of the upload limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);
    Router::new()
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(document::routes())
        .merge(quiz::routes())
        .merge(status::routes())
}

pub(crate) fn error_response(err: Error) -> ApiError {
    let status = match &err {
        Error::Precondition(_) => StatusCode::CONFLICT,
        Error::NoText(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Pdf(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match err {
        // Warnings are shown to the user verbatim
        Error::Precondition(msg) | Error::NoText(msg) => msg,
        other => other.to_string(),
    };
    if status.is_server_error() {
        error!("Request failed: {}", message);
    } else {
        debug!("Request rejected ({}): {}", status, message);
    }
    (status, Json(json!({ "error": message })))
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.into() })),
    )
}

/// Run `action` against the session on a blocking thread, holding the lock
/// for its whole duration.
pub(crate) async fn with_session<T, F>(state: Arc<AppState>, action: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut Session) -> docquiz_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut session = state.session.lock();
        action(&mut session)
    })
    .await
    .map_err(|e| error_response(Error::Internal(format!("session task failed: {}", e))))?
    .map_err(error_response)
}
