//! Session view, reset and server status.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::{with_session, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", get(get_session).delete(reset_session))
        .route("/status", get(get_status))
}

/// GET /api/session
async fn get_session(State(state): State<Arc<AppState>>) -> ApiResult {
    let snapshot = with_session(state, |session| Ok(session.snapshot())).await?;
    Ok(Json(json!(snapshot)))
}

/// DELETE /api/session — forget the upload and everything derived from it.
async fn reset_session(State(state): State<Arc<AppState>>) -> ApiResult {
    with_session(state, |session| {
        session.reset();
        Ok(())
    })
    .await?;
    Ok(Json(json!({ "reset": true })))
}

/// GET /api/status — resource availability and effective settings.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = &state.config;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSecs": (chrono::Utc::now() - state.started_at).num_seconds(),
        "resources": state.resources.status(),
        "config": {
            "summarySentences": config.summary_sentences,
            "questionCount": config.question_count,
            "maxUploadBytes": config.max_upload_bytes,
            "qa": config.qa,
        },
    }))
}
