//! Quiz questions and free-text answers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::{with_session, ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", post(generate_questions).get(list_questions))
        .route("/ask", post(ask))
}

#[derive(Debug, Deserialize)]
struct AskRequest {
    #[serde(default)]
    question: String,
}

/// POST /api/questions — generate from the summary, else the full text.
async fn generate_questions(State(state): State<Arc<AppState>>) -> ApiResult {
    let questions = with_session(state, |session| {
        session.generate_questions()?;
        Ok(session.numbered_questions())
    })
    .await?;
    Ok(Json(json!({
        "total": questions.len(),
        "questions": questions,
    })))
}

/// GET /api/questions — the most recently generated list.
async fn list_questions(State(state): State<Arc<AppState>>) -> ApiResult {
    let questions = with_session(state, |session| Ok(session.numbered_questions())).await?;
    Ok(Json(json!({
        "total": questions.len(),
        "questions": questions,
    })))
}

/// POST /api/ask — `{"question": "..."}`.
async fn ask(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> ApiResult {
    let Json(body) = body.map_err(json_error)?;
    let question = body.question;
    let outcome = with_session(state, move |session| session.ask(&question)).await?;
    Ok(Json(json!(outcome)))
}

fn json_error(e: JsonRejection) -> ApiError {
    (e.status(), Json(json!({ "error": e.body_text() })))
}
