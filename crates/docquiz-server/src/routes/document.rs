//! Upload and summarize.

use std::path::Path;
use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use super::{bad_request, with_session, ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload))
        .route("/summarize", post(summarize))
}

/// POST /api/upload — multipart; the first file field must be a PDF.
async fn upload(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> ApiResult {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let filename = match field.file_name() {
            Some(name) => sanitize_filename(name),
            None => continue,
        };
        if !is_pdf_name(&filename) {
            return Err(bad_request("Only PDF files are accepted."));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        if bytes.len() > state.config.max_upload_bytes {
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({
                    "error": format!(
                        "File exceeds the {} MB upload limit.",
                        state.config.max_upload_bytes / (1024 * 1024)
                    ),
                })),
            ));
        }

        let bytes = bytes.to_vec();
        let upload =
            with_session(state, move |session| Ok(session.upload(filename, bytes))).await?;
        info!("Upload {} held in session as {}", upload.filename, upload.id);

        return Ok(Json(json!({ "upload": upload })));
    }

    Err(bad_request("No file found in the upload."))
}

/// POST /api/summarize — extract text from the current upload and summarize it.
async fn summarize(State(state): State<Arc<AppState>>) -> ApiResult {
    let outcome = with_session(state, |session| session.extract_and_summarize()).await?;
    Ok(Json(json!(outcome)))
}

fn multipart_error(e: MultipartError) -> ApiError {
    (e.status(), Json(json!({ "error": e.body_text() })))
}

fn is_pdf_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Sanitize a filename to prevent path traversal.
fn sanitize_filename(name: &str) -> String {
    let name = name.replace(['/', '\\'], "").replace("..", "");
    Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.pdf")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../../etc/passwd.pdf"), "etcpasswd.pdf");
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("a\\b.pdf"), "ab.pdf");
    }

    #[test]
    fn test_is_pdf_name() {
        assert!(is_pdf_name("paper.pdf"));
        assert!(is_pdf_name("PAPER.PDF"));
        assert!(!is_pdf_name("paper.txt"));
        assert!(!is_pdf_name("pdf"));
    }
}
