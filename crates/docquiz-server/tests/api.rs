//! Router tests: the full upload → summarize → quiz → ask flow and every
//! precondition warning, driven in-process through `tower::ServiceExt`.

mod common;

use axum::http::StatusCode;
use common::{app, paris_pdf, pdf_with_pages};
use docquiz_resolve::LOW_CONFIDENCE_ANSWER;
use docquiz_server::session::{
    NO_DOCUMENT_WARNING, NO_QUESTION_SOURCE_WARNING, NO_TEXT_WARNING, NO_UPLOAD_WARNING,
};
use serde_json::json;

#[tokio::test]
async fn test_status_reports_resources() {
    let app = app();
    let (status, body) = app.get("/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["resources"]["stopwords"], true);
    assert_eq!(body["resources"]["lexicon"], true);
    assert_eq!(body["resources"]["abbreviations"], true);
    assert_eq!(body["config"]["summarySentences"], 7);
    assert_eq!(body["config"]["questionCount"], 10);
}

#[tokio::test]
async fn test_actions_before_upload_warn() {
    let app = app();

    let (status, body) = app.post("/api/summarize").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], NO_UPLOAD_WARNING);

    let (status, body) = app.post("/api/questions").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], NO_QUESTION_SOURCE_WARNING);

    let (status, body) = app
        .post_json("/api/ask", json!({ "question": "What is Paris?" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], NO_DOCUMENT_WARNING);
}

#[tokio::test]
async fn test_rejects_non_pdf_upload() {
    let app = app();
    let (status, body) = app.upload("notes.txt", b"plain text").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    let (_, session) = app.get("/api/session").await;
    assert!(session["upload"].is_null());
}

#[tokio::test]
async fn test_full_flow() {
    let app = app();

    let (status, body) = app.upload("paris.pdf", &paris_pdf()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upload"]["filename"], "paris.pdf");
    assert!(body.get("saved").is_none());

    let (status, body) = app.post("/api/summarize").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pageCount"], 3);
    assert_eq!(body["sentenceCount"], 3);
    // Three sentences is below the summary size, so all are kept in order
    assert_eq!(
        body["summary"],
        "Paris is the capital of France. It is known for the Eiffel Tower. \
         The Louvre is a famous museum."
    );

    let (status, body) = app.post("/api/questions").await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["questions"].as_array().unwrap();
    assert!(!questions.is_empty() && questions.len() <= 10);
    assert_eq!(questions[0]["number"], 1);
    assert!(questions
        .iter()
        .any(|q| q["question"] == "What is Louvre?"));

    let (_, listed) = app.get("/api/questions").await;
    assert_eq!(listed["questions"], body["questions"]);

    let (status, body) = app
        .post_json("/api/ask", json!({ "question": "What is the capital of France?" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Paris is the capital of France.");
    assert_eq!(body["confident"], true);
    let context = body["context"].as_str().unwrap();
    assert!(context.contains("Eiffel Tower"));
    assert!(context.contains("Louvre"));

    let (_, session) = app.get("/api/session").await;
    assert_eq!(session["hasText"], true);
    assert_eq!(session["sentenceCount"], 3);
    assert!(session["contentHash"].is_string());
}

#[tokio::test]
async fn test_upload_is_not_written_to_disk() {
    let app = app();
    let (status, _) = app.upload("paris.pdf", &paris_pdf()).await;
    assert_eq!(status, StatusCode::OK);

    let root = &app.state.config.data_paths.root;
    let entries: Vec<String> = std::fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["resources".to_string()]);
    assert!(std::fs::read_dir(&app.state.config.data_paths.resources)
        .unwrap()
        .next()
        .is_none());
}

#[tokio::test]
async fn test_malformed_ask_body_is_json_error() {
    let app = app();
    let (status, body) = app
        .send(
            axum::http::Request::post("/api/ask")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    let (status, body) = app
        .send(
            axum::http::Request::post("/api/ask")
                .body(axum::body::Body::from(r#"{"question": "Why?"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unrelated_question_is_low_confidence() {
    let app = app();
    app.upload("paris.pdf", &paris_pdf()).await;
    app.post("/api/summarize").await;

    let (status, body) = app
        .post_json("/api/ask", json!({ "question": "xyzzy plugh" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], LOW_CONFIDENCE_ANSWER);
    assert_eq!(body["context"], "");
    assert_eq!(body["confident"], false);
}

#[tokio::test]
async fn test_blank_question_is_rejected() {
    let app = app();
    app.upload("paris.pdf", &paris_pdf()).await;
    app.post("/api/summarize").await;

    let (status, _) = app.post_json("/api/ask", json!({ "question": "  " })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_blank_pdf_has_no_text() {
    let app = app();
    app.upload("scan.pdf", &pdf_with_pages(&["", ""])).await;

    let (status, body) = app.post("/api/summarize").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], NO_TEXT_WARNING);

    let (status, _) = app.post("/api/questions").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_corrupt_pdf_is_bad_request() {
    let app = app();
    let (status, _) = app.upload("broken.pdf", b"this is not a pdf").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.post("/api/summarize").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("PDF error"));
}

#[tokio::test]
async fn test_new_upload_replaces_session() {
    let app = app();
    app.upload("paris.pdf", &paris_pdf()).await;
    app.post("/api/summarize").await;
    app.post("/api/questions").await;

    let other = pdf_with_pages(&["Rust is a systems programming language."]);
    app.upload("rust.pdf", &other).await;

    let (_, session) = app.get("/api/session").await;
    assert_eq!(session["upload"]["filename"], "rust.pdf");
    assert_eq!(session["hasText"], false);
    assert_eq!(session["summary"], "");
    assert_eq!(session["questions"], json!([]));

    app.post("/api/summarize").await;
    let (_, body) = app
        .post_json("/api/ask", json!({ "question": "What is the capital of France?" }))
        .await;
    assert_eq!(body["confident"], false);
}

#[tokio::test]
async fn test_reset_session() {
    let app = app();
    app.upload("paris.pdf", &paris_pdf()).await;
    app.post("/api/summarize").await;

    let (status, body) = app
        .send(
            axum::http::Request::delete("/api/session")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reset"], true);

    let (_, session) = app.get("/api/session").await;
    assert!(session["upload"].is_null());
    assert_eq!(session["hasText"], false);
}
