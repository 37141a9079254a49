//! Error types for DocQuiz.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("No text extracted: {0}")]
    NoText(String),

    #[error("{0}")]
    Precondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
