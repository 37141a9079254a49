//! DocQuiz Ingest — PDF extraction, sentence splitting, noun extraction,
//! question generation and extractive summarization.

pub mod extract;
pub mod ingest;
pub mod normalize;
pub mod pdf;
pub mod questions;
pub mod sentences;
pub mod summarize;

pub use extract::top_nouns;
pub use ingest::{content_hash, ingest_pdf, ExtractedDocument};
pub use normalize::squish;
pub use questions::generate_questions;
pub use sentences::split_sentences;
pub use summarize::summarize;
