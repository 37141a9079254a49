//! Retrieval question answering over a single document.
//!
//! Sentences are indexed as TF-IDF vectors; a question is answered with the
//! most similar sentence and a small window of its neighbours, or a fixed
//! low-confidence message when nothing is similar enough.

pub mod qa;
mod stopwords;
pub mod tfidf;
pub mod types;

pub use qa::QaIndex;
pub use tfidf::{SparseVector, TfidfVectorizer};
pub use types::{QaAnswer, LOW_CONFIDENCE_ANSWER};
