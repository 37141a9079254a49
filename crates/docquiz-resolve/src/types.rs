//! Answer types.

use serde::Serialize;

pub const LOW_CONFIDENCE_ANSWER: &str = "I'm not confident based on the document.";

/// Result of asking the index a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QaAnswer {
    /// Best-matching sentence, or the low-confidence message.
    pub answer: String,
    /// Matched sentence with its neighbours, space-joined. Empty when not confident.
    pub context: String,
    /// Cosine similarity of the best match.
    pub score: f64,
    /// Index of the matched sentence; `None` when not confident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_index: Option<usize>,
}

impl QaAnswer {
    pub fn low_confidence(score: f64) -> Self {
        Self {
            answer: LOW_CONFIDENCE_ANSWER.to_string(),
            context: String::new(),
            score,
            sentence_index: None,
        }
    }

    pub fn is_confident(&self) -> bool {
        self.sentence_index.is_some()
    }
}
