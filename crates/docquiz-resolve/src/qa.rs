//! Retrieval question answering over the sentences of one document.

use docquiz_core::{LinguisticResources, QaConfig};
use docquiz_ingest::split_sentences;
use tracing::{debug, info};

use crate::tfidf::{SparseVector, TfidfVectorizer};
use crate::types::QaAnswer;

/// TF-IDF index over a document's sentences. Built once per document and
/// read-only afterwards; a new document means a new index.
#[derive(Debug, Clone)]
pub struct QaIndex {
    sentences: Vec<String>,
    vectorizer: TfidfVectorizer,
    matrix: Vec<SparseVector>,
    config: QaConfig,
}

impl QaIndex {
    /// Split `text` into sentences and fit the index over them. Text that
    /// yields no sentences is indexed as a single sentence so the index is
    /// never empty.
    pub fn build(text: &str, resources: &LinguisticResources, config: QaConfig) -> Self {
        let mut sentences = split_sentences(text, resources);
        if sentences.is_empty() {
            debug!("No sentences found, indexing the raw text as one sentence");
            sentences.push(text.to_string());
        }
        Self::from_sentences(sentences, config)
    }

    /// Index an already-split sentence list. Must not be empty.
    pub fn from_sentences(sentences: Vec<String>, config: QaConfig) -> Self {
        debug_assert!(!sentences.is_empty());
        let vectorizer = TfidfVectorizer::fit(&sentences);
        let matrix = vectorizer.transform_all(&sentences);
        info!(
            "Built QA index: {} sentences, {} terms",
            sentences.len(),
            vectorizer.vocabulary_len()
        );
        Self {
            sentences,
            vectorizer,
            matrix,
            config,
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Similarity of `question` to every indexed sentence.
    pub fn similarities(&self, question: &str) -> Vec<f64> {
        let query = self.vectorizer.transform(question);
        self.matrix.iter().map(|row| query.cosine(row)).collect()
    }

    /// Answer with the most similar sentence and its surrounding context.
    pub fn answer(&self, question: &str) -> QaAnswer {
        let sims = self.similarities(question);

        // First occurrence wins on ties
        let (best, score) = sims
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, s)| if s > acc.1 { (i, s) } else { acc });

        if score < self.config.confidence_threshold {
            debug!(
                "Low confidence: best similarity {:.4} < {}",
                score, self.config.confidence_threshold
            );
            return QaAnswer::low_confidence(score.max(0.0));
        }

        let left = best.saturating_sub(self.config.context_before);
        let right = (best + self.config.context_after + 1).min(self.sentences.len());
        let context = self.sentences[left..right].join(" ");

        debug!("Matched sentence {} with similarity {:.4}", best, score);
        QaAnswer {
            answer: self.sentences[best].clone(),
            context,
            score,
            sentence_index: Some(best),
        }
    }
}
