//! Extractive summarization with LexRank.
//!
//! Sentences become TF-IDF vectors, edges join distinct sentence pairs whose
//! cosine similarity reaches the threshold, and a damped power iteration over the
//! degree-normalized graph yields a centrality score per sentence.

use std::collections::HashMap;

use docquiz_core::LinguisticResources;
use ndarray::{Array1, Array2};
use tracing::{debug, info};

use crate::extract::tokens::{is_alphabetic, word_tokenize};
use crate::sentences::split_sentences;

const SIMILARITY_THRESHOLD: f64 = 0.1;
const DAMPING: f64 = 0.85;
const TOLERANCE: f64 = 1e-4;
const MAX_ITERATIONS: usize = 100;

/// Summarize `text` down to at most `max_sentences` sentences, space-joined
/// in document order. Short texts are returned unchanged (sentence-wise).
pub fn summarize(text: &str, max_sentences: usize, resources: &LinguisticResources) -> String {
    let sentences = split_sentences(text, resources);
    if sentences.len() <= max_sentences {
        debug!(
            "{} sentences ≤ {}, skipping LexRank",
            sentences.len(),
            max_sentences
        );
        return sentences.join(" ");
    }

    let scores = lexrank_scores(&sentences, resources);
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    // Stable sort: equal scores keep the earlier sentence first
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut selected: Vec<usize> = ranked.into_iter().take(max_sentences).collect();
    selected.sort_unstable();

    info!(
        "Summarized {} sentences down to {}",
        sentences.len(),
        selected.len()
    );
    selected
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// LexRank centrality for each sentence.
pub fn lexrank_scores(sentences: &[String], resources: &LinguisticResources) -> Vec<f64> {
    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }

    let vectors = tfidf_rows(sentences, resources);
    let similarity = vectors.dot(&vectors.t());

    // Thresholded adjacency without self-loops, row-normalized by degree
    let linked = |i: usize, j: usize| i != j && similarity[[i, j]] >= SIMILARITY_THRESHOLD;
    let mut transition = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        let degree = (0..n).filter(|&j| linked(i, j)).count();
        if degree == 0 {
            // Isolated sentence: spread its weight evenly
            transition.row_mut(i).fill(1.0 / n as f64);
            continue;
        }
        for j in 0..n {
            if linked(i, j) {
                transition[[i, j]] = 1.0 / degree as f64;
            }
        }
    }

    let teleport = (1.0 - DAMPING) / n as f64;
    let mut scores = Array1::<f64>::from_elem(n, 1.0 / n as f64);
    for iteration in 0..MAX_ITERATIONS {
        let next = transition.t().dot(&scores) * DAMPING + teleport;
        let delta: f64 = (&next - &scores).mapv(f64::abs).sum();
        scores = next;
        if delta < TOLERANCE {
            debug!("LexRank converged after {} iterations", iteration + 1);
            break;
        }
    }
    scores.to_vec()
}

/// L2-normalized TF-IDF row per sentence over lowercase alphabetic terms.
fn tfidf_rows(sentences: &[String], resources: &LinguisticResources) -> Array2<f64> {
    let stopwords = resources.stopwords();
    let terms: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| {
            word_tokenize(s)
                .into_iter()
                .filter(|t| is_alphabetic(t))
                .map(|t| t.to_lowercase())
                .filter(|t| stopwords.map_or(true, |stops| !stops.contains(t)))
                .collect()
        })
        .collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();
    for sentence_terms in &terms {
        let mut seen_here: Vec<usize> = Vec::new();
        for term in sentence_terms {
            let next_id = vocabulary.len();
            let id = *vocabulary.entry(term.as_str()).or_insert(next_id);
            if id == document_frequency.len() {
                document_frequency.push(0);
            }
            if !seen_here.contains(&id) {
                seen_here.push(id);
                document_frequency[id] += 1;
            }
        }
    }

    let n = sentences.len() as f64;
    let mut rows = Array2::<f64>::zeros((sentences.len(), vocabulary.len()));
    for (i, sentence_terms) in terms.iter().enumerate() {
        for term in sentence_terms {
            rows[[i, vocabulary[term.as_str()]]] += 1.0;
        }
    }
    for (j, &df) in document_frequency.iter().enumerate() {
        let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
        rows.column_mut(j).mapv_inplace(|tf| tf * idf);
    }
    for mut row in rows.rows_mut() {
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row /= norm;
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        let resources = LinguisticResources::builtin();
        let text = "First sentence here.   Second   one follows!\nThird?";
        assert_eq!(
            summarize(text, 3, &resources),
            "First sentence here. Second   one follows! Third?"
        );
        assert_eq!(summarize(text, 7, &resources), summarize(text, 3, &resources));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize("", 5, &LinguisticResources::builtin()), "");
    }

    #[test]
    fn test_selects_central_sentences_in_order() {
        let resources = LinguisticResources::builtin();
        let text = "Rockets carry satellites into orbit. \
                    Bananas are yellow fruit. \
                    Rockets burn fuel to reach orbit. \
                    Orbit requires rockets with fuel. \
                    My neighbour plays the violin.";
        let summary = summarize(text, 2, &resources);
        let picked: Vec<&'static str> = split_sentences(&summary, &resources)
            .iter()
            .map(|s| s.as_str())
            .map(|s| match s {
                s if s.starts_with("Rockets carry") => "a",
                s if s.starts_with("Rockets burn") => "b",
                s if s.starts_with("Orbit requires") => "c",
                _ => "other",
            })
            .collect();
        assert_eq!(picked.len(), 2);
        assert!(!picked.contains(&"other"));
        // Document order is preserved
        let mut sorted = picked.clone();
        sorted.sort();
        assert_eq!(picked, sorted);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let resources = LinguisticResources::builtin();
        let sentences: Vec<String> =
            ["Cats purr.", "Cats sleep.", "Cats and dogs play.", "Dogs bark."]
                .iter()
                .map(|s| s.to_string())
                .collect();
        let scores = lexrank_scores(&sentences, &resources);
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        // The bridging sentence is the most central
        assert!(scores[2] > scores[0]);
        assert!(scores[2] > scores[3]);
    }

    #[test]
    fn test_works_without_resources() {
        let text = "One. Two. Three. Four.";
        let summary = summarize(text, 2, &LinguisticResources::none());
        assert_eq!(split_on_count(&summary), 2);
    }

    fn split_on_count(s: &str) -> usize {
        crate::sentences::split_on_punctuation(s).len()
    }
}
