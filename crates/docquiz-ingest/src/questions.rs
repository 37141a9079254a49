//! Template-based quiz question generation.
//!
//! Phases run in a fixed order (definitional, factoid, temporal, causal)
//! and feed one accumulator that is deduplicated and capped at the end.
//! The copula template is a plain regex and will happily match across an
//! abbreviation period; that is accepted behaviour.

use std::collections::HashSet;

use docquiz_core::LinguisticResources;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extract::top_nouns;
use crate::sentences::split_sentences;

/// Nouns considered before the definitional phase picks its share.
const NOUN_POOL: usize = 20;

pub const TEMPORAL_QUESTION: &str = "When did that happen?";
pub const CAUSAL_QUESTION: &str = "Why did that happen?";

static COPULA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.+?)\s+(is|are|was|were)\s+(.+?)\.").unwrap());
static LEADING_ARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Tt]he\s+|^[Aa]n?\s+").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Generate up to `n` distinct questions about `text`.
pub fn generate_questions(text: &str, n: usize, resources: &LinguisticResources) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let sentences = split_sentences(text, resources);
    let nouns = top_nouns(text, NOUN_POOL, resources);
    let mut questions: Vec<String> = Vec::new();

    // 1) Definitional
    let definitional = n.div_ceil(2).max(1);
    for noun in nouns.iter().take(definitional) {
        questions.push(format!("What is {}?", noun));
    }

    // 2) Factoid from copula sentences
    for sentence in &sentences {
        if questions.len() >= n {
            break;
        }
        if let Some(question) = copula_question(sentence) {
            questions.push(question);
        }
    }

    // 3) Temporal
    for sentence in &sentences {
        if questions.len() >= n {
            break;
        }
        if YEAR_RE.is_match(sentence) {
            questions.push(TEMPORAL_QUESTION.to_string());
        }
    }

    // 4) Causal
    for sentence in &sentences {
        if questions.len() >= n {
            break;
        }
        let lower = sentence.to_lowercase();
        if lower.contains("because") || lower.contains("due to") {
            questions.push(CAUSAL_QUESTION.to_string());
        }
    }

    let out = dedup_capped(questions, n);
    debug!(
        "Generated {} questions from {} sentences and {} nouns",
        out.len(),
        sentences.len(),
        nouns.len()
    );
    out
}

/// `"What {copula} {subject}?"` for a sentence shaped `<subject> is <predicate>.`
fn copula_question(sentence: &str) -> Option<String> {
    let caps = COPULA_RE.captures(sentence)?;
    let subject = LEADING_ARTICLE_RE.replace(&caps[1], "");
    let subject = subject.trim();
    if subject.is_empty() {
        return None;
    }
    Some(format!("What {} {}?", caps[2].to_lowercase(), subject))
}

fn dedup_capped(questions: Vec<String>, n: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for q in questions {
        let q = q.trim();
        if q.is_empty() || !seen.insert(q.to_string()) {
            continue;
        }
        out.push(q.to_string());
        if out.len() >= n {
            break;
        }
    }
    out
}
