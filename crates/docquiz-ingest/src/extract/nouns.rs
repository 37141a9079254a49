//! Most frequent nouns of a text.

use std::collections::HashMap;

use docquiz_core::LinguisticResources;
use tracing::debug;

use super::tagger::HeuristicTagger;
use super::tokens::{is_alphabetic, word_tokenize};

/// Up to `n` lowercased nouns, most frequent first. Ties keep first-seen order.
///
/// Without stopwords nothing is filtered; without a lexicon every remaining
/// word counts as a noun.
pub fn top_nouns(text: &str, n: usize, resources: &LinguisticResources) -> Vec<String> {
    let tokens = word_tokenize(text);
    let stopwords = resources.stopwords();
    let words: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|w| is_alphabetic(w))
        .filter(|w| stopwords.map_or(true, |stops| !stops.contains(&w.to_lowercase())))
        .collect();

    let nouns: Vec<&str> = match HeuristicTagger::from_resources(resources) {
        Some(tagger) => tagger
            .tag(&words)
            .into_iter()
            .filter(|(_, tag)| tag.starts_with("NN"))
            .map(|(w, _)| w)
            .collect(),
        None => {
            debug!("Tagger unavailable, treating all {} words as nouns", words.len());
            words
        }
    };

    // Counts in first-seen order so the stable sort breaks ties by appearance
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for noun in nouns {
        let lower = noun.to_lowercase();
        match index.get(&lower) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(lower.clone(), order.len());
                order.push((lower, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().take(n).map(|(w, _)| w).collect()
}
