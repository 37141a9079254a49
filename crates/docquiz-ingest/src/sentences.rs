//! Sentence splitting.
//!
//! With the abbreviations resource available, terminators after known
//! abbreviations and single initials do not end a sentence. Without it the
//! splitter breaks after every `.`, `!` or `?` that is followed by whitespace.

use std::collections::HashSet;

use docquiz_core::LinguisticResources;
use tracing::debug;

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// Split text into trimmed, non-empty sentences, using the abbreviation-aware
/// splitter when the resource is available.
pub fn split_sentences(text: &str, resources: &LinguisticResources) -> Vec<String> {
    match resources.abbreviations() {
        Some(abbreviations) => split_with_abbreviations(text, abbreviations),
        None => {
            debug!("Abbreviations unavailable, using punctuation splitter");
            split_on_punctuation(text)
        }
    }
}

/// Fallback splitter: break after `.`/`!`/`?` followed by whitespace.
pub fn split_on_punctuation(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let followed_by_space = chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if matches!(c, '.' | '!' | '?') && followed_by_space {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn split_with_abbreviations(text: &str, abbreviations: &HashSet<String>) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        // Absorb runs like "?!" or "..." and any closing quotes/brackets.
        let mut j = i + 1;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        let at_boundary = j >= chars.len() || chars[j].1.is_whitespace();
        let end = chars.get(j).map(|(p, _)| *p).unwrap_or(text.len());

        let after_abbreviation =
            c == '.' && j == i + 1 && is_abbreviation(&text[start..pos], abbreviations);
        if at_boundary && !after_abbreviation {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// Whether the word immediately before a period is an abbreviation or an initial.
fn is_abbreviation(before: &str, abbreviations: &HashSet<String>) -> bool {
    let word = match before.split_whitespace().last() {
        Some(w) => w.trim_start_matches(|c: char| !c.is_alphanumeric()),
        None => return false,
    };
    if word.is_empty() {
        return false;
    }
    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        if first.is_alphabetic() && first.is_uppercase() {
            return true;
        }
    }
    abbreviations.contains(&word.to_lowercase())
}

fn push_trimmed(sentences: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        sentences.push(s.to_string());
    }
}
