//! Treebank-style word tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{L}+(?:['\u{2019}]\p{L}+)*|\d+(?:[.,]\d+)*|[^\s\p{L}\d]").unwrap()
});

/// Split text into word, number and punctuation tokens.
///
/// Contractions are split the way the Penn Treebank does it:
/// `don't` → `do`, `n't`; `planet's` → `planet`, `'s`.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str();
        match token.rfind(['\'', '\u{2019}']) {
            Some(apos) => split_contraction(token, apos, &mut tokens),
            None => tokens.push(token.to_string()),
        }
    }
    tokens
}

fn split_contraction(token: &str, apos: usize, out: &mut Vec<String>) {
    let (head, clitic) = token.split_at(apos);
    let after_apostrophe = clitic.chars().skip(1).collect::<String>();
    if after_apostrophe.eq_ignore_ascii_case("t") && head.len() > 1 && head.ends_with(['n', 'N']) {
        // The "n" belongs to the clitic: "can't" -> "ca", "n't"
        let n_start = head.len() - 1;
        out.push(token[..n_start].to_string());
        out.push(token[n_start..].to_string());
    } else {
        out.push(head.to_string());
        out.push(clitic.to_string());
    }
}

/// True for tokens made only of letters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens = word_tokenize("The mission began in 1969, then ended.");
        assert_eq!(
            tokens,
            vec!["The", "mission", "began", "in", "1969", ",", "then", "ended", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(word_tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(word_tokenize("planet's"), vec!["planet", "'s"]);
        assert_eq!(word_tokenize("can't"), vec!["ca", "n't"]);
    }

    #[test]
    fn test_decimal_number() {
        assert_eq!(word_tokenize("3.14 pi"), vec!["3.14", "pi"]);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("Eiffel"));
        assert!(is_alphabetic("café"));
        assert!(!is_alphabetic("n't"));
        assert!(!is_alphabetic("1969"));
        assert!(!is_alphabetic(""));
    }
}
