//! Lexicon + suffix-rule part-of-speech tagger producing Penn Treebank tags.

use std::collections::HashMap;

use docquiz_core::LinguisticResources;

/// Tags words by lexicon lookup, falling back to orthographic rules.
pub struct HeuristicTagger<'a> {
    lexicon: &'a HashMap<String, String>,
}

impl<'a> HeuristicTagger<'a> {
    pub fn new(lexicon: &'a HashMap<String, String>) -> Self {
        Self { lexicon }
    }

    /// `None` when the lexicon resource is unavailable.
    pub fn from_resources(resources: &'a LinguisticResources) -> Option<Self> {
        resources.lexicon().map(Self::new)
    }

    /// Tag each word, preserving order.
    pub fn tag<'w>(&self, words: &[&'w str]) -> Vec<(&'w str, String)> {
        words.iter().map(|w| (*w, self.tag_word(w))).collect()
    }

    pub fn tag_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        suffix_tag(word, &lower).to_string()
    }
}

fn suffix_tag(word: &str, lower: &str) -> &'static str {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if word.chars().next().map(char::is_uppercase).unwrap_or(false) {
        return "NNP";
    }
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        "RB"
    } else if len > 4 && lower.ends_with("ing") {
        "VBG"
    } else if len > 3 && lower.ends_with("ed") {
        "VBD"
    } else if len > 5
        && ["ous", "ful", "able", "ible", "less"]
            .iter()
            .any(|s| lower.ends_with(s))
    {
        "JJ"
    } else if len > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        "NNS"
    } else {
        "NN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_wins() {
        let resources = LinguisticResources::builtin();
        let tagger = HeuristicTagger::from_resources(&resources).unwrap();
        assert_eq!(tagger.tag_word("began"), "VBD");
        assert_eq!(tagger.tag_word("Famous"), "JJ");
        assert_eq!(tagger.tag_word("planning"), "NN");
        assert_eq!(tagger.tag_word("building"), "NN");
        assert_eq!(tagger.tag_word("running"), "VBG");
    }

    #[test]
    fn test_suffix_rules() {
        let lexicon = HashMap::new();
        let tagger = HeuristicTagger::new(&lexicon);
        assert_eq!(tagger.tag_word("quickly"), "RB");
        assert_eq!(tagger.tag_word("running"), "VBG");
        assert_eq!(tagger.tag_word("succeeded"), "VBD");
        assert_eq!(tagger.tag_word("dangerous"), "JJ");
        assert_eq!(tagger.tag_word("rockets"), "NNS");
        assert_eq!(tagger.tag_word("glass"), "NN");
        assert_eq!(tagger.tag_word("capital"), "NN");
        assert_eq!(tagger.tag_word("Paris"), "NNP");
        assert_eq!(tagger.tag_word("1969"), "CD");
    }

    #[test]
    fn test_tag_preserves_order() {
        let lexicon = HashMap::new();
        let tagger = HeuristicTagger::new(&lexicon);
        let tagged = tagger.tag(&["Louvre", "museum"]);
        assert_eq!(tagged, vec![("Louvre", "NNP".to_string()), ("museum", "NN".to_string())]);
    }

    #[test]
    fn test_unavailable_without_lexicon() {
        assert!(HeuristicTagger::from_resources(&LinguisticResources::none()).is_none());
    }
}
