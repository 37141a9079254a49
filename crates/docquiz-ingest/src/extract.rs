//! Heuristic linguistic extraction: word tokens, part-of-speech tags, nouns.
//!
//! Each stage reads its data from `LinguisticResources` and degrades to a
//! cruder rule when that data is missing.

pub mod nouns;
pub mod tagger;
pub mod tokens;

pub use nouns::top_nouns;
pub use tagger::HeuristicTagger;
pub use tokens::word_tokenize;
