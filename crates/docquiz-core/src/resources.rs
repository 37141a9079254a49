//! Linguistic resource discovery and installation.
//!
//! Stopwords, the tagger lexicon and the abbreviation list live as plain
//! text files under the resources directory. Consumers never fail when a
//! resource is missing: they check availability here and take their
//! fallback path instead.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;

/// A resource file that can be probed and installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Stopwords,
    Lexicon,
    Abbreviations,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Stopwords, Self::Lexicon, Self::Abbreviations];

    /// Path of this resource relative to the resources directory.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Stopwords => "stopwords/english",
            Self::Lexicon => "taggers/lexicon.tsv",
            Self::Abbreviations => "tokenizers/abbreviations",
        }
    }

    fn default_contents(&self) -> String {
        match self {
            Self::Stopwords => lines(defaults::STOPWORDS.iter().copied()),
            Self::Abbreviations => lines(defaults::ABBREVIATIONS.iter().copied()),
            Self::Lexicon => {
                let mut out = String::new();
                for (word, tag) in defaults::LEXICON {
                    out.push_str(word);
                    out.push('\t');
                    out.push_str(tag);
                    out.push('\n');
                }
                out
            }
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopwords => write!(f, "stopwords"),
            Self::Lexicon => write!(f, "lexicon"),
            Self::Abbreviations => write!(f, "abbreviations"),
        }
    }
}

fn lines<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}

/// Availability report, one flag per resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub stopwords: bool,
    pub lexicon: bool,
    pub abbreviations: bool,
}

/// Loaded linguistic resources. `None` means the resource is unavailable.
#[derive(Debug, Clone, Default)]
pub struct LinguisticResources {
    stopwords: Option<HashSet<String>>,
    lexicon: Option<HashMap<String, String>>,
    abbreviations: Option<HashSet<String>>,
}

impl LinguisticResources {
    /// No resources at all; every consumer takes its fallback path.
    pub fn none() -> Self {
        Self::default()
    }

    /// The bundled defaults, loaded in memory without touching disk.
    pub fn builtin() -> Self {
        Self {
            stopwords: Some(defaults::STOPWORDS.iter().map(|s| s.to_string()).collect()),
            lexicon: Some(
                defaults::LEXICON
                    .iter()
                    .map(|(w, t)| (w.to_string(), t.to_string()))
                    .collect(),
            ),
            abbreviations: Some(
                defaults::ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    /// Discover which resources exist under `dir` and load them.
    pub fn probe(dir: &Path) -> Self {
        let stopwords = read_resource(dir, ResourceKind::Stopwords).map(|data| parse_word_set(&data));
        let abbreviations =
            read_resource(dir, ResourceKind::Abbreviations).map(|data| parse_word_set(&data));
        let lexicon = read_resource(dir, ResourceKind::Lexicon).map(|data| parse_lexicon(&data));

        let resources = Self {
            stopwords,
            lexicon,
            abbreviations,
        };
        let status = resources.status();
        info!(
            "Linguistic resources in {}: stopwords={} lexicon={} abbreviations={}",
            dir.display(),
            status.stopwords,
            status.lexicon,
            status.abbreviations
        );
        resources
    }

    /// Write the bundled default for every resource file missing under `dir`.
    /// Existing files are left alone. Returns the resources that were written.
    pub fn install_defaults(dir: &Path) -> Result<Vec<ResourceKind>> {
        std::fs::create_dir_all(dir)?;
        let mut installed = Vec::new();
        for kind in ResourceKind::ALL {
            let path = dir.join(kind.relative_path());
            if path.exists() {
                debug!("Resource {} already present", kind);
                continue;
            }
            let written = path
                .parent()
                .map(std::fs::create_dir_all)
                .unwrap_or(Ok(()))
                .and_then(|_| std::fs::write(&path, kind.default_contents()));
            match written {
                Ok(()) => {
                    info!("Installed {} resource at {}", kind, path.display());
                    installed.push(kind);
                }
                Err(e) => warn!("Could not install {} resource: {}", kind, e),
            }
        }
        Ok(installed)
    }

    pub fn stopwords(&self) -> Option<&HashSet<String>> {
        self.stopwords.as_ref()
    }

    pub fn lexicon(&self) -> Option<&HashMap<String, String>> {
        self.lexicon.as_ref()
    }

    pub fn abbreviations(&self) -> Option<&HashSet<String>> {
        self.abbreviations.as_ref()
    }

    pub fn status(&self) -> ResourceStatus {
        ResourceStatus {
            stopwords: self.stopwords.is_some(),
            lexicon: self.lexicon.is_some(),
            abbreviations: self.abbreviations.is_some(),
        }
    }
}

fn read_resource(dir: &Path, kind: ResourceKind) -> Option<String> {
    let path = dir.join(kind.relative_path());
    match std::fs::read_to_string(&path) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!("Resource {} unavailable at {}: {}", kind, path.display(), e);
            None
        }
    }
}

fn parse_word_set(data: &str) -> HashSet<String> {
    data.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_lowercase())
        .collect()
}

fn parse_lexicon(data: &str) -> HashMap<String, String> {
    data.lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .filter_map(|l| {
            let mut parts = l.split('\t');
            let word = parts.next()?.trim();
            let tag = parts.next()?.trim();
            if word.is_empty() || tag.is_empty() {
                None
            } else {
                Some((word.to_lowercase(), tag.to_string()))
            }
        })
        .collect()
}
