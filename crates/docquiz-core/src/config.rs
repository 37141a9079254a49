//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3004;
pub const DEFAULT_SUMMARY_SENTENCES: usize = 7;
pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.05;
pub const DEFAULT_CONTEXT_WINDOW: usize = 2;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

/// Paths to all DocQuiz data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Linguistic resources: stopwords, tagger lexicon, abbreviations (`data/resources/`).
    pub resources: PathBuf,
    /// Optional configuration overrides (`data/docquiz.json`).
    pub config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            resources: root.join("resources"),
            config_file: root.join("docquiz.json"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.resources)?;
        Ok(())
    }
}

/// Retrieval QA tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QaConfig {
    /// Best-match cosine similarity below this yields the low-confidence answer.
    #[serde(default = "default_threshold")]
    pub confidence_threshold: f64,
    /// Sentences of context kept before the matched sentence.
    #[serde(default = "default_window")]
    pub context_before: usize,
    /// Sentences of context kept after the matched sentence.
    #[serde(default = "default_window")]
    pub context_after: usize,
}

fn default_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}
fn default_window() -> usize {
    DEFAULT_CONTEXT_WINDOW
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            context_before: DEFAULT_CONTEXT_WINDOW,
            context_after: DEFAULT_CONTEXT_WINDOW,
        }
    }
}

/// Overrides read from `docquiz.json`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    port: Option<u16>,
    summary_sentences: Option<usize>,
    question_count: Option<usize>,
    max_upload_mb: Option<usize>,
    qa: Option<QaConfig>,
}

/// Top-level DocQuiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocQuizConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Sentences kept by the extractive summary.
    pub summary_sentences: usize,
    /// Questions requested from the generator.
    pub question_count: usize,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: usize,
    pub qa: QaConfig,
}

impl DocQuizConfig {
    /// Defaults rooted at `data_paths`, without consulting file or environment.
    pub fn with_paths(data_paths: DataPaths) -> Self {
        Self {
            port: DEFAULT_PORT,
            data_paths,
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            question_count: DEFAULT_QUESTION_COUNT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            qa: QaConfig::default(),
        }
    }

    /// Create configuration from defaults, then `docquiz.json`, then environment.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_paths = DataPaths::new(data_dir)?;
        let mut config = Self::with_paths(data_paths);

        if let Some(file) = load_config_file(&config.data_paths.config_file)? {
            config.apply_file(file)?;
        }

        if let Some(port) = env_parse::<u16>("PORT")? {
            config.port = port;
        }
        if let Some(k) = env_parse::<usize>("DOCQUIZ_SUMMARY_SENTENCES")? {
            config.summary_sentences = k;
        }
        if let Some(n) = env_parse::<usize>("DOCQUIZ_QUESTION_COUNT")? {
            config.question_count = n;
        }
        if let Some(t) = env_parse::<f64>("DOCQUIZ_QA_THRESHOLD")? {
            config.qa.confidence_threshold = t;
        }
        if let Some(mb) = env_parse::<usize>("DOCQUIZ_MAX_UPLOAD_MB")? {
            config.max_upload_bytes = megabytes(mb)?;
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(k) = file.summary_sentences {
            self.summary_sentences = k;
        }
        if let Some(n) = file.question_count {
            self.question_count = n;
        }
        if let Some(mb) = file.max_upload_mb {
            self.max_upload_bytes = megabytes(mb)?;
        }
        if let Some(qa) = file.qa {
            self.qa = qa;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.qa.confidence_threshold) {
            return Err(Error::Config(format!(
                "confidence threshold must be within [0, 1], got {}",
                self.qa.confidence_threshold
            )));
        }
        if self.summary_sentences == 0 {
            return Err(Error::Config("summary_sentences must be at least 1".into()));
        }
        Ok(())
    }
}

fn megabytes(mb: usize) -> Result<usize> {
    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| Error::Config(format!("max upload size of {} MB is too large", mb)))
}

fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    match std::fs::read_to_string(path) {
        Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid value for {}: {:?}", key, raw))),
        Err(_) => Ok(None),
    }
}
