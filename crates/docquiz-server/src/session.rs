//! One user's working session: the current upload and everything derived
//! from it.
//!
//! Every action reads the session, does its work, and replaces the fields it
//! owns. A new upload clears all derived state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use docquiz_core::{DocQuizConfig, Error, LinguisticResources, QaConfig, Result};
use docquiz_ingest::{generate_questions, ingest_pdf, squish, summarize, ExtractedDocument};
use docquiz_resolve::QaIndex;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const NO_UPLOAD_WARNING: &str = "Please upload a PDF first.";
pub const NO_TEXT_WARNING: &str =
    "Couldn't extract any text. Make sure the PDF is text-based or run OCR.";
pub const NO_QUESTION_SOURCE_WARNING: &str = "Upload and/or summarize first.";
pub const NO_DOCUMENT_WARNING: &str = "Upload a PDF and extract text first.";
pub const EMPTY_QUESTION_WARNING: &str = "Type a question about the PDF first.";
pub const NO_ANSWER_MESSAGE: &str = "Sorry, I couldn't find a good answer in the document.";

/// The tunables a session needs from the global configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub summary_sentences: usize,
    pub question_count: usize,
    pub qa: QaConfig,
}

impl From<&DocQuizConfig> for SessionSettings {
    fn from(config: &DocQuizConfig) -> Self {
        Self {
            summary_sentences: config.summary_sentences,
            question_count: config.question_count,
            qa: config.qa,
        }
    }
}

/// The uploaded PDF.
#[derive(Debug, Clone)]
pub struct Upload {
    pub id: String,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInfo {
    pub id: String,
    pub filename: String,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Result of extraction and summarization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOutcome {
    pub summary: String,
    pub page_count: usize,
    pub empty_pages: usize,
    pub content_hash: String,
    pub sentence_count: usize,
}

/// Answer as shown to the user: whitespace squished, never empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskOutcome {
    pub answer: String,
    pub context: String,
    pub confident: bool,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberedQuestion {
    pub number: usize,
    pub question: String,
}

/// Serializable view of the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub upload: Option<UploadInfo>,
    pub has_text: bool,
    pub summary: String,
    pub questions: Vec<NumberedQuestion>,
    pub sentence_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

pub struct Session {
    resources: Arc<LinguisticResources>,
    settings: SessionSettings,
    upload: Option<Upload>,
    document: Option<ExtractedDocument>,
    full_text: String,
    summary: String,
    qa: Option<QaIndex>,
    questions: Vec<String>,
}

impl Session {
    pub fn new(resources: Arc<LinguisticResources>, settings: SessionSettings) -> Self {
        Self {
            resources,
            settings,
            upload: None,
            document: None,
            full_text: String::new(),
            summary: String::new(),
            qa: None,
            questions: Vec::new(),
        }
    }

    /// Replace the current upload. All derived state is dropped.
    pub fn upload(&mut self, filename: impl Into<String>, bytes: Vec<u8>) -> UploadInfo {
        self.clear_derived();
        let upload = Upload {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            bytes,
            uploaded_at: Utc::now(),
        };
        info!("Received upload {} ({} bytes)", upload.filename, upload.bytes.len());
        let info = upload_info(&upload);
        self.upload = Some(upload);
        info
    }

    /// Extract the upload's text, summarize it and rebuild the QA index.
    pub fn extract_and_summarize(&mut self) -> Result<SummaryOutcome> {
        let upload = self
            .upload
            .as_ref()
            .ok_or_else(|| Error::Precondition(NO_UPLOAD_WARNING.into()))?;

        let document = ingest_pdf(&upload.bytes)?;
        self.full_text = document.text.clone();
        if document.is_empty() {
            warn!("No text extracted from {}", upload.filename);
            self.document = Some(document);
            self.summary.clear();
            self.qa = None;
            return Err(Error::NoText(NO_TEXT_WARNING.into()));
        }

        self.summary = summarize(
            &self.full_text,
            self.settings.summary_sentences,
            &self.resources,
        );
        let qa = QaIndex::build(&self.full_text, &self.resources, self.settings.qa);

        let outcome = SummaryOutcome {
            summary: self.summary.clone(),
            page_count: document.page_count,
            empty_pages: document.empty_pages,
            content_hash: document.content_hash.clone(),
            sentence_count: qa.len(),
        };
        self.qa = Some(qa);
        self.document = Some(document);
        Ok(outcome)
    }

    /// Questions from the summary when there is one, else from the full text.
    pub fn generate_questions(&mut self) -> Result<&[String]> {
        let source = if !self.summary.trim().is_empty() {
            &self.summary
        } else if !self.full_text.trim().is_empty() {
            &self.full_text
        } else {
            return Err(Error::Precondition(NO_QUESTION_SOURCE_WARNING.into()));
        };

        self.questions = generate_questions(source, self.settings.question_count, &self.resources);
        info!("Generated {} questions", self.questions.len());
        Ok(&self.questions)
    }

    /// Answer a free-text question against the current document.
    pub fn ask(&mut self, question: &str) -> Result<AskOutcome> {
        if question.trim().is_empty() {
            return Err(Error::Precondition(EMPTY_QUESTION_WARNING.into()));
        }
        if self.qa.is_none() {
            if self.full_text.trim().is_empty() {
                return Err(Error::Precondition(NO_DOCUMENT_WARNING.into()));
            }
            debug!("Building QA index on first question");
            self.qa = Some(QaIndex::build(
                &self.full_text,
                &self.resources,
                self.settings.qa,
            ));
        }
        let qa = self
            .qa
            .as_ref()
            .ok_or_else(|| Error::Internal("QA index missing".into()))?;

        let answer = qa.answer(question);
        let squished = squish(&answer.answer);
        Ok(AskOutcome {
            answer: if squished.is_empty() {
                NO_ANSWER_MESSAGE.to_string()
            } else {
                squished
            },
            context: squish(&answer.context),
            confident: answer.is_confident(),
            score: answer.score,
        })
    }

    pub fn numbered_questions(&self) -> Vec<NumberedQuestion> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| NumberedQuestion {
                number: i + 1,
                question: q.clone(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            upload: self.upload.as_ref().map(upload_info),
            has_text: !self.full_text.trim().is_empty(),
            summary: self.summary.clone(),
            questions: self.numbered_questions(),
            sentence_count: self.qa.as_ref().map_or(0, QaIndex::len),
            content_hash: self.document.as_ref().map(|d| d.content_hash.clone()),
        }
    }

    /// Drop the upload and everything derived from it.
    pub fn reset(&mut self) {
        self.upload = None;
        self.clear_derived();
    }

    fn clear_derived(&mut self) {
        self.document = None;
        self.full_text.clear();
        self.summary.clear();
        self.qa = None;
        self.questions.clear();
    }
}

fn upload_info(upload: &Upload) -> UploadInfo {
    UploadInfo {
        id: upload.id.clone(),
        filename: upload.filename.clone(),
        size: upload.bytes.len(),
        uploaded_at: upload.uploaded_at,
    }
}
