//! Conversion pipeline
//!
//! One stateless conversion per invocation: obtain text for both documents,
//! build the prompt, run the bounded extraction, validate, and gate
//! acceptance on an empty error list.

use std::fmt;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::DocumentTextSource;
use crate::models::ExamRecord;
use crate::services::{
    build_extraction_prompt, ExamValidator, GenerativeBackend, StructuredExtractor,
};

/// Why a conversion failed before validation could accept or reject it
///
/// These are request-level outcomes, not exceptions: the caller branches on
/// them deterministically. Validation errors are carried separately in
/// `ConvertOutcome::errors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The exam document yielded no extractable text
    ExamTextEmpty,
    /// The answers document yielded no extractable text
    AnswersTextEmpty,
    /// The backend never produced a parseable JSON object within the
    /// attempt bound
    ExtractionFailed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::ExamTextEmpty => {
                write!(f, "could not extract text from the exam document")
            }
            FailureReason::AnswersTextEmpty => {
                write!(f, "could not extract text from the answers document")
            }
            FailureReason::ExtractionFailed => {
                write!(f, "conversion failed, please run it again")
            }
        }
    }
}

/// Result of one conversion
#[derive(Debug)]
pub struct ConvertOutcome {
    /// True only when validation produced zero errors
    pub accepted: bool,
    /// The validated record; withheld unless accepted
    pub record: Option<ExamRecord>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Populated only for empty source text or exhausted extraction;
    /// absent when the failure is purely validation errors
    pub failure_reason: Option<FailureReason>,
}

impl ConvertOutcome {
    fn failed(reason: FailureReason) -> Self {
        Self {
            accepted: false,
            record: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            failure_reason: Some(reason),
        }
    }

    fn rejected(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            accepted: false,
            record: None,
            errors,
            warnings,
            failure_reason: None,
        }
    }

    fn accepted(record: ExamRecord, warnings: Vec<String>) -> Self {
        Self {
            accepted: true,
            record: Some(record),
            errors: Vec::new(),
            warnings,
            failure_reason: None,
        }
    }
}

/// Sequences one document-pair conversion
pub struct ConvertPipeline<B> {
    extractor: StructuredExtractor<B>,
    validator: ExamValidator,
}

impl<B: GenerativeBackend> ConvertPipeline<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        Self {
            extractor: StructuredExtractor::new(backend, config),
            validator: ExamValidator::new(config),
        }
    }

    /// Run one conversion
    ///
    /// Empty text on either side fails fast with a per-side reason and makes
    /// no backend call. Extraction exhaustion surfaces as a generic failure;
    /// the underlying cause goes to the log only.
    pub async fn convert(
        &self,
        exam: &dyn DocumentTextSource,
        answers: &dyn DocumentTextSource,
    ) -> ConvertOutcome {
        info!("📄 extracting text from the source documents...");

        let exam_text = exam.extract();
        if exam_text.is_empty() {
            warn!("⚠️ exam document yielded no text");
            return ConvertOutcome::failed(FailureReason::ExamTextEmpty);
        }

        let answers_text = answers.extract();
        if answers_text.is_empty() {
            warn!("⚠️ answers document yielded no text");
            return ConvertOutcome::failed(FailureReason::AnswersTextEmpty);
        }

        info!(
            "✓ text extracted (exam: {} chars, answers: {} chars)",
            exam_text.chars().count(),
            answers_text.chars().count()
        );

        let prompt = build_extraction_prompt(&exam_text, &answers_text);

        info!("🔄 converting with the generative backend...");
        let candidate = match self.extractor.extract(&prompt).await {
            Ok(value) => value,
            Err(e) => {
                error!("❌ extraction failed: {}", e);
                return ConvertOutcome::failed(FailureReason::ExtractionFailed);
            }
        };

        let (errors, warnings) = self.validator.validate(&candidate);
        if !errors.is_empty() {
            warn!("⚠️ record rejected with {} validation errors", errors.len());
            return ConvertOutcome::rejected(errors, warnings);
        }

        match serde_json::from_value::<ExamRecord>(candidate) {
            Ok(record) => {
                info!("✅ record checked and accepted");
                ConvertOutcome::accepted(record, warnings)
            }
            Err(e) => ConvertOutcome::rejected(
                vec![format!("payload does not fit the exam schema: {}", e)],
                warnings,
            ),
        }
    }
}
