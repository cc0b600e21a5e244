//! Exam schema validation
//!
//! Proves or disproves a candidate payload's conformance to the exam schema
//! and flags content-quality risks. Never fails: always returns an error
//! list and a warning list, each in a fixed scan order (global checks first,
//! then per-question checks in ascending index order) so test suites can
//! assert on the ordering.
//!
//! Control flow is two phases: a single precondition check on `questions`
//! that returns early, then an unconditional full scan accumulating into the
//! two lists. One violation never suppresses discovery of another.

use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::models::{OPTION_LABELS, QUESTION_COUNT};

/// Unicode block scanned by the Hebrew-content heuristic
const HEBREW_BLOCK: std::ops::RangeInclusive<char> = '\u{05D0}'..='\u{05EA}';

/// Default minimum Hebrew characters before the heuristic warns
pub const DEFAULT_HEBREW_WARN_THRESHOLD: usize = 5;

/// Semantic validator for candidate exam payloads
///
/// Pure and deterministic; blocking violations come out as errors, quality
/// risks as warnings. The acceptance rule (errors must be empty) is enforced
/// by the orchestrator, not here.
pub struct ExamValidator {
    hebrew_warn_threshold: usize,
}

impl Default for ExamValidator {
    fn default() -> Self {
        Self {
            hebrew_warn_threshold: DEFAULT_HEBREW_WARN_THRESHOLD,
        }
    }
}

impl ExamValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            hebrew_warn_threshold: config.hebrew_warn_threshold,
        }
    }

    /// Check a parsed payload against the exam schema
    ///
    /// Returns `(errors, warnings)`; both empty means the record is valid.
    pub fn validate(&self, record: &JsonValue) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // Precondition: every downstream rule assumes `questions` exists
        let questions = match record.get("questions") {
            None => {
                errors.push("missing 'questions' field".to_string());
                return (errors, warnings);
            }
            Some(value) => match value.as_object() {
                Some(map) => map,
                None => {
                    errors.push("'questions' is not an object".to_string());
                    return (errors, warnings);
                }
            },
        };

        if record.get("exam_name").is_none() {
            warnings.push("missing 'exam_name' field".to_string());
        }

        if questions.len() != QUESTION_COUNT {
            errors.push(format!(
                "question count: {} instead of {}",
                questions.len(),
                QUESTION_COUNT
            ));
        }

        for n in 1..=QUESTION_COUNT {
            let Some(question) = questions.get(&n.to_string()) else {
                errors.push(format!("question {} is missing", n));
                continue;
            };

            self.check_text(n, question, &mut errors);
            self.check_options(n, question, &mut errors);
            self.check_correct_label(n, question, &mut errors);
            self.check_hebrew_content(n, question, &mut warnings);
        }

        (errors, warnings)
    }

    fn check_text(&self, n: usize, question: &JsonValue, errors: &mut Vec<String>) {
        let text = question.get("text").and_then(JsonValue::as_str);
        if text.map_or(true, |t| t.trim().is_empty()) {
            errors.push(format!("question {}: empty text", n));
        }
    }

    fn check_options(&self, n: usize, question: &JsonValue, errors: &mut Vec<String>) {
        let Some(options) = question.get("options") else {
            errors.push(format!("question {}: missing 'options' field", n));
            return;
        };
        let Some(options) = options.as_object() else {
            errors.push(format!("question {}: 'options' is not an object", n));
            return;
        };

        if options.len() != OPTION_LABELS.len() {
            errors.push(format!(
                "question {}: {} options instead of {}",
                n,
                options.len(),
                OPTION_LABELS.len()
            ));
        }

        for label in OPTION_LABELS {
            match options.get(label) {
                None => errors.push(format!("question {}: missing option '{}'", n, label)),
                Some(value) => {
                    let blank = value.as_str().map_or(true, |s| s.trim().is_empty());
                    if blank {
                        errors.push(format!("question {}: option '{}' is empty", n, label));
                    }
                }
            }
        }
    }

    fn check_correct_label(&self, n: usize, question: &JsonValue, errors: &mut Vec<String>) {
        match question.get("correct_label") {
            None => errors.push(format!("question {}: missing 'correct_label'", n)),
            Some(value) => {
                let valid = value
                    .as_str()
                    .is_some_and(|label| OPTION_LABELS.contains(&label));
                if !valid {
                    let shown = value
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    errors.push(format!("question {}: invalid correct_label '{}'", n, shown));
                }
            }
        }
    }

    /// Heuristic for "this text is not really Hebrew": fewer than the
    /// configured number of characters in the Hebrew letter block
    fn check_hebrew_content(&self, n: usize, question: &JsonValue, warnings: &mut Vec<String>) {
        let Some(text) = question.get("text").and_then(JsonValue::as_str) else {
            return;
        };
        if text.is_empty() {
            return;
        }

        let hebrew_chars = text.chars().filter(|c| HEBREW_BLOCK.contains(c)).count();
        if hebrew_chars < self.hebrew_warn_threshold {
            warnings.push(format!("question {}: text may not be valid Hebrew", n));
        }
    }
}
