//! Exam record data model
//!
//! The target artifact of a conversion: an exam name plus exactly 25
//! questions, keyed `"1"` through `"25"`, each with four options labeled
//! by the Hebrew ordinal letters and one correct label.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The canonical option label set, in fixed scan order
pub const OPTION_LABELS: [&str; 4] = ["א", "ב", "ג", "ד"];

/// Number of questions a valid exam carries
pub const QUESTION_COUNT: usize = 25;

/// The full structured output of one conversion
///
/// Constructed once per conversion attempt from validated model output and
/// immutable thereafter: either accepted (zero validation errors) or
/// discarded. A failed record is never patched, only re-extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    /// Free-text exam label; absence is a warning, not an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_name: Option<String>,
    /// Questions keyed by stringified index `"1"`..`"25"`
    pub questions: BTreeMap<String, Question>,
}

/// One exam item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question body, non-empty
    pub text: String,
    /// Option text keyed by canonical label, exactly four entries
    pub options: BTreeMap<String, String>,
    /// One of the canonical labels
    pub correct_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exam_name_is_omitted_when_absent() {
        let record = ExamRecord {
            exam_name: None,
            questions: BTreeMap::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("exam_name"));
    }

    #[test]
    fn serialization_preserves_hebrew_literally() {
        let mut options = BTreeMap::new();
        for label in OPTION_LABELS {
            options.insert(label.to_string(), format!("תשובה {}", label));
        }
        let mut questions = BTreeMap::new();
        questions.insert(
            "1".to_string(),
            Question {
                text: "מהי חובת הגילוי של מתווך?".to_string(),
                options,
                correct_label: "ב".to_string(),
            },
        );
        let record = ExamRecord {
            exam_name: Some("מבחן רישיון תיווך".to_string()),
            questions,
        };

        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("מבחן רישיון תיווך"));
        assert!(json.contains("\"א\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn deserializes_from_model_shaped_json() {
        let value = json!({
            "exam_name": "בחינה",
            "questions": {
                "1": {
                    "text": "שאלה",
                    "options": {"א": "1", "ב": "2", "ג": "3", "ד": "4"},
                    "correct_label": "א"
                }
            }
        });
        let record: ExamRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.exam_name.as_deref(), Some("בחינה"));
        assert_eq!(record.questions["1"].correct_label, "א");
    }
}
