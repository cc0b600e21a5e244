//! Extraction prompt rendering
//!
//! Pure and deterministic: the same pair of source texts always yields an
//! identical prompt string. Empty inputs are accepted here; refusing them is
//! the orchestrator's job.

/// Render the fixed-schema instruction prompt for one conversion
///
/// The prompt embeds the canonical exam schema (exam_name, questions keyed
/// 1..25, each with text/options/correct_label, options keyed א/ב/ג/ד) and
/// the structural rules the model must follow, then both source texts under
/// their section markers.
pub fn build_extraction_prompt(exam_text: &str, answers_text: &str) -> String {
    format!(
        r#"להלן טקסט של בחינה רישיון מתווכים וקובץ תשובות.
המשימה: הפק JSON תקני בדיוק במבנה הבא:

{{
  "exam_name": "שם הבחינה",
  "questions": {{
    "1": {{
      "text": "טקסט השאלה המלא",
      "options": {{
        "א": "טקסט תשובה א",
        "ב": "טקסט תשובה ב",
        "ג": "טקסט תשובה ג",
        "ד": "טקסט תשובה ד"
      }},
      "correct_label": "א"
    }},
    ...25 שאלות...
  }}
}}

חוקים:
- בדיוק 25 שאלות
- כל שאלה עם בדיוק 4 תשובות: א, ב, ג, ד
- correct_label חייב להיות אחד מ: א, ב, ג, ד
- שמור על הטקסט המלא של כל שאלה ותשובה
- החזר JSON בלבד, ללא הסברים נוספים

=== טקסט הבחינה ===
{exam_text}

=== טקסט התשובות ===
{answers_text}
"#
    )
}
