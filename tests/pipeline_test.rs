//! End-to-end pipeline tests with a scripted backend and in-memory text
//! sources; no network, no credentials.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use exam2json::{Config, ConvertPipeline, DocumentTextSource, FailureReason, GenerativeBackend};

/// In-memory document text source
struct StaticTextSource(&'static str);

impl DocumentTextSource for StaticTextSource {
    fn extract(&self) -> String {
        self.0.to_string()
    }
}

/// Scripted backend: pops one canned response per call, records the prompts
/// it was given
#[derive(Clone, Default)]
struct ScriptedBackend {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(anyhow::anyhow!(msg)),
            None => Err(anyhow::anyhow!("script exhausted")),
        }
    }
}

fn pipeline(backend: ScriptedBackend) -> ConvertPipeline<ScriptedBackend> {
    ConvertPipeline::new(backend, &Config::default())
}

/// A payload that satisfies every schema rule
fn valid_payload() -> Value {
    let mut questions = Map::new();
    for n in 1..=25 {
        questions.insert(
            n.to_string(),
            json!({
                "text": format!("שאלה {} בנושא חוק המתווכים במקרקעין", n),
                "options": {
                    "א": "תשובה ראשונה",
                    "ב": "תשובה שנייה",
                    "ג": "תשובה שלישית",
                    "ד": "תשובה רביעית"
                },
                "correct_label": "ג"
            }),
        );
    }
    json!({
        "exam_name": "מבחן רישיון תיווך, חורף 2024",
        "questions": questions
    })
}

fn fenced(payload: &Value) -> String {
    format!("```json\n{}\n```", payload)
}

#[tokio::test]
async fn empty_exam_text_short_circuits_before_any_backend_call() {
    let backend = ScriptedBackend::default();
    let outcome = pipeline(backend.clone())
        .convert(&StaticTextSource(""), &StaticTextSource("תשובות"))
        .await;

    assert!(!outcome.accepted);
    assert_eq!(outcome.failure_reason, Some(FailureReason::ExamTextEmpty));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn empty_answers_text_short_circuits_before_any_backend_call() {
    let backend = ScriptedBackend::default();
    let outcome = pipeline(backend.clone())
        .convert(&StaticTextSource("שאלות"), &StaticTextSource(""))
        .await;

    assert!(!outcome.accepted);
    assert_eq!(
        outcome.failure_reason,
        Some(FailureReason::AnswersTextEmpty)
    );
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn fenced_valid_response_is_accepted_on_the_first_attempt() {
    let backend = ScriptedBackend::new(vec![Ok(fenced(&valid_payload()))]);
    let outcome = pipeline(backend.clone())
        .convert(
            &StaticTextSource("טקסט הבחינה המלא"),
            &StaticTextSource("טבלת התשובות"),
        )
        .await;

    assert!(outcome.accepted);
    assert!(outcome.errors.is_empty());
    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.failure_reason, None);
    assert_eq!(backend.call_count(), 1);

    let record = outcome.record.expect("accepted outcome carries the record");
    assert_eq!(record.questions.len(), 25);
    assert_eq!(
        record.exam_name.as_deref(),
        Some("מבחן רישיון תיווך, חורף 2024")
    );

    // Both source texts reached the backend inside the prompt
    let prompts = backend.prompts.lock().unwrap();
    assert!(prompts[0].contains("טקסט הבחינה המלא"));
    assert!(prompts[0].contains("טבלת התשובות"));
}

#[tokio::test]
async fn schema_violations_withhold_the_record_without_a_failure_reason() {
    let mut payload = valid_payload();
    payload["questions"].as_object_mut().unwrap().remove("25");

    let backend = ScriptedBackend::new(vec![Ok(payload.to_string())]);
    let outcome = pipeline(backend)
        .convert(&StaticTextSource("שאלות"), &StaticTextSource("תשובות"))
        .await;

    assert!(!outcome.accepted);
    assert!(outcome.record.is_none());
    assert_eq!(outcome.failure_reason, None);
    assert!(outcome
        .errors
        .contains(&"question count: 24 instead of 25".to_string()));
    assert!(outcome
        .errors
        .contains(&"question 25 is missing".to_string()));
}

#[tokio::test]
async fn warnings_alone_never_block_acceptance() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("exam_name");

    let backend = ScriptedBackend::new(vec![Ok(payload.to_string())]);
    let outcome = pipeline(backend)
        .convert(&StaticTextSource("שאלות"), &StaticTextSource("תשובות"))
        .await;

    assert!(outcome.accepted);
    assert_eq!(outcome.warnings, vec!["missing 'exam_name' field"]);
    assert!(outcome.record.unwrap().exam_name.is_none());
}

#[tokio::test]
async fn exhausted_extraction_fails_the_request_after_three_calls() {
    let backend = ScriptedBackend::new(vec![
        Err("quota exceeded".to_string()),
        Ok("no json in this one".to_string()),
        Err("quota exceeded".to_string()),
    ]);
    let outcome = pipeline(backend.clone())
        .convert(&StaticTextSource("שאלות"), &StaticTextSource("תשובות"))
        .await;

    assert!(!outcome.accepted);
    assert_eq!(
        outcome.failure_reason,
        Some(FailureReason::ExtractionFailed)
    );
    assert!(outcome.errors.is_empty());
    assert_eq!(backend.call_count(), 3);
}

#[tokio::test]
async fn garbage_then_valid_response_recovers_within_the_bound() {
    let backend = ScriptedBackend::new(vec![
        Ok("Sorry, here is a description instead of JSON.".to_string()),
        Ok("also not json".to_string()),
        Ok(fenced(&valid_payload())),
    ]);
    let outcome = pipeline(backend.clone())
        .convert(&StaticTextSource("שאלות"), &StaticTextSource("תשובות"))
        .await;

    assert!(outcome.accepted);
    assert_eq!(backend.call_count(), 3);
}
