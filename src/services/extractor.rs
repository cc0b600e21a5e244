//! Structured extraction from model output
//!
//! The generative backend is non-deterministic and occasionally wraps its
//! answer in commentary or code fences. The extractor drives it with a fixed
//! attempt bound, sanitizes each response, and recovers the first plausible
//! JSON object from surrounding prose. Every per-attempt failure (backend
//! error, timeout, no brace span, parse error) is recorded and retried; only
//! the terminal exhaustion is reported to the caller.

use serde_json::Value as JsonValue;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ExtractError;
use crate::services::llm_service::GenerativeBackend;
use crate::utils::logging::truncate_text;

/// Strip the markdown code-fence markers that commonly wrap JSON in model
/// output, then trim
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Greedy brace-span extraction: the substring from the first `{` to the
/// last `}`
///
/// Deliberately not a balanced-brace scanner: it trades rare false matches
/// on nested unrelated braces for tolerance of explanatory text before and
/// after the object.
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Recover a JSON object from one raw model response
///
/// Returns the failure reason instead of an error type so the retry loop can
/// accumulate it as plain text.
pub fn recover_json_object(raw: &str) -> Result<JsonValue, String> {
    let cleaned = strip_code_fences(raw);
    let Some(span) = brace_span(&cleaned) else {
        return Err("no JSON object found in response".to_string());
    };
    serde_json::from_str::<JsonValue>(span).map_err(|e| format!("response is not valid JSON: {}", e))
}

/// Bounded-retry driver for the generative backend
pub struct StructuredExtractor<B> {
    backend: B,
    max_attempts: usize,
    attempt_timeout: Duration,
}

impl<B: GenerativeBackend> StructuredExtractor<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        Self {
            backend,
            max_attempts: config.max_extraction_attempts,
            attempt_timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }

    /// Issue the prompt and recover a JSON object, up to the attempt bound
    ///
    /// Never makes more than `max_attempts` backend calls. Backend failures
    /// and timeouts count as failed attempts rather than propagating.
    pub async fn extract(&self, prompt: &str) -> Result<JsonValue, ExtractError> {
        let mut last_failure = String::new();

        for attempt in 1..=self.max_attempts {
            debug!("extraction attempt {}/{}", attempt, self.max_attempts);

            match timeout(self.attempt_timeout, self.backend.generate(prompt)).await {
                Err(_) => {
                    last_failure = format!(
                        "backend call timed out after {}s",
                        self.attempt_timeout.as_secs()
                    );
                    warn!("attempt {}: {}", attempt, last_failure);
                }
                Ok(Err(e)) => {
                    last_failure = format!("backend call failed: {:#}", e);
                    warn!("attempt {}: {}", attempt, last_failure);
                }
                Ok(Ok(raw)) => match recover_json_object(&raw) {
                    Ok(value) => {
                        info!("✓ recovered JSON object on attempt {}", attempt);
                        return Ok(value);
                    }
                    Err(reason) => {
                        warn!(
                            "attempt {}: {} (response: {})",
                            attempt,
                            reason,
                            truncate_text(&raw, 120)
                        );
                        last_failure = reason;
                    }
                },
            }
        }

        Err(ExtractError::AttemptsExhausted {
            attempts: self.max_attempts,
            last_failure,
        })
    }
}
