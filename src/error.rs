use std::fmt;

/// Generative backend errors
#[derive(Debug)]
pub enum LlmError {
    /// The API call itself failed (network, auth, quota)
    ApiCallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The API returned no choices
    EmptyResponse { model: String },
    /// The first choice carried no message content
    EmptyContent { model: String },
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::ApiCallFailed { model, source } => {
                write!(f, "LLM API call failed (model: {}): {}", model, source)
            }
            LlmError::EmptyResponse { model } => {
                write!(f, "LLM returned no choices (model: {})", model)
            }
            LlmError::EmptyContent { model } => {
                write!(f, "LLM returned empty content (model: {})", model)
            }
        }
    }
}

impl std::error::Error for LlmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LlmError::ApiCallFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// Terminal failure of the structured extraction loop
///
/// Per-attempt failures are swallowed and retried; only the last one is
/// reported once the attempt bound is exhausted.
#[derive(Debug)]
pub enum ExtractError {
    AttemptsExhausted {
        attempts: usize,
        last_failure: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::AttemptsExhausted {
                attempts,
                last_failure,
            } => {
                write!(
                    f,
                    "no parseable JSON object after {} attempts (last failure: {})",
                    attempts, last_failure
                )
            }
        }
    }
}

impl std::error::Error for ExtractError {}
