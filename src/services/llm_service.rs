//! Generative backend service
//!
//! Talks to any OpenAI-compatible chat-completion API via the `async-openai`
//! crate (Gemini's OpenAI endpoint, Azure, etc.). The `GenerativeBackend`
//! trait is the seam the extractor is tested through: production code plugs
//! in `LlmService`, tests plug in a scripted fake with no credentials.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;

/// A single text-completion call against an opaque remote service
///
/// The call may fail on network, auth, or quota problems, and the returned
/// text may carry code fences or surrounding prose despite instructions.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Production backend over an OpenAI-compatible API
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// Create a new LLM service from injected configuration
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }
}

#[async_trait]
impl GenerativeBackend for LlmService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("calling LLM API, model: {}", self.model_name);
        debug!("prompt length: {} chars", prompt.chars().count());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(0.2)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API call failed: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API call succeeded");

        let choice = response.choices.first().ok_or_else(|| LlmError::EmptyResponse {
            model: self.model_name.clone(),
        })?;

        let content = choice
            .message
            .content
            .clone()
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}
