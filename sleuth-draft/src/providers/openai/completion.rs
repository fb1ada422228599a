//! OpenAI draft provider implementation

use async_trait::async_trait;
use secrecy::SecretString;
use sleuth_core::{DraftPrompt, SleuthResult};

use super::client::OpenAiClient;
use super::types::{CompletionRequest, CompletionResponse, Message};
use crate::providers::invalid_response;
use crate::DraftProvider;

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// System prompt framing every draft request.
const SYSTEM_PROMPT: &str = "You are a professional LinkedIn content creator.";

/// OpenAI-backed draft provider using chat completions.
pub struct OpenAiDraftProvider {
    client: OpenAiClient,
    model: String,
}

impl OpenAiDraftProvider {
    /// Create a new OpenAI draft provider.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `model` - Model name (e.g. "gpt-3.5-turbo", "gpt-4o-mini")
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            client: OpenAiClient::new(api_key, 60),
            model: model.into(),
        }
    }

    /// Create a provider with the default model.
    pub fn with_default_model(api_key: SecretString) -> Self {
        Self::new(api_key, DEFAULT_MODEL)
    }
}

#[async_trait]
impl DraftProvider for OpenAiDraftProvider {
    async fn draft(&self, prompt: &DraftPrompt) -> SleuthResult<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.context_prompt(),
                },
            ],
            max_tokens: Some(500),
            temperature: Some(0.7),
        };

        let response: CompletionResponse = self.client.request("chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| invalid_response("openai", "No completion in response"))
    }

    fn provider_id(&self) -> &str {
        "openai"
    }
}

impl std::fmt::Debug for OpenAiDraftProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiDraftProvider")
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_leaks_the_key() {
        let provider =
            OpenAiDraftProvider::with_default_model(SecretString::from("sk-secret".to_string()));
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains(DEFAULT_MODEL));
    }
}
