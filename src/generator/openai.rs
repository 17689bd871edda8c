//! OpenAI chat completion generator.

use super::{build_prompt, ContentGenerator};
use crate::config::LlmSettings;
use crate::error::{NotesError, Result};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Generates text through the OpenAI chat completions API.
pub struct OpenAIGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAIGenerator {
    /// Create a generator for the configured model.
    pub fn new(api_key: &str, settings: &LlmSettings) -> Result<Self> {
        Ok(Self {
            client: create_client(api_key, settings)?,
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }
}

#[async_trait]
impl ContentGenerator for OpenAIGenerator {
    #[instrument(skip_all, fields(model = %self.model, body_len = body.len()))]
    async fn generate(&self, body: &str, instruction: &str) -> Result<String> {
        let prompt = build_prompt(body, instruction);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| NotesError::Generation(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| NotesError::Generation(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| NotesError::Generation(e.to_string()))?;

        let text = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| NotesError::Generation("Empty response from LLM".to_string()))?
            .clone();

        debug!("Generated {} characters", text.len());
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_configured_model() {
        let settings = LlmSettings {
            model: "gpt-4.1-mini".to_string(),
            ..LlmSettings::default()
        };
        let generator = OpenAIGenerator::new("sk-test", &settings).unwrap();
        assert_eq!(generator.model(), "gpt-4.1-mini");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            OpenAIGenerator::new("  ", &LlmSettings::default()),
            Err(NotesError::Config(_))
        ));
    }
}
