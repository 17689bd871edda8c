//! OpenAI client configuration.

use crate::config::LlmSettings;
use crate::error::{NotesError, Result};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client with the given API key and the configured timeout.
pub fn create_client(api_key: &str, settings: &LlmSettings) -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(api_key, Duration::from_secs(settings.timeout_seconds))
}

/// Create an OpenAI client with a custom timeout.
pub fn create_client_with_timeout(
    api_key: &str,
    timeout: Duration,
) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    if api_key.trim().is_empty() {
        return Err(NotesError::Config("LLM API key is empty".to_string()));
    }

    let config = OpenAIConfig::new().with_api_key(api_key);
    Ok(Client::with_config(config).with_http_client(http_client))
}
