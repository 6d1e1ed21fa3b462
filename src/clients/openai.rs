//! OpenAI API client module
//!
//! Encapsulates chat completion, image generation, and image download.
//! Prompt construction uses the openai-api-rs message types; the REST calls
//! go through reqwest against a configurable base URL.

use openai_api_rs::v1::chat_completion::ChatCompletionMessage;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::BotError;

const OPENAI_API_BASE: &str = "https://api.openai.com";

/// Default chat model, overridable via `OPENAI_MODEL`.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const IMAGE_MODEL: &str = "dall-e-3";

/// One image descriptor returned by the generation endpoint.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: OPENAI_API_BASE.to_string(),
            model: model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
        }
    }

    /// Point the client at a different API origin (used by tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run a chat completion and return the first choice's content.
    ///
    /// An empty `choices` array is a distinguished error condition rather
    /// than an empty reply.
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatCompletionMessage>,
    ) -> Result<String, BotError> {
        info!("Chat completion with {} messages", messages.len());

        let request_body = json!({
            "model": self.model,
            "messages": messages,
        });

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| BotError::OpenAIError(format!("Failed to parse OpenAI response: {e}")))?;

        let choices = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                BotError::OpenAIError("No choices returned from OpenAI API".to_string())
            })?;

        Ok(choices[0]
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string())
    }

    /// Generate one image; `Ok(None)` means the provider returned no
    /// image descriptors.
    pub async fn generate_image(
        &self,
        prompt: &str,
        size: &str,
        quality: &str,
    ) -> Result<Option<GeneratedImage>, BotError> {
        let request_body = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": size,
            "quality": quality,
        });

        let response = self
            .http
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| BotError::OpenAIError(format!("Failed to parse OpenAI response: {e}")))?;

        let Some(first) = response_json
            .get("data")
            .and_then(|d| d.as_array())
            .and_then(|d| d.first())
        else {
            return Ok(None);
        };

        let url = first
            .get("url")
            .and_then(|u| u.as_str())
            .ok_or_else(|| BotError::OpenAIError("Image descriptor missing URL".to_string()))?
            .to_string();

        Ok(Some(GeneratedImage {
            url,
            revised_prompt: first
                .get("revised_prompt")
                .and_then(|p| p.as_str())
                .map(ToString::to_string),
        }))
    }

    /// Fetch the generated image bytes from the provider-hosted URL.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>, BotError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("Image download failed: {e}")))?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

async fn upstream_error(response: reqwest::Response) -> BotError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read error body: {e}>"));
    BotError::UpstreamStatus {
        status: status.as_u16(),
        body,
    }
}
