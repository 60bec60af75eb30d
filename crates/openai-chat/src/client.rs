use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::ChatConfig;
use crate::error::Error;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| Error::InvalidApiKey(e.to_string()))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Sends the prompt and images as one user message and returns the text of the first choice.
    pub async fn complete(&self, images: &[String], prompt: &str) -> Result<String, Error> {
        let result = self.try_complete(images, prompt).await;

        match &result {
            Ok(content) => {
                tracing::info!(content_len = content.len(), "chat_completion_succeeded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat_completion_failed");
            }
        }

        result
    }

    async fn try_complete(&self, images: &[String], prompt: &str) -> Result<String, Error> {
        tracing::info!(prompt = %prompt, "chat_completion_prompt");
        for (i, image) in images.iter().enumerate() {
            tracing::info!(image = i + 1, base64_len = image.len(), "chat_completion_image");
        }

        let model = self.config.models.resolve(images.len());
        tracing::info!(model = %model, image_count = images.len(), "chat_completion_model_selected");

        let request = ChatCompletionRequest::build(model, prompt, images, self.config.max_tokens);
        let payload = serde_json::to_string(&request).map_err(Error::Encode)?;
        tracing::debug!(payload = %payload, "chat_completion_payload");

        let timeout = self.config.timeout;
        let body = tokio::time::timeout(timeout, self.send(payload))
            .await
            .map_err(|_| Error::Timeout(timeout))??;

        parse_completion(&body)
    }

    async fn send(&self, payload: String) -> Result<String, Error> {
        let response = self
            .http
            .post(self.config.completions_url())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(upstream_status = status, body = %body, "chat_completion_raw_response");

        if !(200..300).contains(&status) {
            tracing::warn!(upstream_status = status, "chat_completion_non_success_status");
        }

        Ok(body)
    }
}

/// Extracts the first choice's text from a raw chat-completion body.
pub fn parse_completion(body: &str) -> Result<String, Error> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(Error::Malformed)?;
    parsed.into_first_content().ok_or(Error::EmptyResponse)
}
