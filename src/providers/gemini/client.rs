//! Gemini client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::config::GeminiConfig;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GeminiErrorResponse, Part,
};
use crate::error::AetherError;
use crate::traits::ChatCapability;
use crate::types::{ChatMessage, ChatResponse, MessageRole, ResolvedClientParams};
use crate::utils::http_headers::ProviderHeaders;
use crate::utils::url::join_url;

/// Client for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: HttpClient,
}

impl GeminiClient {
    /// Create a client with a default HTTP client.
    pub fn new(config: GeminiConfig) -> Result<Self, AetherError> {
        let timeout = Duration::from_secs(config.timeout.unwrap_or(30));
        let http_client = HttpClient::builder().timeout(timeout).build().map_err(|e| {
            AetherError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
        })?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client with a caller-supplied HTTP client.
    pub fn with_http_client(
        config: GeminiConfig,
        http_client: HttpClient,
    ) -> Result<Self, AetherError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Build a client straight from resolved routing parameters.
    pub fn from_resolved(params: &ResolvedClientParams) -> Result<Self, AetherError> {
        Self::new(GeminiConfig::from_resolved(params))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn generate_url(&self) -> String {
        join_url(
            &self.config.base_url,
            &format!("models/{}:generateContent", self.config.model.trim()),
        )
    }

    /// Gemini has no system role; system messages are folded into the user
    /// turn the way the REST docs suggest for single-turn requests.
    fn build_contents(messages: &[ChatMessage]) -> Vec<Content> {
        let mut contents = Vec::with_capacity(messages.len());
        for message in messages {
            let role = match message.role {
                MessageRole::Assistant => Some("model".to_string()),
                MessageRole::User | MessageRole::System => Some("user".to_string()),
            };
            contents.push(Content {
                role,
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            });
        }
        contents
    }

    async fn error_from_response(response: reqwest::Response) -> AetherError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GeminiErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.clone());

        match status {
            401 | 403 => AetherError::AuthenticationError(message),
            429 => AetherError::RateLimitError(message),
            _ => AetherError::ApiError {
                code: status,
                message,
                details: serde_json::from_str(&body).ok(),
            },
        }
    }
}

#[async_trait]
impl ChatCapability for GeminiClient {
    fn provider_id(&self) -> &'static str {
        "google-generativeai"
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, AetherError> {
        let request = GenerateContentRequest {
            contents: Self::build_contents(&messages),
            generation_config: self.config.generation_config.clone(),
        };
        let url = self.generate_url();
        let headers = ProviderHeaders::gemini(&self.config.api_key)?;

        tracing::debug!(model = %self.config.model, "sending Gemini generateContent");
        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            AetherError::ParseError(format!("Invalid generateContent response: {e}"))
        })?;

        let candidate = body.candidates.into_iter().next().ok_or_else(|| {
            AetherError::ParseError("generateContent response contained no candidates".to_string())
        })?;
        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                AetherError::ParseError("generateContent candidate contained no text".to_string())
            })?;

        Ok(ChatResponse {
            content,
            model: body.model_version,
            usage: body.usage_metadata.map(Into::into),
            finish_reason: candidate.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_joins_base_and_model() {
        let config = GeminiConfig::new("k")
            .with_base_url("https://gw.example/")
            .with_model("gemini-1.5-flash");
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://gw.example/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn assistant_messages_map_to_the_model_role() {
        let contents = GeminiClient::build_contents(&[
            ChatMessage::system("be brief"),
            ChatMessage::assistant("ok"),
        ]);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }
}
