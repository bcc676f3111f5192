//! Azure OpenAI client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::config::AzureOpenAiConfig;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};
use crate::error::AetherError;
use crate::traits::ChatCapability;
use crate::types::{ChatMessage, ChatResponse, ResolvedClientParams};
use crate::utils::http_headers::ProviderHeaders;

/// Client for Azure OpenAI chat completions.
///
/// The same client serves both routing paths: in enterprise mode the endpoint
/// is the gateway ingress and the key is the gateway credential, in direct
/// mode they are the Azure resource's own values. The client cannot tell the
/// difference, which is the point.
#[derive(Debug, Clone)]
pub struct AzureOpenAiClient {
    config: AzureOpenAiConfig,
    http_client: HttpClient,
}

impl AzureOpenAiClient {
    /// Create a client with a default HTTP client.
    pub fn new(config: AzureOpenAiConfig) -> Result<Self, AetherError> {
        let timeout = Duration::from_secs(config.timeout.unwrap_or(30));
        let http_client = HttpClient::builder().timeout(timeout).build().map_err(|e| {
            AetherError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
        })?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client with a caller-supplied HTTP client.
    pub fn with_http_client(
        config: AzureOpenAiConfig,
        http_client: HttpClient,
    ) -> Result<Self, AetherError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Build a client straight from resolved routing parameters.
    pub fn from_resolved(
        params: &ResolvedClientParams,
        api_version: Option<&str>,
    ) -> Result<Self, AetherError> {
        let mut config = AzureOpenAiConfig::from_resolved(params);
        if let Some(version) = api_version {
            config = config.with_api_version(version);
        }
        Self::new(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment.trim(),
            self.config.api_version.trim()
        )
    }

    async fn error_from_response(response: reqwest::Response) -> AetherError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
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
impl ChatCapability for AzureOpenAiClient {
    fn provider_id(&self) -> &'static str {
        "azure-openai"
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, AetherError> {
        let request = ChatCompletionRequest {
            model: self.config.deployment.clone(),
            messages,
            temperature: None,
            max_tokens: None,
        };
        let url = self.chat_url();
        let headers = ProviderHeaders::azure(&self.config.api_key)?;

        tracing::debug!(deployment = %self.config.deployment, "sending Azure OpenAI chat completion");
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

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            AetherError::ParseError(format!("Invalid chat completion response: {e}"))
        })?;

        let choice = body.choices.into_iter().next().ok_or_else(|| {
            AetherError::ParseError("chat completion response contained no choices".to_string())
        })?;
        let content = choice.message.content.ok_or_else(|| {
            AetherError::ParseError("chat completion choice contained no content".to_string())
        })?;

        Ok(ChatResponse {
            content,
            model: body.model,
            usage: body.usage.map(Into::into),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_is_deployment_based_with_api_version() {
        let config = AzureOpenAiConfig::new("k")
            .with_endpoint("https://res.openai.azure.com/")
            .with_deployment("gpt-4o-mini")
            .with_api_version("2024-02-01");
        let client = AzureOpenAiClient::new(config).unwrap();
        assert_eq!(
            client.chat_url(),
            "https://res.openai.azure.com/openai/deployments/gpt-4o-mini/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn construction_fails_on_invalid_config_before_any_request() {
        let err = AzureOpenAiClient::new(AzureOpenAiConfig::new("k")).unwrap_err();
        assert!(matches!(err, AetherError::InvalidParameter(_)));
    }
}
