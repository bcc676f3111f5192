//! Gemini client configuration.

use super::types::GenerationConfig;
use crate::error::AetherError;
use crate::types::ResolvedClientParams;

/// Public Gemini API base URL, used for direct calls without an override.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Base URL for the Gemini API; the gateway ingress in enterprise mode.
    pub base_url: String,
    /// Model name used on each generation call.
    pub model: String,
    /// Default generation configuration applied to every request.
    pub generation_config: Option<GenerationConfig>,
    /// HTTP timeout in seconds for the default client.
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("generation_config", &self.generation_config)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: String::new(),
            generation_config: None,
            timeout: Some(30),
        }
    }

    /// Adapter entry point: endpoint -> base URL override, api_key -> key,
    /// model -> generation model name.
    pub fn from_resolved(params: &ResolvedClientParams) -> Self {
        Self::new(params.api_key.clone())
            .with_base_url(params.endpoint.clone())
            .with_model(params.model.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<(), AetherError> {
        if self.api_key.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Gemini api_key cannot be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Gemini base_url cannot be empty".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Gemini model cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
