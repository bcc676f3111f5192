//! Azure OpenAI client configuration.

use crate::config::keys::DEFAULT_AZURE_API_VERSION;
use crate::error::AetherError;
use crate::types::ResolvedClientParams;

/// Configuration for Azure OpenAI deployment-based endpoints.
#[derive(Clone)]
pub struct AzureOpenAiConfig {
    pub api_key: String,
    /// Service base URL, typically `https://{resource}.openai.azure.com`
    /// or the gateway ingress in enterprise mode.
    pub endpoint: String,
    /// Deployment id used on each completion call.
    pub deployment: String,
    /// `api-version` query value.
    pub api_version: String,
    /// HTTP timeout in seconds for the default client.
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for AzureOpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiConfig")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AzureOpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: String::new(),
            deployment: String::new(),
            api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            timeout: Some(30),
        }
    }

    /// Adapter entry point: map the resolved triple onto this provider's
    /// constructor fields. endpoint -> service base URL, api_key -> key,
    /// model -> deployment id.
    pub fn from_resolved(params: &ResolvedClientParams) -> Self {
        Self::new(params.api_key.clone())
            .with_endpoint(params.endpoint.clone())
            .with_deployment(params.model.clone())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<(), AetherError> {
        if self.api_key.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Azure OpenAI api_key cannot be empty".to_string(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Azure OpenAI endpoint cannot be empty".to_string(),
            ));
        }
        if self.deployment.trim().is_empty() {
            return Err(AetherError::InvalidParameter(
                "Azure OpenAI deployment id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
