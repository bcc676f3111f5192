//! Core Types
//!
//! Routing configuration, resolved client parameters, and the minimal chat
//! surface shared by both provider clients.

use serde::{Deserialize, Serialize};

/// Which path an invocation takes to reach the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    /// Calls go to the Aether gateway, which applies policy and forwards
    /// upstream. The gateway is a single ingress for every provider.
    Enterprise,
    /// Calls bypass the gateway and hit the vendor endpoint with the
    /// vendor's own credentials.
    Direct,
}

impl std::fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enterprise => write!(f, "enterprise"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Supported LLM providers. Closed set; adapter dispatch matches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    AzureOpenAi,
    Gemini,
}

impl ProviderKind {
    /// Stable provider id, matching the ids used in configuration and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AzureOpenAi => "azure-openai",
            Self::Gemini => "google-generativeai",
        }
    }

    /// Vendor default base URL for direct calls, when the provider has one.
    ///
    /// Azure OpenAI endpoints are per-resource, so there is no usable default;
    /// Gemini has a public API endpoint.
    pub const fn default_endpoint(&self) -> Option<&'static str> {
        match self {
            Self::AzureOpenAi => None,
            Self::Gemini => Some(crate::providers::gemini::DEFAULT_BASE_URL),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = crate::error::AetherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" | "azure-openai" | "azure_openai" => Ok(Self::AzureOpenAi),
            "gemini" | "google" | "google-generativeai" => Ok(Self::Gemini),
            other => Err(crate::error::AetherError::InvalidParameter(format!(
                "Unknown provider: {other} (expected azure-openai or google-generativeai)"
            ))),
        }
    }
}

/// Immutable routing configuration for one session or one interactive turn.
///
/// Constructed by the [`ConfigResolver`](crate::config::ConfigResolver) in the
/// normal case; interactive drivers may build it directly from live widget
/// state, which is why the shim re-validates the branch it selects.
#[derive(Clone)]
pub struct RoutingConfig {
    pub mode: RoutingMode,
    pub provider: ProviderKind,
    pub gateway_api_key: Option<String>,
    pub gateway_endpoint: Option<String>,
    pub provider_api_key: Option<String>,
    pub provider_endpoint: Option<String>,
    /// Azure OpenAI api-version query value. Shapes the Azure URL only;
    /// never touched by the shim.
    pub azure_api_version: Option<String>,
    /// Logical model/deployment id. Passed through unchanged in every mode.
    pub model: String,
}

impl std::fmt::Debug for RoutingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingConfig")
            .field("mode", &self.mode)
            .field("provider", &self.provider)
            .field("gateway_api_key", &self.gateway_api_key.as_ref().map(|_| "***"))
            .field("gateway_endpoint", &self.gateway_endpoint)
            .field("provider_api_key", &self.provider_api_key.as_ref().map(|_| "***"))
            .field("provider_endpoint", &self.provider_endpoint)
            .field("azure_api_version", &self.azure_api_version)
            .field("model", &self.model)
            .finish()
    }
}

impl RoutingConfig {
    /// Create a direct-mode configuration for the given provider and model.
    pub fn new(provider: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            mode: RoutingMode::Direct,
            provider,
            gateway_api_key: None,
            gateway_endpoint: None,
            provider_api_key: None,
            provider_endpoint: None,
            azure_api_version: None,
            model: model.into(),
        }
    }

    pub const fn with_mode(mut self, mode: RoutingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set both gateway values. Presence of this pair is what opts a session
    /// into enterprise routing.
    pub fn with_gateway_credentials(
        mut self,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        self.gateway_api_key = Some(api_key.into());
        self.gateway_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_provider_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.provider_api_key = Some(api_key.into());
        self
    }

    pub fn with_provider_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.provider_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_azure_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.azure_api_version = Some(api_version.into());
        self
    }

    /// Check the per-mode invariants: enterprise needs both gateway values,
    /// direct needs the provider's own credentials, and the model id is
    /// required in every mode.
    pub fn validate(&self) -> Result<(), crate::error::AetherError> {
        use crate::error::AetherError;

        if self.model.trim().is_empty() {
            return Err(AetherError::ConfigurationError(
                "model or deployment id cannot be empty".to_string(),
            ));
        }

        match self.mode {
            RoutingMode::Enterprise => {
                if !is_present(&self.gateway_api_key) || !is_present(&self.gateway_endpoint) {
                    return Err(AetherError::ConfigurationError(
                        "enterprise mode requires both a gateway API key and a gateway endpoint"
                            .to_string(),
                    ));
                }
            }
            RoutingMode::Direct => {
                if !is_present(&self.provider_api_key) {
                    return Err(AetherError::ConfigurationError(format!(
                        "direct mode requires an API key for {}",
                        self.provider
                    )));
                }
                if self.provider == ProviderKind::AzureOpenAi
                    && !is_present(&self.provider_endpoint)
                {
                    return Err(AetherError::ConfigurationError(
                        "direct mode requires an endpoint for azure-openai".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// The endpoint/credential/model triple handed to a provider adapter.
///
/// Derived per invocation by [`routing::resolve`](crate::routing::resolve),
/// used once to build a client, then discarded.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedClientParams {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for ResolvedClientParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedClientParams")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("model", &self.model)
            .finish()
    }
}

/// Message role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Token accounting reported by the provider, when available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// Provider-neutral response from one chat round trip.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub model: Option<String>,
    pub usage: Option<Usage>,
    pub finish_reason: Option<String>,
}
