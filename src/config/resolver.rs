//! Configuration resolver.
//!
//! Resolution is a pure function of the captured mapping: the resolver never
//! mutates the process environment, and resolving twice from the same values
//! yields the same `RoutingConfig`.

use std::collections::HashMap;

use crate::config::keys;
use crate::error::AetherError;
use crate::types::{ProviderKind, RoutingConfig, RoutingMode};

/// Resolves a [`RoutingConfig`] from environment-style key/value input.
///
/// Mode is determined by presence: when both gateway values are set and
/// non-blank the session is governed (enterprise), otherwise it is direct.
/// Interactive drivers can force a mode with [`with_mode`](Self::with_mode),
/// mirroring a user-facing enterprise toggle; forcing enterprise without
/// gateway values is a configuration error rather than a silent fallback.
///
/// # Example
/// ```rust,no_run
/// use aether_connect::config::ConfigResolver;
/// use aether_connect::types::ProviderKind;
///
/// let config = ConfigResolver::from_env().resolve(ProviderKind::AzureOpenAi)?;
/// # Ok::<(), aether_connect::AetherError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    vars: HashMap<String, String>,
    mode_override: Option<RoutingMode>,
}

impl ConfigResolver {
    /// Capture a snapshot of the process environment.
    pub fn from_env() -> Self {
        Self::from_map(std::env::vars().collect())
    }

    /// Resolve from an explicit mapping; nothing global is consulted.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            mode_override: None,
        }
    }

    /// Force the routing mode instead of deriving it from key presence.
    pub const fn with_mode(mut self, mode: RoutingMode) -> Self {
        self.mode_override = Some(mode);
        self
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Produce the routing configuration for the selected provider.
    pub fn resolve(&self, provider: ProviderKind) -> Result<RoutingConfig, AetherError> {
        let gateway_api_key = self.get(keys::AETHER_API_KEY);
        let gateway_endpoint = self.get(keys::AETHER_PROXY_ENDPOINT);
        let gateway_present = gateway_api_key.is_some() && gateway_endpoint.is_some();

        let mode = match self.mode_override {
            Some(RoutingMode::Enterprise) if !gateway_present => {
                return Err(AetherError::ConfigurationError(format!(
                    "enterprise mode requested but {} and {} are not both set",
                    keys::AETHER_API_KEY,
                    keys::AETHER_PROXY_ENDPOINT
                )));
            }
            Some(mode) => mode,
            // Governance opts in by presence of the gateway pair.
            None if gateway_present => RoutingMode::Enterprise,
            None => RoutingMode::Direct,
        };

        let (model_key, provider_api_key, provider_endpoint) = match provider {
            ProviderKind::AzureOpenAi => (
                keys::AZURE_PROVIDER_MODEL,
                self.get(keys::AZURE_API_KEY),
                self.get(keys::AZURE_ENDPOINT),
            ),
            ProviderKind::Gemini => (keys::GOOGLE_PROVIDER_MODEL, self.get(keys::GOOGLE_API_KEY), None),
        };

        let model = self.get(model_key).ok_or_else(|| {
            AetherError::ConfigurationError(format!("{model_key} must be set"))
        })?;

        if mode == RoutingMode::Direct {
            if provider_api_key.is_none() {
                let key = match provider {
                    ProviderKind::AzureOpenAi => keys::AZURE_API_KEY,
                    ProviderKind::Gemini => keys::GOOGLE_API_KEY,
                };
                return Err(AetherError::ConfigurationError(format!(
                    "{key} must be set for direct calls to {provider}"
                )));
            }
            if provider == ProviderKind::AzureOpenAi && provider_endpoint.is_none() {
                return Err(AetherError::ConfigurationError(format!(
                    "{} must be set for direct calls to {provider}",
                    keys::AZURE_ENDPOINT
                )));
            }
        }

        let config = RoutingConfig {
            mode,
            provider,
            gateway_api_key,
            gateway_endpoint,
            provider_api_key,
            provider_endpoint,
            azure_api_version: self.get(keys::AZURE_OPENAI_API_VERSION),
            model,
        };
        config.validate()?;

        tracing::debug!(
            mode = %config.mode,
            provider = %config.provider,
            model = %config.model,
            "resolved routing configuration"
        );
        Ok(config)
    }
}
