//! Provider Adapters
//!
//! One submodule per supported provider, each knowing the shape of that
//! provider's client construction: which field is the endpoint, which is the
//! key, and what the model id is called on the wire. Adapter selection is a
//! closed-set match on [`ProviderKind`]; there is no runtime type inspection.

pub mod azure_openai;
pub mod gemini;

use crate::error::AetherError;
use crate::traits::ChatCapability;
use crate::types::{ProviderKind, ResolvedClientParams, RoutingConfig};

/// Build the client for the configured provider from resolved parameters.
///
/// The caller resolves first and injects the result here; nothing is read
/// from global state and no existing client is mutated in place.
pub fn build_client(
    config: &RoutingConfig,
    params: &ResolvedClientParams,
) -> Result<Box<dyn ChatCapability>, AetherError> {
    match config.provider {
        ProviderKind::AzureOpenAi => Ok(Box::new(
            azure_openai::AzureOpenAiClient::from_resolved(
                params,
                config.azure_api_version.as_deref(),
            )?,
        )),
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiClient::from_resolved(params)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RoutingConfig, RoutingMode};

    #[test]
    fn build_client_dispatches_on_the_provider_tag() {
        let params = ResolvedClientParams {
            endpoint: "https://gw.example".to_string(),
            api_key: "gk".to_string(),
            model: "gpt-4o-mini".to_string(),
        };

        let config = RoutingConfig::new(ProviderKind::AzureOpenAi, "gpt-4o-mini")
            .with_mode(RoutingMode::Enterprise)
            .with_gateway_credentials("gk", "https://gw.example");
        let client = build_client(&config, &params).unwrap();
        assert_eq!(client.provider_id(), "azure-openai");

        let config = RoutingConfig {
            provider: ProviderKind::Gemini,
            ..config
        };
        let client = build_client(&config, &params).unwrap();
        assert_eq!(client.provider_id(), "google-generativeai");
    }
}
