//! Redirection Shim
//!
//! The central decision point: given an immutable [`RoutingConfig`] and a
//! target provider, produce the endpoint/credential/model triple the
//! provider's client is built from.
//!
//! [`resolve`] is pure and deterministic — no hidden state, no randomness,
//! no network access. Identical inputs always yield identical output, so the
//! one policy decision with ambiguity risk (both credential sets populated)
//! is settled here, once: enterprise wins.

use crate::error::AetherError;
use crate::types::{ProviderKind, ResolvedClientParams, RoutingConfig, RoutingMode, is_present};

/// Resolve the concrete client parameters for one invocation.
///
/// - **Enterprise**: the gateway endpoint and gateway key, whatever the
///   provider — the gateway is a single uniform ingress, and the model id is
///   passed through unchanged so the gateway can route upstream by it.
/// - **Direct**: the provider's own endpoint and key, verbatim, so the client
///   behaves exactly as it would without the gateway. Gemini falls back to
///   the vendor's public base URL when no endpoint override is configured.
///
/// The branch selected by the mode is re-validated even though the resolver
/// normally checks it first: interactive callers may construct a
/// `RoutingConfig` directly from live widget state between resolver passes.
pub fn resolve(
    config: &RoutingConfig,
    provider: ProviderKind,
) -> Result<ResolvedClientParams, AetherError> {
    let model = config.model.trim();
    if model.is_empty() {
        return Err(AetherError::InvalidParameter(
            "model or deployment id is required".to_string(),
        ));
    }

    let (endpoint, api_key) = match config.mode {
        RoutingMode::Enterprise => {
            if !is_present(&config.gateway_api_key) || !is_present(&config.gateway_endpoint) {
                return Err(AetherError::MissingCredential(
                    "enterprise mode requires a gateway API key and a gateway endpoint"
                        .to_string(),
                ));
            }
            (
                config.gateway_endpoint.clone().unwrap_or_default(),
                config.gateway_api_key.clone().unwrap_or_default(),
            )
        }
        RoutingMode::Direct => {
            if !is_present(&config.provider_api_key) {
                return Err(AetherError::MissingCredential(format!(
                    "direct mode requires an API key for {provider}"
                )));
            }
            let endpoint = if is_present(&config.provider_endpoint) {
                config.provider_endpoint.clone().unwrap_or_default()
            } else {
                provider.default_endpoint().map(str::to_string).ok_or_else(|| {
                    AetherError::MissingCredential(format!(
                        "direct mode requires an endpoint for {provider}"
                    ))
                })?
            };
            (endpoint, config.provider_api_key.clone().unwrap_or_default())
        }
    };

    tracing::debug!(
        mode = %config.mode,
        provider = %provider,
        endpoint = %endpoint,
        model = %model,
        "resolved client parameters"
    );

    Ok(ResolvedClientParams {
        endpoint,
        api_key,
        model: model.to_string(),
    })
}
