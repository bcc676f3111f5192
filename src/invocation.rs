//! Invocation Driver
//!
//! One example round trip: resolve client parameters, build the provider's
//! client, send a single prompt, hand back the raw response. No retries, no
//! batching, no conversation state; interactive callers run this once per
//! submitted prompt, re-resolving from current state each time.

use crate::error::AetherError;
use crate::providers;
use crate::routing;
use crate::types::{ChatMessage, ChatResponse, RoutingConfig};

/// Send one prompt along the configured routing path and return the reply.
pub async fn send_prompt(
    config: &RoutingConfig,
    prompt: &str,
) -> Result<ChatResponse, AetherError> {
    if prompt.trim().is_empty() {
        return Err(AetherError::InvalidParameter(
            "prompt cannot be empty".to_string(),
        ));
    }

    let params = routing::resolve(config, config.provider)?;
    let client = providers::build_client(config, &params)?;

    tracing::info!(
        provider = client.provider_id(),
        mode = %config.mode,
        "dispatching prompt"
    );
    client.chat(vec![ChatMessage::user(prompt)]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProviderKind, RoutingMode};

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_resolution() {
        let config = RoutingConfig::new(ProviderKind::Gemini, "gemini-1.5-flash");
        let err = send_prompt(&config, "   ").await.unwrap_err();
        assert!(matches!(err, AetherError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_any_network_call() {
        let config = RoutingConfig::new(ProviderKind::Gemini, "gemini-1.5-flash")
            .with_mode(RoutingMode::Enterprise);
        let err = send_prompt(&config, "hello").await.unwrap_err();
        assert!(matches!(err, AetherError::MissingCredential(_)));
    }
}
