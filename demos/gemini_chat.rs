//! One Gemini round trip through the configured routing path.
//!
//! With `AETHER_API_KEY` and `AETHER_PROXY_ENDPOINT` set, the call goes
//! through the gateway; otherwise it goes directly to the Gemini API with
//! `GOOGLE_API_KEY`. `GOOGLE_PROVIDER_MODEL` names the model in both cases.

use aether_connect::prelude::*;
use aether_connect::providers::gemini::{GeminiClient, GeminiConfig};
use aether_connect::providers::gemini::types::GenerationConfig;
use aether_connect::routing;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ConfigResolver::from_env().resolve(ProviderKind::Gemini)?;
    let params = routing::resolve(&config, ProviderKind::Gemini)?;

    // Adapter construction spelled out, with an explicit generation config.
    let client = GeminiClient::new(
        GeminiConfig::from_resolved(&params)
            .with_generation_config(GenerationConfig::new().with_temperature(1.0)),
    )?;

    let response = client
        .chat(vec![ChatMessage::user("Hi! Tell me about yourself.")])
        .await?;
    println!("{}", response.content);

    Ok(())
}
