//! One Azure OpenAI round trip through the configured routing path.
//!
//! With `AETHER_API_KEY` and `AETHER_PROXY_ENDPOINT` set, the call goes
//! through the gateway; otherwise it goes directly to the Azure resource
//! named by `AZURE_API_KEY` / `AZURE_ENDPOINT`. `AZURE_PROVIDER_MODEL`
//! names the deployment in both cases.

use aether_connect::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ConfigResolver::from_env().resolve(ProviderKind::AzureOpenAi)?;

    let response = send_prompt(&config, "Hi! Tell me about yourself.").await?;
    println!("{}", response.content);

    Ok(())
}
