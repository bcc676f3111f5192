//! Environment key names consumed by the resolver.

/// Credential for the Aether gateway ingress.
pub const AETHER_API_KEY: &str = "AETHER_API_KEY";
/// Network address of the Aether gateway ingress.
pub const AETHER_PROXY_ENDPOINT: &str = "AETHER_PROXY_ENDPOINT";

/// Azure OpenAI vendor credential (direct mode).
pub const AZURE_API_KEY: &str = "AZURE_API_KEY";
/// Azure OpenAI resource endpoint (direct mode).
pub const AZURE_ENDPOINT: &str = "AZURE_ENDPOINT";
/// Azure OpenAI api-version query value.
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";
/// Azure deployment id, the logical model identifier.
pub const AZURE_PROVIDER_MODEL: &str = "AZURE_PROVIDER_MODEL";

/// Google vendor credential (direct mode).
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// Gemini model name, the logical model identifier.
pub const GOOGLE_PROVIDER_MODEL: &str = "GOOGLE_PROVIDER_MODEL";

/// Default Azure api-version when the environment does not set one.
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";
