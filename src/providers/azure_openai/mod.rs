//! Azure OpenAI provider adapter.
//!
//! Speaks the chat-completions contract of Azure OpenAI's deployment-based
//! endpoints: `{endpoint}/openai/deployments/{deployment}/chat/completions`
//! with an `api-version` query parameter and the `api-key` header.

mod client;
mod config;
pub mod types;

pub use client::AzureOpenAiClient;
pub use config::AzureOpenAiConfig;
