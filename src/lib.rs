//! # Aether Connect - Gateway-Aware Routing for LLM Clients
//!
//! Aether Connect lets an LLM-based caller route its API traffic through the
//! Aether governance gateway without rewriting call sites: the endpoint and
//! credential swap to gateway-owned values while the logical model or
//! deployment name is preserved as a routing hint.
//!
//! The core is the **redirection shim** in [`routing`]: a pure function that
//! decides, from configuration alone, whether a client points at the gateway
//! (governed "enterprise" path) or directly at the vendor (ungoverned path),
//! and assembles the matching endpoint/credential pair for each supported
//! provider (Azure OpenAI, Google Gemini).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aether_connect::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Mode is decided by key presence: with AETHER_API_KEY and
//!     // AETHER_PROXY_ENDPOINT set, traffic is routed through the gateway.
//!     let config = ConfigResolver::from_env().resolve(ProviderKind::AzureOpenAi)?;
//!
//!     let response = send_prompt(&config, "Hi! Tell me about yourself.").await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Routing Rules
//!
//! - Enterprise mode opts in by presence of both gateway values; when both
//!   governed and direct credentials exist, the gateway wins.
//! - The model/deployment id is never substituted by the shim - it names the
//!   logical model, not the network target.
//! - Configuration and credential errors are distinguishable from provider
//!   errors, and fail before any network call is made.
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod invocation;
pub mod prelude;
pub mod providers;
pub mod routing;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::AetherError;
pub use types::{
    ChatMessage, ChatResponse, MessageRole, ProviderKind, ResolvedClientParams, RoutingConfig,
    RoutingMode, Usage,
};
