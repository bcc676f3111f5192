//! Capability Traits
//!
//! One capability is enough here: a synchronous-in-effect chat round trip.
//! Both provider clients implement it, and the adapter layer hands the
//! invocation driver a boxed `ChatCapability` so the driver never branches
//! on the provider itself.

use async_trait::async_trait;

use crate::error::AetherError;
use crate::types::{ChatMessage, ChatResponse};

/// A client that can perform one chat request against its endpoint.
#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Stable provider id for logs and error reporting.
    fn provider_id(&self) -> &'static str;

    /// Send the messages and return the provider's reply.
    ///
    /// One attempt, no retries; provider failures propagate unchanged.
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, AetherError>;
}
