//! Common imports for typical usage.
//!
//! ```rust,no_run
//! use aether_connect::prelude::*;
//! ```

pub use crate::config::ConfigResolver;
pub use crate::error::AetherError;
pub use crate::invocation::send_prompt;
pub use crate::providers::build_client;
pub use crate::routing::resolve;
pub use crate::traits::ChatCapability;
pub use crate::types::{
    ChatMessage, ChatResponse, MessageRole, ProviderKind, ResolvedClientParams, RoutingConfig,
    RoutingMode, Usage,
};
