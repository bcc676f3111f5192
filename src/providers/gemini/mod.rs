//! Gemini provider adapter.
//!
//! Speaks the generateContent contract of the Google Gemini API:
//! `{base}/models/{model}:generateContent` with the `x-goog-api-key` header.
//! The base URL override is how the gateway slots in front of the vendor.

mod client;
mod config;
pub mod types;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, GeminiConfig};
