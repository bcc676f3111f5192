//! Provider-specific HTTP headers.
//!
//! Each provider authenticates with its own header; the gateway accepts the
//! same header the vendor SDK would send, so the header choice follows the
//! provider, not the routing mode.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::AetherError;

/// Builders for the header set each provider expects.
pub struct ProviderHeaders;

impl ProviderHeaders {
    /// Azure OpenAI: `api-key` header.
    pub fn azure(api_key: &str) -> Result<HeaderMap, AetherError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("api-key", header_value(api_key)?);
        Ok(headers)
    }

    /// Gemini: `x-goog-api-key` header.
    pub fn gemini(api_key: &str) -> Result<HeaderMap, AetherError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-goog-api-key", header_value(api_key)?);
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, AetherError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| AetherError::InvalidParameter("API key is not a valid header value".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
