//! Mock API tests for the Gemini path.
//!
//! Response fixtures follow the official generateContent reference:
//! https://ai.google.dev/api/generate-content

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aether_connect::prelude::*;
use aether_connect::providers::gemini::{GeminiClient, GeminiConfig};

fn generate_content_response() -> serde_json::Value {
    json!({
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "Hello! How can I help you today?"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP",
                "safetyRatings": [
                    {
                        "category": "HARM_CATEGORY_HATE_SPEECH",
                        "probability": "NEGLIGIBLE"
                    }
                ]
            }
        ],
        "usageMetadata": {
            "promptTokenCount": 5,
            "candidatesTokenCount": 10,
            "totalTokenCount": 15
        },
        "modelVersion": "gemini-1.5-flash",
        "responseId": "resp_abc123"
    })
}

fn auth_error_response() -> serde_json::Value {
    json!({
        "error": {
            "code": 401,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "UNAUTHENTICATED"
        }
    })
}

fn gateway_config(server: &MockServer) -> RoutingConfig {
    RoutingConfig::new(ProviderKind::Gemini, "gemini-1.5-flash")
        .with_mode(RoutingMode::Enterprise)
        .with_gateway_credentials("gk", server.uri())
}

/// The client posts to `models/{model}:generateContent` under the gateway
/// base URL with the gateway key in `x-goog-api-key`.
#[tokio::test]
async fn gateway_routed_generate_content_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "gk"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hi! Tell me about yourself."}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response()))
        .expect(1)
        .mount(&server)
        .await;

    let response = send_prompt(&gateway_config(&server), "Hi! Tell me about yourself.")
        .await
        .unwrap();

    assert_eq!(response.content, "Hello! How can I help you today?");
    assert_eq!(response.model.as_deref(), Some("gemini-1.5-flash"));
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, Some(15));
}

/// The default generation config configured on the client reaches the wire.
#[tokio::test]
async fn generation_config_is_serialized_in_camel_case() {
    use aether_connect::providers::gemini::types::GenerationConfig;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "generationConfig": {"temperature": 1.0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        GeminiConfig::new("pk")
            .with_base_url(server.uri())
            .with_model("gemini-1.5-flash")
            .with_generation_config(GenerationConfig::new().with_temperature(1.0)),
    )
    .unwrap();

    client
        .chat(vec![ChatMessage::user("hello")])
        .await
        .unwrap();
}

/// A 401 body maps to `AuthenticationError` with the provider's own message,
/// matching what the UI shows for a bad key.
#[tokio::test]
async fn auth_rejection_surfaces_the_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(401).set_body_json(auth_error_response()))
        .mount(&server)
        .await;

    let err = send_prompt(&gateway_config(&server), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, AetherError::AuthenticationError(_)));
    assert!(err.to_string().contains("API key not valid"));
}

/// 429 maps to the rate-limit variant so callers can distinguish throttling.
#[tokio::test]
async fn throttling_maps_to_rate_limit_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Resource has been exhausted.", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = send_prompt(&gateway_config(&server), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, AetherError::RateLimitError(_)));
    assert_eq!(err.status_code(), Some(429));
}

/// A candidate with no text is a parse error rather than an empty reply.
#[tokio::test]
async fn candidate_without_text_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let err = send_prompt(&gateway_config(&server), "hello")
        .await
        .unwrap_err();
    assert!(matches!(err, AetherError::ParseError(_)));
}
