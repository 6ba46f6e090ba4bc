//! Mock API tests for the Gemini provider.
//!
//! Response formats are based on Google's official Gemini API reference:
//! https://ai.google.dev/api/generate-content

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use askgate::prelude::*;
use askgate::providers::{GeminiConfig, GeminiProvider};

fn provider_for(server: &MockServer) -> GeminiProvider {
    let config = GeminiConfig::new("test-api-key")
        .with_base_url(server.uri())
        .with_model("gemini-1.5-flash");
    GeminiProvider::new(config, reqwest::Client::new())
}

fn generate_content_response() -> serde_json::Value {
    json!({
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "Cloud computing is using someone else's computers "},
                        {"text": "over the internet."}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP",
                "safetyRatings": []
            }
        ],
        "usageMetadata": {
            "promptTokenCount": 9,
            "candidatesTokenCount": 12,
            "totalTokenCount": 21
        },
        "modelVersion": "gemini-1.5-flash"
    })
}

#[tokio::test]
async fn ask_sends_question_as_content() {
    let mock_server = MockServer::start().await;

    // Gemini API path: /models/{model}:generateContent, keyed by the
    // x-goog-api-key header.
    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "What is cloud computing?"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_content_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let answer = provider_for(&mock_server)
        .ask("What is cloud computing?")
        .await
        .unwrap();
    assert_eq!(
        answer,
        "Cloud computing is using someone else's computers over the internet."
    );
}

#[tokio::test]
async fn invalid_key_maps_to_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "API_KEY_INVALID"
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .ask("anything")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidInput(_)));
}

#[tokio::test]
async fn failure_renders_as_error_text_through_ask_lossy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&mock_server)
        .await;

    let answer = provider_for(&mock_server).ask_lossy("anything").await;
    assert!(answer.starts_with("Error connecting to the API:"));
    assert!(answer.contains("Resource has been exhausted"));
}

#[tokio::test]
async fn candidate_without_text_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [], "role": "model"}, "finishReason": "STOP"}]
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .ask("anything")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::ParseError(_)));
}
