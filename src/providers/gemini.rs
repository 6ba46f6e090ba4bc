//! Gemini provider adapter.
//!
//! Sends the question as content to the `generateContent` endpoint and
//! returns the first candidate's text.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::traits::AskCapability;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini-specific configuration parameters
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication
    pub api_key: SecretString,
    /// Base URL for the Gemini API
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// HTTP timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: String::new(),
            timeout: Some(30),
        }
    }
}

impl GeminiConfig {
    /// Create a new Gemini configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set HTTP timeout in seconds
    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini-backed ask provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider from a configuration and a shared HTTP client
    pub fn new(config: GeminiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LlmError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            reqwest::header::HeaderValue::from_str(self.config.api_key.expose_secret())
                .map_err(|e| LlmError::InvalidInput(format!("Invalid API key: {e}")))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }
}

#[async_trait]
impl AskCapability for GeminiProvider {
    async fn ask(&self, question: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: question }],
            }],
        };

        tracing::debug!(target: "askgate::gemini", url = %url, model = %self.config.model, "sending generateContent request");

        let mut request = self
            .http_client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body);
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(target: "askgate::gemini", status = status.as_u16(), body = %error_text, "generateContent request failed");
            return Err(classify_http_error(status.as_u16(), &error_text));
        }

        let generated: GenerateContentResponse = response.json().await?;
        extract_text(generated)
    }
}

/// Concatenate the text parts of the first candidate, in order.
///
/// The official SDK's `response.text` accessor does the same.
fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::ParseError(
            "No text in generateContent response".to_string(),
        ));
    }
    Ok(text)
}

/// Classify a Gemini HTTP error by parsing the standard error envelope.
///
/// Gemini returns `{ "error": { "code": 401, "message": "...", "status":
/// "UNAUTHENTICATED" } }` where `status` is a gRPC canonical code name.
fn classify_http_error(status: u16, body_text: &str) -> LlmError {
    let Some(error_obj) = serde_json::from_str::<serde_json::Value>(body_text)
        .ok()
        .and_then(|json| json.get("error").cloned())
    else {
        return LlmError::ApiError {
            code: status,
            message: format!("Gemini API error: {body_text}"),
            details: None,
        };
    };

    let message = error_obj
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string();
    let grpc_status = error_obj
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    match grpc_status {
        "UNAUTHENTICATED" | "PERMISSION_DENIED" => LlmError::AuthenticationError(message),
        "RESOURCE_EXHAUSTED" => LlmError::RateLimitError(message),
        "NOT_FOUND" => LlmError::NotFound(message),
        "INVALID_ARGUMENT" | "FAILED_PRECONDITION" => LlmError::InvalidInput(message),
        _ => match status {
            401 | 403 => LlmError::AuthenticationError(message),
            429 => LlmError::RateLimitError(message),
            404 => LlmError::NotFound(message),
            400 => LlmError::InvalidInput(message),
            _ => LlmError::ApiError {
                code: status,
                message: format!("Gemini API error: {message}"),
                details: Some(error_obj),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::new("test-key").with_model("gemini-1.5-flash");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "gemini-1.5-flash");
    }

    #[test]
    fn extract_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hello, "}, {"text": "world."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello, world.");
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"candidates": []})).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn classify_unauthenticated() {
        let body = r#"{"error":{"code":401,"message":"API key not valid. Please pass a valid API key.","status":"UNAUTHENTICATED"}}"#;
        let err = classify_http_error(401, body);
        assert!(matches!(err, LlmError::AuthenticationError(_)));
    }

    #[test]
    fn classify_resource_exhausted() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = classify_http_error(429, body);
        assert!(matches!(err, LlmError::RateLimitError(_)));
    }

    #[test]
    fn classify_non_envelope_body() {
        let err = classify_http_error(500, "Internal Server Error");
        assert!(matches!(err, LlmError::ApiError { code: 500, .. }));
    }
}
