//! OpenAI provider adapter.
//!
//! Sends a fixed system prompt plus the user's question to the Chat
//! Completions API and returns the first choice's text.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::traits::AskCapability;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// OpenAI-specific configuration parameters
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication
    pub api_key: SecretString,
    /// Base URL for the OpenAI API
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// HTTP timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: String::new(),
            temperature: 0.7,
            timeout: Some(30),
        }
    }
}

impl OpenAiConfig {
    /// Create a new OpenAI configuration with the given API key
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

    /// Set the sampling temperature
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set HTTP timeout in seconds
    pub const fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// OpenAI-backed ask provider
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider from a configuration and a shared HTTP client
    pub fn new(config: OpenAiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LlmError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!(
                "Bearer {}",
                self.config.api_key.expose_secret()
            ))
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
impl AskCapability for OpenAiProvider {
    async fn ask(&self, question: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatRequestMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: self.config.temperature,
        };

        tracing::debug!(target: "askgate::openai", url = %url, model = %self.config.model, "sending chat completion request");

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
            tracing::warn!(target: "askgate::openai", status = status.as_u16(), body = %error_text, "chat completion request failed");
            return Err(classify_http_error(status.as_u16(), &error_text));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::ParseError("No text in chat completion response".to_string()))
    }
}

/// Classify an OpenAI HTTP error by parsing the standard error envelope.
///
/// OpenAI-style APIs return `{ "error": { "message": "...", "type": "...",
/// "code": "..." } }`. Bodies that don't match the envelope fall back to a
/// generic `ApiError` carrying the raw text.
fn classify_http_error(status: u16, body_text: &str) -> LlmError {
    let Some(error_obj) = serde_json::from_str::<serde_json::Value>(body_text)
        .ok()
        .and_then(|json| json.get("error").cloned())
    else {
        return LlmError::ApiError {
            code: status,
            message: format!("OpenAI API error: {body_text}"),
            details: None,
        };
    };

    let message = error_obj
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string();
    let error_type = error_obj.get("type").and_then(|v| v.as_str()).unwrap_or("");

    // Prefer the structured `type`, otherwise fall back to status heuristics.
    match error_type {
        "authentication_error" => LlmError::AuthenticationError(message),
        "rate_limit_error" => LlmError::RateLimitError(message),
        "insufficient_quota" => LlmError::QuotaExceededError(message),
        "not_found_error" => LlmError::NotFound(message),
        "invalid_request_error" => LlmError::InvalidInput(message),
        _ => match status {
            401 => LlmError::AuthenticationError(message),
            429 => LlmError::RateLimitError(message),
            404 => LlmError::NotFound(message),
            400 => LlmError::InvalidInput(message),
            _ => LlmError::ApiError {
                code: status,
                message: format!("OpenAI API error: {message}"),
                details: Some(error_obj),
            },
        },
    }
}
