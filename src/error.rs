//! Error types for askgate.
//!
//! Vendor call failures are surfaced as structured variants instead of being
//! folded into answer strings; callers decide how to render or propagate them.

use thiserror::Error;

/// Main error type for LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// HTTP transport error (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// API returned an error response
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message from the provider
        message: String,
        /// Raw error body when it parsed as JSON
        details: Option<serde_json::Value>,
    },

    /// Authentication or invalid-credential error
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Quota exhausted
    #[error("Quota exceeded: {0}")]
    QuotaExceededError(String),

    /// Model or endpoint not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the provider as invalid
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error (missing key, bad header value)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal library error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl LlmError {
    /// HTTP status code associated with this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}
