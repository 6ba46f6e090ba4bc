//! Process-level provider configuration.
//!
//! The provider and model are read from the environment once at startup and
//! treated as immutable for the lifetime of the process. Absent variables
//! fall back to defaults; nothing here ever fails.

use serde::{Deserialize, Serialize};

/// Environment variable naming the provider to bind.
pub const LLM_PROVIDER_ENV: &str = "LLM_PROVIDER";
/// Environment variable naming the model passed to the vendor call.
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";

/// Supported provider backends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderType {
    Fake,
    OpenAi,
    Gemini,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fake => write!(f, "fake"),
            Self::OpenAi => write!(f, "openai"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

impl ProviderType {
    /// Construct a ProviderType from a provider name string.
    ///
    /// Matching is exact: `"openai"` and `"gemini"` select their backends,
    /// every other value (including the empty string) selects the fake
    /// provider. Unknown names are not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "openai" => Self::OpenAi,
            "gemini" => Self::Gemini,
            _ => Self::Fake,
        }
    }
}

/// Immutable provider selection for the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Which backend answers questions
    pub provider: ProviderType,
    /// Model identifier forwarded to the vendor call
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::Fake,
            model: String::new(),
        }
    }
}

impl LlmConfig {
    /// Load the configuration from `LLM_PROVIDER` and `LLM_MODEL`.
    ///
    /// Missing variables silently fall back to the fake provider and the
    /// empty model name.
    pub fn from_env() -> Self {
        let provider = std::env::var(LLM_PROVIDER_ENV)
            .map(|name| ProviderType::from_name(&name))
            .unwrap_or(ProviderType::Fake);
        let model = std::env::var(LLM_MODEL_ENV).unwrap_or_default();
        Self { provider, model }
    }
}
