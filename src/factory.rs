//! Provider selection and construction.
//!
//! Selection happens once, at startup, from an immutable [`LlmConfig`]. The
//! returned boxed capability is the single provider bound for the rest of the
//! process; nothing here reselects dynamically.

use crate::config::{LlmConfig, ProviderType};
use crate::error::LlmError;
use crate::providers::{FakeProvider, GeminiConfig, GeminiProvider, OpenAiConfig, OpenAiProvider};
use crate::traits::AskCapability;

/// Environment variable holding the OpenAI credential.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable holding the Gemini credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Build the provider named by `config`.
///
/// Credentials are read here, once, and injected into the adapter's
/// configuration; the adapters themselves never touch the environment. A
/// missing key for a selected vendor is a [`LlmError::ConfigurationError`].
/// Unknown provider names never reach this function: [`ProviderType`] maps
/// them to the fake provider at parse time.
pub fn build_provider(
    config: &LlmConfig,
    http_client: reqwest::Client,
) -> Result<Box<dyn AskCapability>, LlmError> {
    let provider: Box<dyn AskCapability> = match config.provider {
        ProviderType::Fake => Box::new(FakeProvider::new()),
        ProviderType::OpenAi => {
            let api_key = require_env(OPENAI_API_KEY_ENV, &config.provider)?;
            let openai_config = OpenAiConfig::new(api_key).with_model(config.model.clone());
            Box::new(OpenAiProvider::new(openai_config, http_client))
        }
        ProviderType::Gemini => {
            let api_key = require_env(GEMINI_API_KEY_ENV, &config.provider)?;
            let gemini_config = GeminiConfig::new(api_key).with_model(config.model.clone());
            Box::new(GeminiProvider::new(gemini_config, http_client))
        }
    };
    tracing::debug!(provider = %config.provider, model = %config.model, "provider bound");
    Ok(provider)
}

/// Load the configuration from the environment and build the provider it names.
pub fn build_from_env(http_client: reqwest::Client) -> Result<Box<dyn AskCapability>, LlmError> {
    build_provider(&LlmConfig::from_env(), http_client)
}

fn require_env(env_key: &str, provider: &ProviderType) -> Result<String, LlmError> {
    std::env::var(env_key).map_err(|_| {
        LlmError::ConfigurationError(format!("Missing {env_key} for provider {provider}"))
    })
}
