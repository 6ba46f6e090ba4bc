//! # Askgate - a uniform ask-an-LLM interface
//!
//! Askgate binds one question-answering backend per process — OpenAI, Gemini,
//! or an offline fake — behind a single [`AskCapability`](traits::AskCapability)
//! trait, selected once at startup from environment configuration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use askgate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // LLM_PROVIDER selects the backend; anything unrecognized is the fake.
//!     let provider = askgate::factory::build_from_env(reqwest::Client::new())?;
//!     let answer = provider.ask("Hello, world!").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Vendor failures come back as structured [`LlmError`](error::LlmError)
//! values. Callers that want the legacy "never fails" surface can use
//! [`AskExtensions::ask_lossy`](traits::AskExtensions::ask_lossy), which
//! renders errors as `Error connecting to the API: <details>`.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod factory;
pub mod providers;
pub mod traits;

pub use config::{LlmConfig, ProviderType};
pub use error::LlmError;
pub use traits::{AskCapability, AskExtensions};

/// Convenient re-exports for typical callers
pub mod prelude {
    pub use crate::config::{LlmConfig, ProviderType};
    pub use crate::error::LlmError;
    pub use crate::factory::{build_from_env, build_provider};
    pub use crate::providers::{FakeProvider, GeminiProvider, OpenAiProvider};
    pub use crate::traits::{AskCapability, AskExtensions};
}
