//! Provider adapters.
//!
//! Each adapter translates the uniform [`AskCapability`](crate::traits::AskCapability)
//! contract into one vendor's API call (or, for the fake provider, no call at
//! all). Exactly one adapter is bound per process, by the factory.

pub mod fake;
pub mod gemini;
pub mod openai;

pub use fake::FakeProvider;
pub use gemini::{GeminiConfig, GeminiProvider};
pub use openai::{OpenAiConfig, OpenAiProvider};
