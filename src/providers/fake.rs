//! Fake provider for tests and offline operation.

use async_trait::async_trait;

use crate::error::LlmError;
use crate::traits::AskCapability;

/// A provider that fabricates answers without any external calls.
///
/// `ask` is pure and deterministic: the same question always yields the same
/// templated answer, embedding the question verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeProvider;

impl FakeProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AskCapability for FakeProvider {
    async fn ask(&self, question: &str) -> Result<String, LlmError> {
        Ok(format!(
            "This is a fake response to the question: {question}"
        ))
    }
}
