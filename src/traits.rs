//! Ask capability trait and extensions

use async_trait::async_trait;

use crate::error::LlmError;

/// The one capability every provider adapter implements: ask a question,
/// get the model's textual answer.
#[async_trait]
pub trait AskCapability: Send + Sync + std::fmt::Debug {
    async fn ask(&self, question: &str) -> Result<String, LlmError>;
}

/// Convenience extensions over [`AskCapability`].
#[async_trait]
pub trait AskExtensions: AskCapability {
    /// Ask and always get a printable string back.
    ///
    /// Failures are rendered as `Error connecting to the API: <details>`
    /// instead of propagating, matching the display contract of the entry
    /// binary.
    async fn ask_lossy(&self, question: &str) -> String {
        match self.ask(question).await {
            Ok(answer) => answer,
            Err(e) => format!("Error connecting to the API: {e}"),
        }
    }
}

#[async_trait]
impl<T: AskCapability + ?Sized> AskExtensions for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait]
    impl AskCapability for FailingProvider {
        async fn ask(&self, _question: &str) -> Result<String, LlmError> {
            Err(LlmError::HttpError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn ask_lossy_renders_errors_as_text() {
        let provider = FailingProvider;
        let answer = provider.ask_lossy("hello?").await;
        assert!(answer.starts_with("Error connecting to the API:"));
        assert!(answer.contains("connection refused"));
    }

    #[tokio::test]
    async fn ask_lossy_works_through_trait_objects() {
        let provider: Box<dyn AskCapability> = Box::new(FailingProvider);
        let answer = provider.ask_lossy("hello?").await;
        assert!(answer.starts_with("Error connecting to the API:"));
    }
}
