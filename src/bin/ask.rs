//! Entry binary: ask the configured provider one fixed question and print
//! the answer. Takes no arguments and always exits 0; failures are printed
//! as part of the answer text.

use askgate::prelude::*;
use tracing_subscriber::EnvFilter;

const QUESTION: &str = "Briefly explain what cloud computing is to a beginner.";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("askgate=info")),
        )
        .init();

    let config = LlmConfig::from_env();
    tracing::info!(provider = %config.provider, model = %config.model, "configuration loaded");

    println!("Question: {QUESTION}");
    println!("{}", "-".repeat(30));

    let answer = match build_provider(&config, reqwest::Client::new()) {
        Ok(provider) => provider.ask_lossy(QUESTION).await,
        Err(e) => format!("Error connecting to the API: {e}"),
    };
    println!("LLM's response:\n{answer}");
}
