pub mod gemini;

use async_trait::async_trait;

use crate::domain::error::Result;

pub use gemini::GeminiClient;

/// Text-completion transport. One call per city; the reply is free text
/// expected to carry an embedded JSON payload.
#[async_trait]
pub trait CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
