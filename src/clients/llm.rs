use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Black-box text completion. Implementations may fail for network, quota or
/// timeout reasons; callers must not assume the text is valid JSON.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
