use anyhow::Result;
use async_trait::async_trait;
use gemini_rust::Gemini;
use std::sync::Arc;

use crate::clients::llm::{CompletionProvider, CompletionRequest};

#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<Gemini>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = Gemini::with_model(api_key, model.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create Gemini client: {}", e))?;

        Ok(Self {
            client: Arc::new(client),
            model,
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        tracing::debug!(
            model = %self.model,
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            "gemini.request"
        );

        let response = self
            .client
            .generate_content()
            .with_system_prompt(request.system_instruction.as_str())
            .with_user_message(request.prompt.as_str())
            .with_temperature(request.temperature)
            .with_max_output_tokens(request.max_tokens as i32)
            .execute()
            .await
            .map_err(|e| anyhow::anyhow!("Gemini request failed: {}", e))?;

        Ok(response.text())
    }
}
