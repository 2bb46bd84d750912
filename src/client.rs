use crate::adapter::{self, AnthropicAdapter, OpenAIAdapter};
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::invoke::{HttpInvoker, Invoker};
use crate::models::{ModelInfo, AVAILABLE_MODELS_COMMAND};
use crate::translate::anthropic_types::{AnthropicModelParams, AnthropicResponse};
use crate::translate::message::Conversation;
use crate::translate::openai_types::{OpenAIModelParams, OpenAIResponse};
use std::sync::Arc;

/// Entry point for callers: one method per backend command.
#[derive(Clone)]
pub struct BridgeClient {
    invoker: Arc<dyn Invoker>,
}

impl BridgeClient {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }

    /// Client talking to the backend configured in `config` over HTTP.
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        let invoker =
            HttpInvoker::new(config.backend.base_url.clone(), config.backend.timeout())?;
        Ok(Self::new(Arc::new(invoker)))
    }

    /// Send the last message of `input` to Anthropic, with the rest as history.
    /// Returns the provider response as the backend produced it.
    pub async fn generate_anthropic_response(
        &self,
        input: impl Into<Conversation>,
        params: &AnthropicModelParams,
    ) -> Result<AnthropicResponse> {
        adapter::generate::<AnthropicAdapter>(self.invoker.as_ref(), input, params).await
    }

    /// Send the last message of `input` to `OpenAI`, with the rest as history.
    pub async fn generate_openai_response(
        &self,
        input: impl Into<Conversation>,
        params: &OpenAIModelParams,
    ) -> Result<OpenAIResponse> {
        adapter::generate::<OpenAIAdapter>(self.invoker.as_ref(), input, params).await
    }

    /// The backend's model catalog.
    pub async fn available_models(&self) -> Result<Vec<ModelInfo>> {
        let raw = self
            .invoker
            .invoke(AVAILABLE_MODELS_COMMAND, serde_json::json!({}))
            .await?;
        Ok(serde_json::from_value(raw)?)
    }
}
