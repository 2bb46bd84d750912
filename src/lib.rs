pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod invoke;
pub mod logging;
pub mod models;
pub mod providers;
pub mod translate;

pub use adapter::{AnthropicAdapter, OpenAIAdapter, ProviderAdapter};
pub use client::BridgeClient;
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use invoke::{HttpInvoker, Invoker};
pub use translate::message::{Conversation, TokenUsage, VoisiaMessage};

/// Pure helpers for Anthropic responses.
pub mod anthropic {
    pub use crate::translate::anthropic_types::{
        AnthropicModelParams, AnthropicResponse, AnthropicThinking,
    };
    pub use crate::translate::response::{
        anthropic_to_message as create_voisia_message,
        anthropic_token_usage as extract_token_usage,
    };
}

/// Pure helpers for `OpenAI` responses.
pub mod openai {
    pub use crate::translate::openai_types::{OpenAIModelParams, OpenAIResponse};
    pub use crate::translate::response::{
        openai_to_message as create_voisia_message, openai_token_usage as extract_token_usage,
    };
}
