use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::message::VoisiaMessage;
use crate::error::{BridgeError, Result};

// ---------------------------------------------------------------------------
// Per-call parameters (what the caller hands us)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicModelParams {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<AnthropicThinking>,
}

impl Default for AnthropicModelParams {
    fn default() -> Self {
        Self {
            model: "claude-3-7-sonnet-20250219".to_string(),
            max_output_tokens: 1024,
            temperature: 1.0,
            top_p: 1.0,
            system: None,
            thinking: None,
        }
    }
}

impl AnthropicModelParams {
    /// Check the ranges the Messages API accepts.
    pub fn validate(&self) -> Result<()> {
        if self.max_output_tokens < 1 {
            return Err(BridgeError::config("max_output_tokens must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(BridgeError::config("temperature must be between 0 and 1"));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(BridgeError::config("top_p must be between 0 and 1"));
        }
        if let Some(budget) = self.thinking.as_ref().and_then(|t| t.budget_tokens) {
            if budget < 1024 || budget >= self.max_output_tokens {
                return Err(BridgeError::config(
                    "thinking.budget_tokens must be at least 1024 and below max_output_tokens",
                ));
            }
        }
        Ok(())
    }
}

/// Extended thinking settings, forwarded to the backend as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicThinking {
    #[serde(rename = "type", default = "default_thinking_type")]
    pub thinking_type: String, // "enabled" or "disabled"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_tokens: Option<u32>,
}

fn default_thinking_type() -> String {
    "disabled".to_string()
}

impl AnthropicThinking {
    pub fn enabled(budget_tokens: u32) -> Self {
        Self {
            thinking_type: "enabled".to_string(),
            budget_tokens: Some(budget_tokens),
        }
    }
}

// ---------------------------------------------------------------------------
// Invocation arguments (what we send TO the backend)
// ---------------------------------------------------------------------------

/// Arguments of the `generate_anthropic_response` backend command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicInvokeParams {
    pub model: String,
    pub input: String,
    pub system: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<AnthropicThinking>,
    pub convo_history: Vec<VoisiaMessage>,
}

// ---------------------------------------------------------------------------
// Response types (what the backend sends back)
//
// Fields the crate does not read are kept in `extra`, so a response
// re-serializes to what the backend sent.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnthropicResponse {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub response_type: String, // "message"
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub stop_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<AnthropicUsage>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One content block. Only `text` blocks are read; every other kind
/// (thinking, tool use, images, ...) is carried through `extra` as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnthropicContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AnthropicContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            block_type: "text".to_string(),
            text: Some(text.into()),
            extra: HashMap::new(),
        }
    }

    /// The block's text, if this is a `text` block.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if self.block_type == "text" {
            self.text.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnthropicUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
