//! Types for the backend's `OpenAI` command: per-call parameters, invocation
//! arguments, and the completion-style response it returns.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::message::VoisiaMessage;
use crate::error::{BridgeError, Result};

// ---------------------------------------------------------------------------
// Per-call parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIModelParams {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Default for OpenAIModelParams {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_output_tokens: 1024,
            temperature: 1.0,
            top_p: 1.0,
            instructions: None,
        }
    }
}

impl OpenAIModelParams {
    pub fn validate(&self) -> Result<()> {
        if self.max_output_tokens < 1 {
            return Err(BridgeError::config("max_output_tokens must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(BridgeError::config("temperature must be between 0 and 2"));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(BridgeError::config("top_p must be between 0 and 1"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Invocation arguments (what we send TO the backend)
// ---------------------------------------------------------------------------

/// Arguments of the `generate_openai_response` backend command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIInvokeParams {
    pub model: String,
    pub input: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub store: bool,
    /// Carries `OpenAIModelParams::instructions`.
    pub system: Option<String>,
    pub conversation_history: Vec<VoisiaMessage>,
}

// ---------------------------------------------------------------------------
// Response types (what the backend sends back)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<OpenAIUsage>,
    /// Everything else the backend sent (`system_fingerprint`, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u64,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ChoiceMessage {
    pub fn new(role: impl Into<String>, content: Option<&str>) -> Self {
        Self {
            role: role.into(),
            content: content.map(str::to_string),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAIUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
