//! Error types for the bridge.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BridgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The backend command itself failed. `message` is the backend's text, untouched.
    #[error("Invocation of '{command}' failed: {message}")]
    Invoke { command: String, message: String },

    #[error("Conversation is empty: at least one message is required")]
    EmptyConversation,

    #[error("No response choices available")]
    NoChoices,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl BridgeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invoke(command: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Invoke {
            command: command.into(),
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
