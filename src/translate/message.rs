//! The provider-neutral message shape shared by both adapters.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};

/// One message of a conversation, as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoisiaMessage {
    pub role: String,
    pub content: String,
}

impl VoisiaMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Input accepted by the `generate_*` operations: a lone message or a whole
/// conversation, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Conversation {
    Single(VoisiaMessage),
    Many(Vec<VoisiaMessage>),
}

impl Conversation {
    pub fn into_messages(self) -> Vec<VoisiaMessage> {
        match self {
            Conversation::Single(msg) => vec![msg],
            Conversation::Many(msgs) => msgs,
        }
    }
}

impl From<VoisiaMessage> for Conversation {
    fn from(msg: VoisiaMessage) -> Self {
        Conversation::Single(msg)
    }
}

impl From<Vec<VoisiaMessage>> for Conversation {
    fn from(msgs: Vec<VoisiaMessage>) -> Self {
        Conversation::Many(msgs)
    }
}

/// A conversation split into the new turn and the history that precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Content of the last message.
    pub input: String,
    pub history: Vec<VoisiaMessage>,
}

impl Turn {
    /// Split a conversation: the last message is the new turn, everything before
    /// it is history. History entries are copied down to `role` and `content`.
    pub fn split(conversation: impl Into<Conversation>) -> Result<Self> {
        let messages = conversation.into().into_messages();
        let (last, earlier) = messages
            .split_last()
            .ok_or(BridgeError::EmptyConversation)?;

        let history = earlier
            .iter()
            .map(|msg| VoisiaMessage {
                role: msg.role.clone(),
                content: msg.content.clone(),
            })
            .collect();

        Ok(Self {
            input: last.content.clone(),
            history,
        })
    }
}

/// Token counts consumed by one provider call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
