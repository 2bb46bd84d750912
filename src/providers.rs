//! The providers the backend can reach, and the command that reaches each.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Anthropic,
    #[serde(rename = "openai")]
    OpenAI,
}

const ALL: &[ProviderKind] = &[ProviderKind::Anthropic, ProviderKind::OpenAI];

impl ProviderKind {
    /// Case-insensitive lookup by provider name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ProviderKind> {
        ALL.iter().copied().find(|p| p.name() == name.to_lowercase())
    }

    #[must_use]
    pub fn all() -> &'static [ProviderKind] {
        ALL
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAI => "openai",
        }
    }

    /// Backend command that generates a response from this provider.
    #[must_use]
    pub fn command(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "generate_anthropic_response",
            ProviderKind::OpenAI => "generate_openai_response",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
