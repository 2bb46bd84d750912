//! The catalog of models the application offers.
//!
//! The catalog is a JSON file (`{ "models": [...] }`) shipped with the backend.
//! It can be read locally with [`ModelCatalog::load`], or fetched from the
//! backend through `BridgeClient::available_models`.

use crate::error::{BridgeError, Result};
use crate::providers::ProviderKind;
use crate::translate::anthropic_types::AnthropicModelParams;
use crate::translate::openai_types::OpenAIModelParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Backend command returning the catalog.
pub const AVAILABLE_MODELS_COMMAND: &str = "get_available_models";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub display_name: String,
    pub provider: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub params: ModelDefaults,
}

/// Generation defaults the catalog suggests for a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefaults {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for ModelDefaults {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 1.0,
            top_p: 1.0,
        }
    }
}

impl ModelInfo {
    #[must_use]
    pub fn provider_kind(&self) -> Option<ProviderKind> {
        ProviderKind::from_name(&self.provider)
    }

    /// Per-call Anthropic parameters seeded from this model's defaults.
    #[must_use]
    pub fn anthropic_params(&self) -> AnthropicModelParams {
        AnthropicModelParams {
            model: self.id.clone(),
            max_output_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            system: None,
            thinking: None,
        }
    }

    /// Per-call `OpenAI` parameters seeded from this model's defaults.
    #[must_use]
    pub fn openai_params(&self) -> OpenAIModelParams {
        OpenAIModelParams {
            model: self.id.clone(),
            max_output_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            instructions: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelInfo>,
}

impl ModelCatalog {
    /// Read a catalog file.
    ///
    /// # Errors
    /// Returns `BridgeError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::config(format!(
                "Failed to read model catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            BridgeError::config(format!(
                "Failed to parse model catalog {}: {}",
                path.display(),
                e
            ))
        })
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ModelInfo> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn for_provider(&self, provider: ProviderKind) -> impl Iterator<Item = &ModelInfo> {
        self.models
            .iter()
            .filter(move |m| m.provider_kind() == Some(provider))
    }
}

impl From<Vec<ModelInfo>> for ModelCatalog {
    fn from(models: Vec<ModelInfo>) -> Self {
        Self { models }
    }
}
