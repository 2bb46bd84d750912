use crate::error::{BridgeError, Result};
use crate::translate::anthropic_types::AnthropicModelParams;
use crate::translate::openai_types::OpenAIModelParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `backend.base_url`.
pub const BACKEND_URL_ENV: &str = "VOISIA_BACKEND_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub anthropic: AnthropicModelParams,
    #[serde(default)]
    pub openai: OpenAIModelParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4317".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl BridgeConfig {
    /// Load config from a TOML file and check the default model parameters.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.anthropic.validate()?;
        config.openai.validate()?;
        Ok(config)
    }

    /// Search standard locations for a config file, falling back to defaults,
    /// then apply environment overrides.
    /// Priority: CLI arg > CWD > XDG config > home dir
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::find_file_config(explicit_path)?;
        config.apply_backend_url(std::env::var(BACKEND_URL_ENV).ok());
        Ok(config)
    }

    fn find_file_config(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load(path);
        }

        for candidate in &config_search_paths() {
            if candidate.exists() {
                tracing::info!(path = %candidate.display(), "Loading config");
                return Self::load(candidate);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Replace `backend.base_url` with `url` unless it is absent or empty.
    /// Later calls win, so callers layer file < env < CLI.
    pub fn apply_backend_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|url| !url.is_empty()) {
            self.backend.base_url = url;
        }
    }
}

pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // CWD
    paths.push(PathBuf::from("voisia.toml"));

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg).join("voisia").join("config.toml"));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".config").join("voisia").join("config.toml"));
        paths.push(home.join(".voisia.toml"));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
models_file = "resources/llm-info.json"

[backend]
base_url = "http://localhost:9000"
timeout_secs = 30

[anthropic]
model = "claude-3-5-haiku-20241022"
max_output_tokens = 2048
temperature = 0.2
system = "You are Voisia."

[anthropic.thinking]
type = "enabled"
budget_tokens = 1024

[openai]
model = "gpt-4o-mini"
instructions = "Answer in English."
"#
        )
        .unwrap();

        let config = BridgeConfig::load(f.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:9000");
        assert_eq!(config.backend.timeout(), Duration::from_secs(30));
        assert_eq!(config.anthropic.model, "claude-3-5-haiku-20241022");
        assert_eq!(config.anthropic.max_output_tokens, 2048);
        assert_eq!(config.anthropic.top_p, 1.0);
        assert_eq!(
            config.anthropic.thinking.as_ref().and_then(|t| t.budget_tokens),
            Some(1024)
        );
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.openai.max_output_tokens, 1024);
        assert_eq!(
            config.models_file,
            Some(PathBuf::from("resources/llm-info.json"))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let f = NamedTempFile::new().unwrap();
        let config = BridgeConfig::load(f.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:4317");
        assert_eq!(config.backend.timeout_secs, 300);
        assert_eq!(config.anthropic, AnthropicModelParams::default());
        assert!(config.models_file.is_none());
    }

    #[test]
    fn test_out_of_range_params_rejected() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[anthropic]\ntemperature = 3.0").unwrap();
        let err = BridgeConfig::load(f.path()).unwrap_err();
        assert!(matches!(err, BridgeError::Config { .. }));
    }

    #[test]
    fn test_backend_url_precedence() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[backend]\nbase_url = \"http://from-file:1\"").unwrap();

        // The only test touching this variable.
        std::env::set_var(BACKEND_URL_ENV, "http://from-env:2");
        let loaded = BridgeConfig::find_and_load(Some(f.path()));
        std::env::remove_var(BACKEND_URL_ENV);

        let mut config = loaded.unwrap();
        assert_eq!(config.backend.base_url, "http://from-env:2");

        config.apply_backend_url(Some("http://from-cli:3".to_string()));
        assert_eq!(config.backend.base_url, "http://from-cli:3");

        config.apply_backend_url(Some(String::new()));
        config.apply_backend_url(None);
        assert_eq!(config.backend.base_url, "http://from-cli:3");
    }

    #[test]
    fn test_load_ignores_backend_url_env() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[backend]\nbase_url = \"http://from-file:1\"").unwrap();
        let config = BridgeConfig::load(f.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://from-file:1");
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = BridgeConfig::find_and_load(Some(Path::new("/nonexistent/voisia.toml")))
            .unwrap_err();
        assert!(matches!(err, BridgeError::Config { .. }));
    }
}
