//! Configuration loading for `completeai.toml`.
//!
//! Discovery order: an explicit path, the workspace root, then the user
//! configuration directory. A missing file yields the built-in defaults, so
//! the tool works out of the box with only an API key in the environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::constants::{completion, defaults, models, urls};

/// Top-level configuration for the completion tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleteAiConfig {
    pub provider: ProviderSettings,
    pub completion: CompletionSettings,
}

/// Provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// API key from the configuration file; the environment variable takes
    /// precedence (see `config::api_keys`)
    pub api_key: Option<String>,
    /// Default model ID sent with completion requests
    pub model: String,
    /// OpenRouter-compatible API base URL
    pub base_url: String,
    /// Value for the HTTP-Referer identification header
    pub http_referer: Option<String>,
    /// Value for the X-Title identification header
    pub x_title: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: models::openrouter::DEFAULT_MODEL.to_string(),
            base_url: urls::OPENROUTER_API_BASE.to_string(),
            http_referer: None,
            x_title: None,
        }
    }
}

/// Completion policy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Lines of trailing context sent to the model
    pub context_window: usize,
    /// Output token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            context_window: completion::DEFAULT_CONTEXT_WINDOW,
            max_tokens: completion::DEFAULT_MAX_TOKENS,
            temperature: completion::DEFAULT_TEMPERATURE,
        }
    }
}

impl CompleteAiConfig {
    /// Load configuration from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Discover and load configuration for a workspace.
    ///
    /// Checks `<workspace>/completeai.toml`, then
    /// `<config dir>/completeai/completeai.toml`, and falls back to defaults
    /// when neither exists.
    pub fn load(workspace: &Path) -> Result<Self> {
        let candidate = workspace.join(defaults::CONFIG_FILE);
        if candidate.exists() {
            return Self::load_from_file(&candidate);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let candidate = config_dir.join("completeai").join(defaults::CONFIG_FILE);
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_policy_constants() {
        let config = CompleteAiConfig::default();
        assert_eq!(config.provider.model, models::openrouter::DEFAULT_MODEL);
        assert_eq!(config.provider.base_url, urls::OPENROUTER_API_BASE);
        assert_eq!(
            config.completion.context_window,
            completion::DEFAULT_CONTEXT_WINDOW
        );
        assert_eq!(config.completion.max_tokens, completion::DEFAULT_MAX_TOKENS);
        assert!((config.completion.temperature - completion::DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_full_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[provider]
model = "qwen/qwen3-coder"
http_referer = "https://example.com"

[completion]
context_window = 25
max_tokens = 80
temperature = 0.3
"#
        )
        .unwrap();

        let config = CompleteAiConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.provider.model, "qwen/qwen3-coder");
        assert_eq!(
            config.provider.http_referer.as_deref(),
            Some("https://example.com")
        );
        assert_eq!(config.completion.context_window, 25);
        assert_eq!(config.completion.max_tokens, 80);
        assert!((config.completion.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[completion]
context_window = 50
"#
        )
        .unwrap();

        let config = CompleteAiConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.completion.context_window, 50);
        assert_eq!(config.completion.max_tokens, completion::DEFAULT_MAX_TOKENS);
        assert_eq!(config.provider.model, models::openrouter::DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CompleteAiConfig::load(dir.path()).unwrap();
        assert_eq!(config.provider.model, models::openrouter::DEFAULT_MODEL);
    }

    #[test]
    fn test_workspace_file_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(defaults::CONFIG_FILE),
            "[provider]\nmodel = \"deepseek/deepseek-chat-v3.1\"\n",
        )
        .unwrap();

        let config = CompleteAiConfig::load(dir.path()).unwrap();
        assert_eq!(config.provider.model, "deepseek/deepseek-chat-v3.1");
    }
}
