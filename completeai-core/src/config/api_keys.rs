//! API key management module for secure retrieval from environment variables,
//! .env files, and configuration files.
//!
//! Retrieval prioritizes security by checking environment variables first,
//! then .env files, and finally falling back to configuration file values.
//! The completion engine itself never reads ambient environment state; the
//! key is resolved here and injected into the provider.

use anyhow::Result;
use std::env;

/// API key sources for the OpenRouter provider
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// OpenRouter API key environment variable name
    pub openrouter_env: String,
    /// OpenRouter API key from the configuration file
    pub openrouter_config: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            openrouter_env: "OPENROUTER_API_KEY".to_string(),
            openrouter_config: None,
        }
    }
}

/// Load environment variables from .env file
///
/// This function attempts to load environment variables from a .env file
/// in the current directory. It logs a warning if the file exists but cannot
/// be loaded, but doesn't fail if the file doesn't exist.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("loaded environment variables from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            // .env file doesn't exist, which is fine
            Ok(())
        }
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {}", e);
            Ok(())
        }
    }
}

/// Get the OpenRouter API key with secure fallback mechanism
///
/// 1. First checks the environment variable (highest priority for security)
/// 2. Then checks .env file values (already merged into the environment by
///    [`load_dotenv`])
/// 3. Falls back to the configuration file value if neither above is set
///
/// # Returns
///
/// * `Ok(String)` - The API key if found
/// * `Err` - If no API key could be found
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    // First try the environment variable (most secure)
    if let Ok(key) = env::var(&sources.openrouter_env) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Then try the configuration file value
    if let Some(key) = &sources.openrouter_config {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    // If neither worked, return an error
    Err(anyhow::anyhow!(
        "No API key found for OpenRouter. Set {} environment variable (or add to .env file) or configure in completeai.toml",
        sources.openrouter_env
    ))
}
