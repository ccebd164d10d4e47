//! LLM error display utilities
//!
//! This module provides error display helpers for LLM providers using
//! standard console styling for consistent terminal output.

use console::style;

/// Get a styled error message
pub fn style_llm_error(message: &str) -> String {
    style(message).red().to_string()
}

/// Get a styled warning message
pub fn style_llm_warning(message: &str) -> String {
    style(message).yellow().to_string()
}

/// Get a styled success message
pub fn style_llm_success(message: &str) -> String {
    style(message).green().to_string()
}

/// Get a styled provider name based on provider type
pub fn style_provider_name(provider: &str) -> String {
    let styled_name = match provider.to_lowercase().as_str() {
        "openrouter" => style(provider).cyan(),
        _ => style(provider).blue(),
    };
    styled_name.to_string()
}

/// Format an LLM error for display
pub fn format_llm_error(provider: &str, error: &str) -> String {
    let provider_styled = style_provider_name(provider);
    let error_styled = style_llm_error(error);
    format!("{} {}", provider_styled, error_styled)
}

/// Format an LLM warning for display
pub fn format_llm_warning(provider: &str, warning: &str) -> String {
    let provider_styled = style_provider_name(provider);
    let warning_styled = style_llm_warning(warning);
    format!("{} {}", provider_styled, warning_styled)
}

/// Format an LLM success message for display
pub fn format_llm_success(provider: &str, message: &str) -> String {
    let provider_styled = style_provider_name(provider);
    let success_styled = style_llm_success(message);
    format!("{} {}", provider_styled, success_styled)
}
