//! Prompt templates keyed by source-language tag.
//!
//! Each template contains exactly one `{code}` placeholder. Lookup is a
//! case-sensitive exact match on the language tag; unknown tags fall back to
//! a generic template that names no language.

/// Placeholder token replaced with the extracted context
pub const CONTEXT_PLACEHOLDER: &str = "{code}";

/// Language tags with the display name rendered into the template wording
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("php", "PHP"),
];

const DEFAULT_TEMPLATE: &str = "You are a code completion assistant. Complete the following code snippet. Provide only the completion, no explanations.\n\nCode:\n{code}\n\nCompletion:";

/// Display name for a known language tag
pub fn language_display_name(language: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(tag, _)| *tag == language)
        .map(|(_, name)| *name)
}

/// Prompt template for a language tag
pub fn prompt_template(language: &str) -> String {
    match language_display_name(language) {
        Some(name) => format!(
            "You are a code completion assistant. Complete the following {} code snippet. Provide only the completion, no explanations.\n\nCode:\n{}\n\nCompletion:",
            name, CONTEXT_PLACEHOLDER
        ),
        None => DEFAULT_TEMPLATE.to_string(),
    }
}

/// Substitute the extracted context into the language's template.
///
/// The context goes in verbatim; there is a single substitution point and no
/// escaping, so context text that happens to contain the placeholder token
/// is left untouched.
pub fn build_prompt(context: &str, language: &str) -> String {
    prompt_template(language).replacen(CONTEXT_PLACEHOLDER, context, 1)
}
