//! Post-processing for raw model output.
//!
//! Freeform models commonly wrap answers in Markdown fences or padding
//! whitespace; this scrub requires no particular marker and is a no-op when
//! none is present.

use regex::Regex;
use std::sync::LazyLock;

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```\w*\n?").expect("fence-open pattern is valid"));

static FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)```\n?$").expect("fence-close pattern is valid"));

/// Clean up a raw completion: trim surrounding whitespace and strip Markdown
/// code-fence delimiters (including a language tag on the opener). `None`
/// yields an empty string.
pub fn clean_completion(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let cleaned = raw.trim();
    let cleaned = FENCE_OPEN.replace_all(cleaned, "");
    let cleaned = FENCE_CLOSE.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_with_language_tag() {
        assert_eq!(
            clean_completion(Some("```js\nconsole.log(1);\n```")),
            "console.log(1);"
        );
    }

    #[test]
    fn test_fenced_block_without_language_tag() {
        assert_eq!(clean_completion(Some("```\nx = 1\n```")), "x = 1");
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(clean_completion(Some("  hello  ")), "hello");
    }

    #[test]
    fn test_none_yields_empty_string() {
        assert_eq!(clean_completion(None), "");
    }

    #[test]
    fn test_leading_blank_lines_are_stripped() {
        assert_eq!(clean_completion(Some("\n\n  return a - b;\n")), "return a - b;");
    }

    #[test]
    fn test_no_fence_is_a_noop() {
        assert_eq!(
            clean_completion(Some("const x = `template`;")),
            "const x = `template`;"
        );
    }

    #[test]
    fn test_multiline_body_survives() {
        let raw = "```python\ndef f():\n    return 1\n```";
        assert_eq!(clean_completion(Some(raw)), "def f():\n    return 1");
    }
}
