//! # Response Cleanup
//!
//! Models sometimes wrap their answer in a markdown code fence even when told
//! not to. This module recovers the bare statement text.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a fence that opens at the very start and closes at the very end of the text.
/// The language tag is either the rest of the opening line, or a known SQL
/// dialect name followed by spaces when the whole fence sits on one line.
const CODE_FENCE_PATTERN: &str =
    r"(?s)\A```(?:[\w+\-]*[ \t]*\r?\n|(?i:sqlite|sql|mysql|postgresql|postgres)[ \t]+)?(.*?)```\z";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CODE_FENCE_PATTERN).expect("code fence pattern is valid"));

/// Strips surrounding whitespace and, if present, a wrapping markdown code fence.
///
/// Text without fence markers at both ends passes through (trimmed). Applying
/// the function to its own output returns the same string.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(CODE_FENCE_PATTERN).is_ok());
    }

    #[test]
    fn test_strips_sql_fence() {
        let raw = "```sql\nSELECT * FROM products;\n```";
        assert_eq!(strip_code_fence(raw), "SELECT * FROM products;");
    }

    #[test]
    fn test_plain_sql_passes_through() {
        let raw = "SELECT * FROM products;";
        assert_eq!(strip_code_fence(raw), raw);
    }

    #[test]
    fn test_fence_without_language_tag() {
        let raw = "```\nSELECT id FROM products;\n```";
        assert_eq!(strip_code_fence(raw), "SELECT id FROM products;");
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(strip_code_fence("```SELECT 1;```"), "SELECT 1;");
    }

    #[test]
    fn test_single_line_fence_with_dialect_tag() {
        assert_eq!(
            strip_code_fence("```sql SELECT * FROM products;```"),
            "SELECT * FROM products;"
        );
        assert_eq!(
            strip_code_fence("```SQLite SELECT name FROM products;```"),
            "SELECT name FROM products;"
        );
        assert_eq!(
            strip_code_fence("```postgresql\tSELECT 1;```"),
            "SELECT 1;"
        );
    }

    #[test]
    fn test_surrounding_whitespace_and_crlf() {
        let raw = "\n  ```sql\r\nSELECT name\r\nFROM products;\r\n```  \n";
        assert_eq!(strip_code_fence(raw), "SELECT name\r\nFROM products;");
    }

    #[test]
    fn test_fence_not_at_edges_is_left_alone() {
        let raw = "Here you go:\n```sql\nSELECT 1;\n```";
        assert_eq!(strip_code_fence(raw), raw);
    }
}
