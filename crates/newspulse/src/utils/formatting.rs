//! Formatting utilities for display values.

/// Truncate text to a maximum number of characters, appending an ellipsis.
///
/// Counts `char`s rather than bytes so multi-byte text (CJK, emoji) is never
/// split mid-character. Text at or under the limit is returned unchanged.
///
/// # Examples
///
/// ```
/// use newspulse::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("short", 10), "short");
/// assert_eq!(truncate_chars("a longer sentence", 8), "a longer...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(truncate_chars("breaking news", 280), "breaking news");
    }

    #[test]
    fn test_text_at_limit_is_unchanged() {
        let text = "x".repeat(10);
        assert_eq!(truncate_chars(&text, 10), text);
    }

    #[test]
    fn test_long_text_is_truncated_with_ellipsis() {
        let result = truncate_chars("abcdefghij", 4);
        assert_eq!(result, "abcd...");
    }

    #[test]
    fn test_multibyte_text_truncates_on_char_boundary() {
        let text = "日本語のニュース記事";
        let result = truncate_chars(text, 3);
        assert_eq!(result, "日本語...");
    }

    #[test]
    fn test_emoji_is_not_split() {
        let result = truncate_chars("🌍🌎🌏🌍🌎", 2);
        assert_eq!(result, "🌍🌎...");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(truncate_chars("", 5), "");
    }
}
