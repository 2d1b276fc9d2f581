//! Text normalization helpers shared by every rule.

use super::patterns::WHITESPACE_RUN;

/// Normalize raw document text for pattern matching.
///
/// Line endings are unified to `\n`, then every whitespace run (newlines
/// included) collapses to one space and the ends are trimmed.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    collapse_whitespace(&unified)
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_lines() {
        assert_eq!(
            normalize_text("  Order\r\nNumber:\r  402\n\n\t-1  "),
            "Order Number: 402 -1"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \r\n\t "), "");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
