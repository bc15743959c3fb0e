//! Small text shaping helpers shared by page renderers.

/// Card excerpts are cut at this many characters.
pub const EXCERPT_LEN: usize = 120;

/// First `max` characters followed by `...`.
///
/// The marker is appended even when the text is shorter, matching how card
/// teasers read on the blog index.
pub fn excerpt(text: &str, max: usize) -> String {
    let end = text
        .char_indices()
        .nth(max)
        .map_or(text.len(), |(idx, _)| idx);
    format!("{}...", &text[..end])
}

/// Split an outcome statement into its leading figure and the remainder.
///
/// `"45% reduction in latency"` -> `("45%", "reduction in latency")`.
pub fn split_result(result: &str) -> (&str, &str) {
    let trimmed = result.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((figure, label)) => (figure, label.trim_start()),
        None => (trimmed, ""),
    }
}

/// Uppercased first character, used as a monogram icon.
pub fn initial(text: &str) -> String {
    text.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("short", 120), "short...");
        assert_eq!(excerpt("ééé", 2), "éé...");
    }

    #[test]
    fn test_split_result() {
        assert_eq!(
            split_result("45% reduction in settlement time"),
            ("45%", "reduction in settlement time")
        );
        assert_eq!(split_result("$2.5M"), ("$2.5M", ""));
        assert_eq!(split_result("  3x   faster "), ("3x", "faster"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("innovation"), "I");
        assert_eq!(initial(""), "");
    }
}
