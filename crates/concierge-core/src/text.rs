//! User input sanitization.

/// Trim surrounding whitespace and strip control characters.
///
/// Newlines are preserved (multi-line messages are legal); everything else
/// in the control range -- carriage returns, terminal escapes, NULs -- is
/// dropped before any guard check or network dispatch.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  hello  "), "hello");
        assert_eq!(sanitize("\t hi \r\n"), "hi");
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(sanitize("he\u{7}llo"), "hello");
        assert_eq!(sanitize("a\u{1b}[31mb"), "a[31mb");
        assert_eq!(sanitize("nul\u{0}byte"), "nulbyte");
    }

    #[test]
    fn preserves_interior_newlines() {
        assert_eq!(sanitize("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn interior_carriage_returns_are_dropped() {
        assert_eq!(sanitize("a\r\nb"), "a\nb");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(sanitize("   \t \n "), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn unicode_text_passes_through() {
        assert_eq!(sanitize("hôtel à Nice 🏖"), "hôtel à Nice 🏖");
    }
}
