//! Name sanitizing for diagram node identifiers.

/// Normalize a display name into an identifier-safe token.
///
/// Strips everything outside ASCII alphanumerics and whitespace, then
/// collapses each internal whitespace run into a single underscore. The
/// result matches `[A-Za-z0-9_]*`. Distinct names may sanitize identically;
/// collisions are accepted and unhandled.
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(sanitize_name("D'Artagnan, the Third"), "DArtagnan_the_Third");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(sanitize_name("Lady   of\tthe \n Lake"), "Lady_of_the_Lake");
    }

    #[test]
    fn test_drops_leading_and_trailing_whitespace() {
        assert_eq!(sanitize_name("  Alice  "), "Alice");
    }

    #[test]
    fn test_empty_and_symbol_only_names() {
        assert_eq!(sanitize_name(""), "");
        assert_eq!(sanitize_name("!!!"), "");
    }

    #[test]
    fn test_output_alphabet() {
        let samples = [
            "Alice",
            "Bob the Builder",
            "Æther-Queen Maud",
            "  spaced   out  ",
            "名前 with latin",
            "tabs\tand\nnewlines",
        ];
        for name in samples {
            let sanitized = sanitize_name(name);
            assert!(
                sanitized
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "unexpected character in {sanitized:?}"
            );
            assert!(!sanitized.contains("__"), "double underscore in {sanitized:?}");
        }
    }
}
