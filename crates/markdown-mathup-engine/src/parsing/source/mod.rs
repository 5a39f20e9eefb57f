//! Immutable source buffer helpers: spans, the line table, and input normalization.

pub mod lines;
pub mod slice;
pub mod span;

use std::borrow::Cow;

pub use lines::{LineMarks, line_table, measure_indent};
pub use slice::{preview, rope_to_string};
pub use span::Span;

/// Normalizes line endings to `\n` and replaces NUL with U+FFFD.
pub fn normalize(src: &str) -> Cow<'_, str> {
    if !src.contains(['\r', '\0']) {
        return Cow::Borrowed(src);
    }
    Cow::Owned(
        src.replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\0', "\u{FFFD}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_leaves_clean_input_borrowed() {
        assert!(matches!(normalize("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn normalize_rewrites_crlf_and_nul() {
        assert_eq!(normalize("a\r\nb\rc\0"), "a\nb\nc\u{FFFD}");
    }
}
