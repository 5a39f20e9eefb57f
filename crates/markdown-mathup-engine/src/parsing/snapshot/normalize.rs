use std::fmt::Write;

use crate::parsing::{
    source::{Span, preview},
    token::{Token, TokenKind},
};

/// Content longer than this is truncated in dumps.
const PREVIEW_MAX: usize = 60;

/// Dumps `tokens` one per line, indented by nesting level.
///
/// ```text
/// paragraph_open p lines=0..=0
///   inline "a $$x$$" lines=0..=0
///     text "a "
///     math_inline "x" markup="$$"
/// paragraph_close p
/// ```
pub fn normalize(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        write_token(&mut out, token, token.level as usize);
    }
    out
}

fn write_token(out: &mut String, token: &Token, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(token.kind.name());
    if !token.tag.is_empty() && token.kind != TokenKind::Inline {
        let _ = write!(out, " {}", token.tag);
    }
    if !token.content.is_empty() {
        let text = preview(&token.content, Span::new(0, token.content.len()), PREVIEW_MAX);
        let _ = write!(out, " {text:?}");
    }
    if let Some(lines) = token.lines {
        let _ = write!(out, " lines={}..={}", lines.first, lines.last);
    }
    if !token.markup.is_empty() {
        let _ = write!(out, " markup={:?}", token.markup);
    }
    if !token.info.is_empty() {
        let _ = write!(out, " info={:?}", token.info);
    }
    for (name, value) in &token.attrs {
        let _ = write!(out, " {name}={value:?}");
    }
    if token.hidden {
        out.push_str(" hidden");
    }
    out.push('\n');

    for child in &token.children {
        write_token(out, child, depth + 1 + child.level as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_support::host;
    use pretty_assertions::assert_eq;

    #[test]
    fn dumps_nested_children() {
        let dump = normalize(&host().parse("a `b`"));
        assert_eq!(
            dump,
            "paragraph_open p lines=0..=0\n  inline \"a `b`\" lines=0..=0\n    text \"a \"\n    code_inline code \"b\" markup=\"`\"\nparagraph_close p\n"
        );
    }

    #[test]
    fn long_content_is_truncated() {
        let src = "x".repeat(80);
        let dump = normalize(&host().parse(&src));
        assert!(dump.contains(&format!("\"{}...\"", "x".repeat(PREVIEW_MAX))));
    }
}
