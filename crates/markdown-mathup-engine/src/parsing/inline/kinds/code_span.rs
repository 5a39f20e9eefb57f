use crate::parsing::{
    inline::InlineState,
    token::{Nesting, TokenKind},
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: nothing inside them is parsed, and a closing
/// delimiter of any later construct inside one is never seen.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Normalizes span content: newlines become spaces, and one space is
    /// stripped from each side when both are present around other text.
    pub fn normalize(raw: &str) -> String {
        let flat = raw.replace('\n', " ");
        let stripped = flat
            .strip_prefix(' ')
            .and_then(|s| s.strip_suffix(' '))
            .filter(|s| !s.is_empty());
        match stripped {
            Some(inner) => inner.to_string(),
            None => flat,
        }
    }
}

/// A backtick run opens a code span closed by the next run of equal length.
/// Without a closer the run is literal text.
pub fn code_span(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.cursor.peek() != Some(CodeSpan::TICK) {
        return false;
    }

    let start = state.cursor.pos();
    while state.cursor.peek() == Some(CodeSpan::TICK) {
        state.cursor.bump();
    }
    let content_start = state.cursor.pos();
    let opener_len = content_start - start;
    let marker = state.cursor.slice(start, content_start);

    // A known closer position at or before `start` means no closer follows.
    let exhausted = state.backticks_scanned
        && state
            .backticks
            .get(&opener_len)
            .is_none_or(|&closer| closer <= start);

    if !exhausted {
        let bytes = state.src().as_bytes();
        let limit = state.cursor.limit();
        let mut match_end = content_start;
        while let Some(offset) = bytes[match_end..limit].iter().position(|&b| b == CodeSpan::TICK) {
            let match_start = match_end + offset;
            match_end = match_start + 1;
            while match_end < limit && bytes[match_end] == CodeSpan::TICK {
                match_end += 1;
            }

            if match_end - match_start == opener_len {
                if !silent {
                    let content = CodeSpan::normalize(state.cursor.slice(content_start, match_start));
                    let token = state.push(TokenKind::CodeInline, "code", Nesting::Leaf);
                    token.markup = marker.to_string();
                    token.content = content;
                }
                state.cursor.set_pos(match_end);
                return true;
            }
            state.backticks.insert(match_end - match_start, match_start);
        }
        state.backticks_scanned = true;
    }

    if !silent {
        state.pending.push_str(marker);
    }
    state.cursor.set_pos(content_start);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_support::host;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(" a ", "a")]
    #[case("  a  ", " a ")]
    #[case("a\nb", "a b")]
    #[case(" ", " ")]
    #[case(" `` ", "``")]
    fn normalize_content(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(CodeSpan::normalize(raw), expected);
    }

    #[test]
    fn matching_run_lengths() {
        let children = host().parse_inline("``a ` b`` c");
        assert_eq!(children[0].kind, TokenKind::CodeInline);
        assert_eq!(children[0].content, "a ` b");
        assert_eq!(children[0].markup, "``");
        assert_eq!(children[1].content, " c");
    }

    #[test]
    fn unmatched_run_is_literal() {
        let children = host().parse_inline("```a``");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].content, "```a``");
    }

    #[test]
    fn code_span_is_raw_zone() {
        let children = host().parse_inline(r"`\*x\*`");
        assert_eq!(children[0].content, r"\*x\*");
    }
}
