use crate::parsing::{
    blocks::{BlockState, ParentKind},
    token::{LineRange, Nesting, TokenKind},
};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches, so the rule always succeeds. Inline parsing is
/// applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Alternate chain holding the rules allowed to interrupt a paragraph.
    pub const CHAIN: &'static str = "paragraph";
}

pub fn paragraph(state: &mut BlockState<'_>, start: usize, end: usize, _silent: bool) -> bool {
    let old_parent = state.parent;
    state.parent = ParentKind::Paragraph;

    let mut next = start + 1;
    while next < end && !state.is_empty(next) {
        // Deeply indented lines are lazy continuations, never openers.
        if state.is_code_indented(next) {
            next += 1;
            continue;
        }
        if state.terminates(Paragraph::CHAIN, next, end) {
            break;
        }
        next += 1;
    }

    let content = state
        .get_lines(start, next, state.blk_indent, false)
        .trim()
        .to_string();
    state.line = next;
    let lines = Some(LineRange::new(start, next - 1));

    state
        .push(TokenKind::ParagraphOpen, "p", Nesting::Open)
        .lines = lines;

    let inline = state.push(TokenKind::Inline, "", Nesting::Leaf);
    inline.content = content;
    inline.lines = lines;

    state.push(TokenKind::ParagraphClose, "p", Nesting::Close);

    state.parent = old_parent;
    true
}

#[cfg(test)]
mod tests {
    use crate::parsing::test_support::{host, kinds};
    use crate::parsing::token::{LineRange, TokenKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn consecutive_lines_form_one_paragraph() {
        let tokens = host().parse("one\ntwo\n\nthree");
        assert_eq!(
            kinds(&tokens),
            vec![
                "paragraph_open",
                "inline",
                "paragraph_close",
                "paragraph_open",
                "inline",
                "paragraph_close",
            ]
        );
        assert_eq!(tokens[1].content, "one\ntwo");
        assert_eq!(tokens[0].lines, Some(LineRange::new(0, 1)));
        assert_eq!(tokens[4].content, "three");
    }

    #[test]
    fn content_is_trimmed() {
        let tokens = host().parse("   padded   \n");
        assert_eq!(tokens[1].content, "padded");
    }

    #[test]
    fn indented_line_continues_paragraph() {
        let tokens = host().parse("text\n        more");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Inline);
        assert_eq!(tokens[1].content, "text\n        more");
    }
}
