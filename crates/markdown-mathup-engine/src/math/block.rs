use crate::parsing::{
    blocks::BlockState,
    token::{LineRange, Nesting, TokenKind},
};

/// Block math fenced by `$$$`.
pub struct MathBlock;

impl MathBlock {
    pub const FENCE: &'static str = "$$$";
}

/// Outcome of scanning a block math construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScan {
    /// Line the host resumes from.
    pub next_line: usize,
    /// False when the block was auto-closed.
    pub closed: bool,
    pub content: String,
}

/// Scans a block opened at `start` (already known to carry the fence),
/// without touching the token stream.
pub fn scan_block(state: &BlockState<'_>, start: usize, end: usize) -> BlockScan {
    let src = state.src;
    let marks = state.lines[start];
    let remainder = &src[marks.text_start() + MathBlock::FENCE.len()..marks.end];

    if let Some(inner) = remainder.trim().strip_suffix(MathBlock::FENCE) {
        return BlockScan {
            next_line: start + 1,
            closed: true,
            content: inner.trim().to_string(),
        };
    }

    let mut next = start;
    let mut last_fragment = "";
    let mut closed = false;
    loop {
        next += 1;
        if next >= end {
            break;
        }

        let line = state.lines[next];
        if !line.is_blank() && line.indent < state.blk_indent {
            break;
        }
        let text = &src[line.text_start().min(line.end)..line.end];
        if !text.trim().ends_with(MathBlock::FENCE) {
            continue;
        }
        if state.is_code_indented(next) {
            continue;
        }
        let Some(fence_at) = text.rfind(MathBlock::FENCE) else {
            continue;
        };
        let tail_start = line.text_start() + fence_at + MathBlock::FENCE.len();
        if state.skip_spaces(tail_start, line.end) < line.end {
            continue;
        }

        last_fragment = &text[..fence_at];
        closed = true;
        break;
    }

    let first = non_blank(remainder);
    let interior = state.get_lines(start + 1, next, marks.indent, true);
    let rest = interior + non_blank(last_fragment);

    let mut content = first.to_string();
    if !content.is_empty() && !rest.is_empty() {
        content.push('\n');
    }
    content.push_str(&rest);

    BlockScan {
        next_line: next + usize::from(closed),
        closed,
        content,
    }
}

fn non_blank(fragment: &str) -> &str {
    if fragment.trim().is_empty() {
        ""
    } else {
        fragment
    }
}

/// Recognizes a `$$$` block at the start of `start`.
pub fn math_block(state: &mut BlockState<'_>, start: usize, end: usize, silent: bool) -> bool {
    let marks = state.lines[start];
    let open = marks.text_start();
    if open + MathBlock::FENCE.len() > marks.end
        || !state.src[open..].starts_with(MathBlock::FENCE)
    {
        return false;
    }
    if silent {
        return true;
    }

    let scan = scan_block(state, start, end);
    if !scan.closed {
        log::trace!("math block at line {start} auto-closed at line {}", scan.next_line);
    }
    state.line = scan.next_line;

    let token = state.push(TokenKind::MathBlock, "math", Nesting::Leaf);
    token.content = scan.content;
    token.markup = MathBlock::FENCE.to_string();
    token.lines = Some(LineRange::new(start, scan.next_line - 1));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_support::kinds;
    use crate::test_support::math_parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn block(src: &str) -> (String, Option<LineRange>) {
        let tokens = math_parser().parse(src);
        let token = tokens
            .into_iter()
            .find(|t| t.kind == TokenKind::MathBlock)
            .unwrap();
        (token.content, token.lines)
    }

    #[rstest]
    #[case("$$$ a+b $$$", "a+b")]
    #[case("$$$a+b$$$", "a+b")]
    #[case("  $$$ x $$$  ", "x")]
    #[case("$$$$$$", "")]
    fn single_line(#[case] src: &str, #[case] content: &str) {
        assert_eq!(block(src), (content.to_string(), Some(LineRange::new(0, 0))));
    }

    #[test]
    fn three_lines() {
        assert_eq!(
            block("$$$\na+b\n$$$"),
            ("a+b\n".to_string(), Some(LineRange::new(0, 2)))
        );
    }

    #[test]
    fn auto_close_at_end_of_input() {
        assert_eq!(
            block("$$$\nfoo"),
            ("foo\n".to_string(), Some(LineRange::new(0, 1)))
        );
    }

    #[test]
    fn deeply_indented_fence_does_not_close() {
        let tokens = math_parser().parse("$$$\nx\n    $$$\n$$$\nafter");
        assert_eq!(
            kinds(&tokens),
            vec!["math_block", "paragraph_open", "inline", "paragraph_close"]
        );
        assert_eq!(tokens[0].content, "x\n    $$$\n");
        assert_eq!(tokens[0].lines, Some(LineRange::new(0, 3)));
    }

    #[test]
    fn fragments_on_fence_lines() {
        assert_eq!(
            block("$$$ a\nb\nc $$$"),
            (" a\nb\nc ".to_string(), Some(LineRange::new(0, 2)))
        );
    }

    #[test]
    fn first_fragment_alone() {
        assert_eq!(block("$$$ a\n$$$").0, " a");
    }

    #[test]
    fn interior_indent_is_stripped() {
        assert_eq!(block("  $$$\n    x\n  y\n  $$$").0, "  x\ny\n");
    }

    #[test]
    fn interrupts_paragraph() {
        let tokens = math_parser().parse("text\n$$$\nx\n$$$");
        assert_eq!(
            kinds(&tokens),
            vec!["paragraph_open", "inline", "paragraph_close", "math_block"]
        );
    }

    #[test]
    fn inside_blockquote() {
        let tokens = math_parser().parse("> $$$\n> x\n> $$$\n\nafter");
        assert_eq!(tokens[1].kind, TokenKind::MathBlock);
        assert_eq!(tokens[1].content, "x\n");
        assert_eq!(tokens[1].level, 1);
    }

    #[test]
    fn auto_closes_at_end_of_list_item() {
        let tokens = math_parser().parse("- $$$\n  x\nafter");
        let math = tokens.iter().find(|t| t.kind == TokenKind::MathBlock).unwrap();
        assert_eq!(math.content, "x\n");
        assert_eq!(math.lines, Some(LineRange::new(0, 1)));
        assert_eq!(kinds(&tokens).last(), Some(&"paragraph_close"));
    }

    #[test]
    fn block_content_is_not_inline_parsed() {
        let tokens = math_parser().parse("$$$\n`a` $$b$$\n$$$");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].children.is_empty());
    }

    #[test]
    fn fence_needs_three_dollars() {
        let tokens = math_parser().parse("$$ not a block");
        assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
    }
}
