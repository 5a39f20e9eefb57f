use crate::parsing::{
    blocks::{BlockState, ParentKind},
    source::{LineMarks, measure_indent},
    token::{LineRange, Nesting, TokenKind},
};

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';
    /// Alternate chain holding the rules allowed to end a lazy blockquote.
    pub const CHAIN: &'static str = "blockquote";

    /// Marks for a quoted line once its `>` (and one optional space) is consumed.
    fn strip_prefix(src: &str, marks: LineMarks) -> LineMarks {
        let bytes = src.as_bytes();
        let mut begin = marks.text_start() + 1;
        if begin < marks.end && bytes[begin] == b' ' {
            begin += 1;
        }
        let (shift, indent) = measure_indent(src, begin, marks.end);
        LineMarks {
            begin,
            end: marks.end,
            shift,
            indent,
        }
    }
}

pub fn block_quote(state: &mut BlockState<'_>, start: usize, end: usize, silent: bool) -> bool {
    if state.is_code_indented(start) {
        return false;
    }
    let bytes = state.src.as_bytes();
    if bytes.get(state.lines[start].text_start()) != Some(&BlockQuote::PREFIX) {
        return false;
    }
    if silent {
        return true;
    }

    let saved: Vec<LineMarks> = state.lines[start..end].to_vec();
    let old_indent = state.blk_indent;
    let mut last_line_empty = false;
    let mut next = start;

    while next < end {
        let marks = state.lines[next];
        if marks.is_blank() || marks.indent < old_indent {
            break;
        }

        if bytes[marks.text_start()] == BlockQuote::PREFIX {
            let inner = BlockQuote::strip_prefix(state.src, marks);
            last_line_empty = inner.is_blank();
            state.lines[next] = inner;
            next += 1;
            continue;
        }

        // Lazy continuation: only a paragraph left open may absorb the line.
        if last_line_empty || state.terminates(BlockQuote::CHAIN, next, end) {
            break;
        }
        state.lines[next].indent -= old_indent;
        next += 1;
    }

    let old_parent = state.parent;
    state.parent = ParentKind::Blockquote;
    state.blk_indent = 0;

    let open = state.push(TokenKind::BlockquoteOpen, "blockquote", Nesting::Open);
    open.markup = ">".to_string();
    open.lines = Some(LineRange::new(start, next - 1));

    state.tokenize(start, next);

    state
        .push(TokenKind::BlockquoteClose, "blockquote", Nesting::Close)
        .markup = ">".to_string();

    state.lines[start..end].copy_from_slice(&saved);
    state.blk_indent = old_indent;
    state.parent = old_parent;
    state.line = next;
    true
}
