use crate::parsing::{
    blocks::BlockState,
    token::{LineRange, Nesting, TokenKind},
};

/// Indented code: lines at least four columns past the block base.
pub fn code_block(state: &mut BlockState<'_>, start: usize, end: usize, _silent: bool) -> bool {
    if !state.is_code_indented(start) {
        return false;
    }

    let mut next = start + 1;
    let mut last = next;
    while next < end {
        if state.is_empty(next) {
            next += 1;
            continue;
        }
        if state.is_code_indented(next) {
            next += 1;
            last = next;
            continue;
        }
        break;
    }

    state.line = last;
    let mut content = state.get_lines(start, last, state.blk_indent + 4, false);
    content.push('\n');

    let token = state.push(TokenKind::CodeBlock, "code", Nesting::Leaf);
    token.content = content;
    token.lines = Some(LineRange::new(start, last - 1));
    true
}
