use crate::parsing::{
    chars::is_space,
    inline::InlineState,
    token::{Nesting, TokenKind},
};

/// A line break inside inline content. Two or more trailing spaces make it
/// hard; otherwise it is soft. Trailing spaces of the line and leading
/// spaces of the next are dropped.
pub fn newline(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.cursor.peek() != Some(b'\n') {
        return false;
    }

    if !silent {
        let trimmed = state.pending.trim_end_matches(' ');
        let trailing = state.pending.len() - trimmed.len();
        state.pending.truncate(trimmed.len());
        if trailing >= 2 {
            state.push(TokenKind::Hardbreak, "br", Nesting::Leaf);
        } else {
            state.push(TokenKind::Softbreak, "br", Nesting::Leaf);
        }
    }

    state.cursor.bump();
    while state.cursor.peek().is_some_and(is_space) {
        state.cursor.bump();
    }
    true
}
