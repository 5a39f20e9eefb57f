use crate::parsing::{
    chars::is_space,
    inline::InlineState,
    token::{Nesting, TokenKind},
};

/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const MARKER: u8 = b'\\';

    /// ASCII punctuation a backslash turns into a literal.
    pub fn is_escapable(c: char) -> bool {
        c.is_ascii_punctuation()
    }
}

pub fn escape(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.cursor.peek() != Some(Escape::MARKER) {
        return false;
    }
    let start = state.cursor.pos();
    let Some(next) = state.cursor.char_at(start + 1) else {
        return false;
    };

    state.cursor.bump();
    if next == '\n' {
        if !silent {
            state.push(TokenKind::Hardbreak, "br", Nesting::Leaf);
        }
        state.cursor.bump();
        while state.cursor.peek().is_some_and(is_space) {
            state.cursor.bump();
        }
        return true;
    }

    state.cursor.bump_char();
    if !silent {
        if Escape::is_escapable(next) {
            state.pending.push(next);
        } else {
            let raw = state.cursor.slice(start, state.cursor.pos());
            state.pending.push_str(raw);
        }
    }
    true
}
