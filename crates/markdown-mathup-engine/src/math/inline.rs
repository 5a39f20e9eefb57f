use crate::parsing::{
    inline::InlineState,
    token::{Nesting, TokenKind},
};

use super::delimiter::DelimiterRun;

/// Inline math: `$$...$$`.
pub struct MathInline;

impl MathInline {
    pub const DELIM: &'static [u8; 2] = b"$$";
    pub const MARKUP: &'static str = "$$";
}

/// Recognizes `$$...$$` at the cursor.
///
/// Never matches in validation mode, so `skip_token` steps over math
/// openers one char at a time. An opener followed by whitespace is kept as
/// literal text; an opener without a closer leaves the cursor untouched.
pub fn math_inline(state: &mut InlineState<'_>, silent: bool) -> bool {
    if !state.cursor.starts_with(MathInline::DELIM) {
        return false;
    }
    if silent {
        return false;
    }

    let start = state.cursor.pos();
    let opener = DelimiterRun::scan(&state.cursor, start, MathInline::DELIM.len());
    if !opener.can_open {
        state.cursor.bump_n(opener.len);
        state.pending.push_str(MathInline::MARKUP);
        return true;
    }

    state.cursor.set_pos(start + opener.len);
    let mut closer = None;
    while !state.cursor.eof() {
        let pos = state.cursor.pos();
        if state.cursor.starts_with(MathInline::DELIM)
            && DelimiterRun::scan(&state.cursor, pos, MathInline::DELIM.len()).can_close
        {
            closer = Some(pos);
            break;
        }
        state.skip_token();
    }

    let Some(close) = closer else {
        state.cursor.set_pos(start);
        return false;
    };

    let limit = state.cursor.limit();
    state.cursor.set_limit(close);
    let content = state.cursor.slice(start + opener.len, close);
    let token = state.push(TokenKind::MathInline, "math", Nesting::Leaf);
    token.content = content.to_string();
    token.markup = MathInline::MARKUP.to_string();
    state.cursor.set_pos(close + MathInline::DELIM.len());
    state.cursor.set_limit(limit);
    true
}
