use crate::parsing::{
    blocks::BlockState,
    token::{LineRange, Nesting, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            CodeFence::BACKTICK => Some(FenceKind::Backticks),
            CodeFence::TILDE => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    pub fn marker(self) -> u8 {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    /// Minimum run length of a fence marker.
    pub const MIN_LEN: usize = 3;
}

/// Fenced code: a run of three or more backticks or tildes, closed by a run
/// of the same marker at least as long. Unterminated fences run to the end
/// of the enclosing range.
pub fn code_fence(state: &mut BlockState<'_>, start: usize, end: usize, silent: bool) -> bool {
    if state.is_code_indented(start) {
        return false;
    }

    let src = state.src;
    let marks = state.lines[start];
    let bytes = src.as_bytes();
    let opener = marks.text_start();
    if opener + CodeFence::MIN_LEN > marks.end {
        return false;
    }
    let Some(kind) = FenceKind::from_marker(bytes[opener]) else {
        return false;
    };

    let run_end = state.skip_byte(opener, marks.end, kind.marker());
    let len = run_end - opener;
    if len < CodeFence::MIN_LEN {
        return false;
    }

    let markup = &src[opener..run_end];
    let params = &src[run_end..marks.end];
    if kind == FenceKind::Backticks && params.contains('`') {
        return false;
    }
    if silent {
        return true;
    }

    let mut next = start;
    let mut closed = false;
    loop {
        next += 1;
        if next >= end {
            break;
        }

        let m = state.lines[next];
        let pos = m.text_start();
        if pos < m.end && m.indent < state.blk_indent {
            break;
        }
        if bytes.get(pos).copied() != Some(kind.marker()) || pos >= m.end {
            continue;
        }
        if state.is_code_indented(next) {
            continue;
        }
        let close_end = state.skip_byte(pos, m.end, kind.marker());
        if close_end - pos < len {
            continue;
        }
        if state.skip_spaces(close_end, m.end) < m.end {
            continue;
        }
        closed = true;
        break;
    }

    let indent = marks.indent;
    state.line = next + usize::from(closed);

    let content = state.get_lines(start + 1, next, indent, true);
    let token = state.push(TokenKind::Fence, "code", Nesting::Leaf);
    token.info = params.trim().to_string();
    token.content = content;
    token.markup = markup.to_string();
    token.lines = Some(LineRange::new(start, state.line - 1));
    true
}
