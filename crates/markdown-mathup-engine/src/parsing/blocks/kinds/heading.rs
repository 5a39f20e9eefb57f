use crate::parsing::{
    blocks::BlockState,
    chars::is_space,
    token::{LineRange, Nesting, TokenKind},
};

/// ATX heading with owned delimiter constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;
    const TAGS: [&'static str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

    /// HTML tag for a heading of `level` (1-based, clamped to 1..=6).
    pub fn tag(level: usize) -> &'static str {
        Self::TAGS[level.clamp(1, Self::MAX_LEVEL) - 1]
    }
}

pub fn heading(state: &mut BlockState<'_>, start: usize, _end: usize, silent: bool) -> bool {
    if state.is_code_indented(start) {
        return false;
    }

    let src = state.src;
    let marks = state.lines[start];
    let bytes = src.as_bytes();
    let mut pos = marks.text_start();
    if bytes.get(pos) != Some(&Heading::MARKER) {
        return false;
    }

    let after_marker = state.skip_byte(pos, marks.end, Heading::MARKER);
    let level = after_marker - pos;
    if level > Heading::MAX_LEVEL || (after_marker < marks.end && !is_space(bytes[after_marker])) {
        return false;
    }
    if silent {
        return true;
    }
    pos = after_marker;

    // Strip an optional closing sequence, which must be preceded by a space.
    let mut max = state.skip_spaces_back(marks.end, pos);
    let closing = state.skip_byte_back(max, pos, Heading::MARKER);
    if closing > pos && is_space(bytes[closing - 1]) {
        max = closing;
    }

    state.line = start + 1;
    let tag = Heading::tag(level);
    let lines = Some(LineRange::new(start, start));
    let markup = "#".repeat(level);

    let open = state.push(TokenKind::HeadingOpen, tag, Nesting::Open);
    open.markup = markup.clone();
    open.lines = lines;

    let inline = state.push(TokenKind::Inline, "", Nesting::Leaf);
    inline.content = src[pos..max].trim().to_string();
    inline.lines = lines;

    state.push(TokenKind::HeadingClose, tag, Nesting::Close).markup = markup;
    true
}
