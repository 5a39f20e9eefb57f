use crate::parsing::{
    blocks::{BlockState, ParentKind},
    chars::is_space,
    source::lines::TAB_STOP,
    token::{LineRange, Nesting, TokenKind},
};

/// A list item marker: `-`, `+`, `*`, or digits followed by `.` / `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet(u8),
    Ordered { number: u32, delim: u8 },
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];
    pub const ORDERED_DELIMS: [u8; 2] = [b'.', b')'];
    /// Alternate chain holding the rules allowed to end a list.
    pub const CHAIN: &'static str = "list";
    const MAX_DIGITS: usize = 9;

    /// Recognizes a marker at the start of `text` (a line after its
    /// indentation). Returns the marker and its byte length.
    ///
    /// The marker must be followed by a space, a tab, or the end of the line.
    pub fn scan(text: &str) -> Option<(Self, usize)> {
        let bytes = text.as_bytes();
        let first = *bytes.first()?;

        let (marker, len) = if Self::BULLETS.contains(&first) {
            (ListMarker::Bullet(first), 1)
        } else if first.is_ascii_digit() {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > Self::MAX_DIGITS {
                return None;
            }
            let delim = *bytes.get(digits)?;
            if !Self::ORDERED_DELIMS.contains(&delim) {
                return None;
            }
            let number = text[..digits].parse().ok()?;
            (ListMarker::Ordered { number, delim }, digits + 1)
        } else {
            return None;
        };

        match bytes.get(len) {
            Some(&b) if !is_space(b) => None,
            _ => Some((marker, len)),
        }
    }

    /// The byte that must match for following items to continue the list.
    pub fn delimiter(self) -> u8 {
        match self {
            ListMarker::Bullet(b) => b,
            ListMarker::Ordered { delim, .. } => delim,
        }
    }

    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered { .. })
    }
}

pub fn list(state: &mut BlockState<'_>, start: usize, end: usize, silent: bool) -> bool {
    if state.is_code_indented(start) {
        return false;
    }

    let interrupts_paragraph = silent
        && state.parent == ParentKind::Paragraph
        && state.lines[start].indent >= state.blk_indent;

    let Some((marker, marker_len)) = ListMarker::scan(state.line_text(start)) else {
        return false;
    };
    let mut after_marker = state.lines[start].text_start() + marker_len;

    if interrupts_paragraph {
        // Only `1.` lists and non-empty items may interrupt a paragraph.
        if matches!(marker, ListMarker::Ordered { number, .. } if number != 1) {
            return false;
        }
        let line_end = state.lines[start].end;
        if state.skip_spaces(after_marker, line_end) >= line_end {
            return false;
        }
    }
    if silent {
        return true;
    }

    let (open_kind, close_kind, tag) = if marker.is_ordered() {
        (TokenKind::OrderedListOpen, TokenKind::OrderedListClose, "ol")
    } else {
        (TokenKind::BulletListOpen, TokenKind::BulletListClose, "ul")
    };
    let markup = char::from(marker.delimiter()).to_string();

    let list_idx = state.tokens.len();
    let open = state.push(open_kind, tag, Nesting::Open);
    open.markup = markup.clone();
    if let ListMarker::Ordered { number, .. } = marker {
        if number != 1 {
            open.attrs.push(("start", number.to_string()));
        }
    }

    let old_parent = state.parent;
    state.parent = ParentKind::List;

    let src = state.src;
    let bytes = src.as_bytes();
    let mut tight = true;
    let mut prev_empty_end = false;
    let mut next = start;

    loop {
        let marks = state.lines[next];
        let initial = marks.indent + after_marker - marks.text_start();
        let mut offset = initial;
        let mut pos = after_marker;
        while pos < marks.end {
            match bytes[pos] {
                b'\t' => offset += TAB_STOP - offset % TAB_STOP,
                b' ' => offset += 1,
                _ => break,
            }
            pos += 1;
        }

        let content_start = pos;
        let mut indent_after_marker = if content_start >= marks.end {
            1
        } else {
            offset - initial
        };
        // Five or more spaces after the marker start indented code in the item.
        if indent_after_marker > 4 {
            indent_after_marker = 1;
        }
        let indent = initial + indent_after_marker;

        let item_idx = state.tokens.len();
        let item = state.push(TokenKind::ListItemOpen, "li", Nesting::Open);
        item.markup = markup.clone();
        if marker.is_ordered() {
            item.info = src[marks.text_start()..after_marker - 1].to_string();
        }

        let old_tight = state.tight;
        let old_indent = state.blk_indent;
        state.blk_indent = indent;
        state.tight = true;
        state.lines[next].shift = content_start - marks.begin;
        state.lines[next].indent = offset;

        if content_start >= marks.end && state.is_empty(next + 1) {
            // An item may begin with at most one blank line.
            state.line = (next + 2).min(end);
        } else {
            state.tokenize(next, end);
        }

        if !state.tight || prev_empty_end {
            tight = false;
        }
        prev_empty_end = state.line - next > 1 && state.is_empty(state.line - 1);

        state.blk_indent = old_indent;
        state.lines[next] = marks;
        state.tight = old_tight;

        state
            .push(TokenKind::ListItemClose, "li", Nesting::Close)
            .markup = markup.clone();
        state.tokens[item_idx].lines = Some(LineRange::new(next, state.line - 1));
        next = state.line;

        if next >= end
            || state.lines[next].indent < state.blk_indent
            || state.is_code_indented(next)
            || state.terminates(ListMarker::CHAIN, next, end)
        {
            break;
        }
        match ListMarker::scan(state.line_text(next)) {
            Some((m, len)) if m.delimiter() == marker.delimiter() => {
                after_marker = state.lines[next].text_start() + len;
            }
            _ => break,
        }
    }

    state.push(close_kind, tag, Nesting::Close).markup = markup;
    state.tokens[list_idx].lines = Some(LineRange::new(start, next - 1));
    state.line = next;
    state.parent = old_parent;

    if tight {
        hide_tight_paragraphs(state, list_idx);
    }
    true
}

/// Hides the paragraphs directly inside the items of a tight list.
fn hide_tight_paragraphs(state: &mut BlockState<'_>, list_idx: usize) {
    let level = state.level + 2;
    let mut i = list_idx + 2;
    while i + 2 < state.tokens.len() {
        if state.tokens[i].level == level && state.tokens[i].kind == TokenKind::ParagraphOpen {
            state.tokens[i].hidden = true;
            state.tokens[i + 2].hidden = true;
            i += 2;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_support::{host, kinds};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("- a", Some((ListMarker::Bullet(b'-'), 1)))]
    #[case("+", Some((ListMarker::Bullet(b'+'), 1)))]
    #[case("12) b", Some((ListMarker::Ordered { number: 12, delim: b')' }, 3)))]
    #[case("1.x", None)]
    #[case("-x", None)]
    #[case("1234567890. too long", None)]
    #[case("a. no", None)]
    fn scan_markers(#[case] text: &str, #[case] expected: Option<(ListMarker, usize)>) {
        assert_eq!(ListMarker::scan(text), expected);
    }

    #[test]
    fn tight_bullet_list_hides_paragraphs() {
        let tokens = host().parse("- a\n- b");
        assert_eq!(
            kinds(&tokens),
            vec![
                "bullet_list_open",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "list_item_close",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "list_item_close",
                "bullet_list_close",
            ]
        );
        assert!(tokens[2].hidden && tokens[4].hidden);
        assert!(tokens[7].hidden && tokens[9].hidden);
        assert_eq!(tokens[3].content, "a");
        assert_eq!(tokens[0].lines, Some(LineRange::new(0, 1)));
    }

    #[test]
    fn loose_list_keeps_paragraphs() {
        let tokens = host().parse("- a\n\n- b");
        assert!(tokens.iter().all(|t| !t.hidden));
    }

    #[test]
    fn ordered_list_records_start() {
        let tokens = host().parse("3. x\n4. y");
        assert_eq!(tokens[0].kind, TokenKind::OrderedListOpen);
        assert_eq!(tokens[0].attr("start"), Some("3"));
        assert_eq!(tokens[1].info, "3");
        assert_eq!(tokens[6].info, "4");
    }

    #[test]
    fn changing_bullet_starts_new_list() {
        let tokens = host().parse("- a\n+ b");
        let opens = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::BulletListOpen)
            .count();
        assert_eq!(opens, 2);
    }

    #[test]
    fn nested_list() {
        let tokens = host().parse("- a\n  - b");
        assert_eq!(
            kinds(&tokens),
            vec![
                "bullet_list_open",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "bullet_list_open",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "list_item_close",
                "bullet_list_close",
                "list_item_close",
                "bullet_list_close",
            ]
        );
        assert_eq!(tokens[8].content, "b");
    }

    #[test]
    fn only_first_item_interrupts_paragraph() {
        let tokens = host().parse("text\n2. two");
        assert_eq!(kinds(&tokens), vec!["paragraph_open", "inline", "paragraph_close"]);
        assert_eq!(tokens[1].content, "text\n2. two");
    }

    #[test]
    fn item_continuation_is_stripped() {
        let tokens = host().parse("- first\n  second");
        assert_eq!(tokens[3].content, "first\nsecond");
    }
}
