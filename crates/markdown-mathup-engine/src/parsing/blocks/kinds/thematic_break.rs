use crate::parsing::{
    blocks::BlockState,
    chars::is_space,
    token::{LineRange, Nesting, TokenKind},
};

/// Thematic break: three or more `*`, `-` or `_`, optionally space separated.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'*', b'-', b'_'];
    pub const MIN_COUNT: usize = 3;

    /// Returns the marker byte and its count when `text` is a thematic break.
    pub fn parse(text: &str) -> Option<(u8, usize)> {
        let bytes = text.as_bytes();
        let marker = *bytes.first()?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }
        let mut count = 0;
        for &b in bytes {
            if b == marker {
                count += 1;
            } else if !is_space(b) {
                return None;
            }
        }
        (count >= Self::MIN_COUNT).then_some((marker, count))
    }
}

pub fn thematic_break(state: &mut BlockState<'_>, start: usize, _end: usize, silent: bool) -> bool {
    if state.is_code_indented(start) {
        return false;
    }
    let Some((marker, count)) = ThematicBreak::parse(state.line_text(start)) else {
        return false;
    };
    if silent {
        return true;
    }

    state.line = start + 1;
    let token = state.push(TokenKind::Hr, "hr", Nesting::Leaf);
    token.markup = char::from(marker).to_string().repeat(count);
    token.lines = Some(LineRange::new(start, start));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::test_support::{host, kinds};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("---", Some((b'-', 3)))]
    #[case("* * *", Some((b'*', 3)))]
    #[case("_____", Some((b'_', 5)))]
    #[case("--", None)]
    #[case("-- a", None)]
    #[case("+++", None)]
    fn parse_markers(#[case] text: &str, #[case] expected: Option<(u8, usize)>) {
        assert_eq!(ThematicBreak::parse(text), expected);
    }

    #[test]
    fn break_between_paragraphs() {
        let tokens = host().parse("a\n***\nb");
        assert_eq!(
            kinds(&tokens),
            vec![
                "paragraph_open",
                "inline",
                "paragraph_close",
                "hr",
                "paragraph_open",
                "inline",
                "paragraph_close",
            ]
        );
        assert_eq!(tokens[3].markup, "***");
    }
}
