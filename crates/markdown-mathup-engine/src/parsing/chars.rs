//! Character classes shared by block and inline rules.

/// Unicode whitespace as used for delimiter adjacency checks.
///
/// Covers tab through carriage return, space, no-break space, the Ogham space
/// mark, the U+2000..U+200A spaces, narrow no-break space, medium
/// mathematical space and the ideographic space.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{09}'..='\u{0D}'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Space or tab, the only characters that count as line indentation.
pub fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Bytes at which the `text` inline rule stops so other rules get a chance.
pub fn is_terminator(b: u8) -> bool {
    matches!(
        b,
        b'\n'
            | b'!'
            | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'*'
            | b'+'
            | b'-'
            | b':'
            | b'<'
            | b'='
            | b'>'
            | b'@'
            | b'['
            | b'\\'
            | b']'
            | b'^'
            | b'_'
            | b'`'
            | b'{'
            | b'}'
            | b'~'
    )
}
