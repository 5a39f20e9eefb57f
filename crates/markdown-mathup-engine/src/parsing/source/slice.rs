use xi_rope::Rope;

use super::span::Span;

/// Copies an editor rope into a contiguous string for parsing.
///
/// This allocates; parsing needs a single immutable buffer.
pub fn rope_to_string(rope: &Rope) -> String {
    rope.slice_to_cow(..).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Truncation backs off to the previous char boundary. Used for
/// human-readable snapshot output.
pub fn preview(src: &str, sp: Span, max: usize) -> String {
    let mut s = sp.slice(src).to_string();
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
