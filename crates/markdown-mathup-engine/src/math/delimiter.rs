use crate::parsing::{chars::is_whitespace, inline::Cursor};

/// A fixed-length delimiter at a position, with its open/close eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    pub start: usize,
    pub len: usize,
    /// The char right after the run is not whitespace.
    pub can_open: bool,
    /// The char right before the run is not whitespace.
    pub can_close: bool,
}

impl DelimiterRun {
    /// Classifies the run `[start, start + len)`.
    ///
    /// The start of the content and the cursor's scanning limit both count
    /// as whitespace.
    pub fn scan(cursor: &Cursor<'_>, start: usize, len: usize) -> Self {
        let before = cursor.char_before(start).unwrap_or(' ');
        let after = cursor.char_at(start + len).unwrap_or(' ');
        Self {
            start,
            len,
            can_open: !is_whitespace(after),
            can_close: !is_whitespace(before),
        }
    }
}
