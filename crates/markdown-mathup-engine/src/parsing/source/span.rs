use serde::Serialize;

/// A byte range `[start, end)` into the normalized source buffer.
///
/// Recognizers compute spans instead of doing ad hoc offset arithmetic on
/// string slices; slicing the source with a span yields the exact text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `src` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on char boundaries.
    #[must_use]
    pub fn slice(self, src: &str) -> &str {
        &src[self.start..self.end]
    }
}
