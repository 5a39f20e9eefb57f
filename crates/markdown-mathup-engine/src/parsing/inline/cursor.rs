/// A byte cursor over inline content with a movable scanning limit.
///
/// Positions are byte offsets into the inline content. The limit bounds
/// every lookahead: bytes at or past it read as end of input, which lets a
/// rule scan a sub-range (the inside of a delimiter pair) without copying.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    limit: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `src`, limited to its full length.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            limit: src.len(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves to `pos`. Callers only pass char boundaries.
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.src.len());
    }

    /// Returns true once the cursor reached the limit.
    pub fn eof(&self) -> bool {
        self.pos >= self.limit
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// Byte at `at`, if it lies before the limit.
    pub fn byte_at(&self, at: usize) -> Option<u8> {
        if at < self.limit {
            self.src.as_bytes().get(at).copied()
        } else {
            None
        }
    }

    /// Checks if the input at the cursor starts with `pat`, within the limit.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.pos + pat.len() <= self.limit && self.src.as_bytes()[self.pos..].starts_with(pat)
    }

    /// The char starting at `at`, if it lies before the limit.
    pub fn char_at(&self, at: usize) -> Option<char> {
        if at < self.limit {
            self.src.get(at..)?.chars().next()
        } else {
            None
        }
    }

    /// The char ending right before `at`; `None` at the start of the content.
    pub fn char_before(&self, at: usize) -> Option<char> {
        self.src.get(..at)?.chars().next_back()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advances past one full char, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.char_at(self.pos)?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Content between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }
}
