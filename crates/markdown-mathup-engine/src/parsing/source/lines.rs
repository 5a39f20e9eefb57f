use super::span::Span;

/// Columns a tab advances to (the next multiple of this value).
pub const TAB_STOP: usize = 4;

/// Offsets of a single source line.
///
/// Container rules (blockquotes, list items) temporarily rewrite the marks of
/// the lines they own so nested rules see the line as starting after the
/// container prefix. The owner restores the original marks afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarks {
    /// Byte offset where the line starts.
    pub begin: usize,
    /// Byte offset of the line end, excluding the newline.
    pub end: usize,
    /// Bytes of leading indentation (from `begin` to the first content char).
    pub shift: usize,
    /// Leading indentation measured in columns, tabs expanded.
    pub indent: usize,
}

impl LineMarks {
    /// Byte offset of the first non-indentation character.
    pub fn text_start(&self) -> usize {
        self.begin + self.shift
    }

    /// A line is blank when nothing but indentation precedes its end.
    pub fn is_blank(&self) -> bool {
        self.text_start() >= self.end
    }

    /// Byte span of the line content after indentation.
    pub fn text_span(&self) -> Span {
        Span::new(self.text_start().min(self.end), self.end)
    }
}

/// Measures leading spaces and tabs in `src[begin..end]`.
///
/// Returns `(bytes, columns)`.
pub fn measure_indent(src: &str, begin: usize, end: usize) -> (usize, usize) {
    let mut shift = 0;
    let mut indent = 0;
    for &b in &src.as_bytes()[begin..end] {
        match b {
            b' ' => indent += 1,
            b'\t' => indent += TAB_STOP - indent % TAB_STOP,
            _ => break,
        }
        shift += 1;
    }
    (shift, indent)
}

/// Builds the per-line offset table for a normalized source buffer.
///
/// A trailing newline does not open an extra empty line, so `"a\n"` and
/// `"a"` both yield a single line and `""` yields none.
pub fn line_table(src: &str) -> Vec<LineMarks> {
    let mut out = Vec::new();
    let mut begin = 0usize;
    for raw in src.split_inclusive('\n') {
        let end = begin + raw.trim_end_matches('\n').len();
        let (shift, indent) = measure_indent(src, begin, end);
        out.push(LineMarks {
            begin,
            end,
            shift,
            indent,
        });
        begin += raw.len();
    }
    out
}
