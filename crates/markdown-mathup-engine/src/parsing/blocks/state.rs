use crate::parsing::{
    chars::is_space,
    ruler::RuleChains,
    source::{LineMarks, lines::TAB_STOP, line_table},
    token::{Nesting, Token, TokenKind, push_token},
};

use super::BlockRule;

/// The construct currently driving nested block parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Root,
    Blockquote,
    List,
    Paragraph,
}

/// Mutable block-level parse state for exactly one document.
///
/// Owns the line table and the token sink. Rules receive it by `&mut` and
/// must leave no state behind other than what they write here.
pub struct BlockState<'a> {
    /// Normalized source buffer.
    pub src: &'a str,
    /// Per-line offsets; container rules rewrite and restore entries.
    pub lines: Vec<LineMarks>,
    /// Base indentation (columns) established by enclosing containers.
    pub blk_indent: usize,
    /// Line the current rule should resume from once it returns.
    pub line: usize,
    /// Number of lines in the document.
    pub line_max: usize,
    /// False once an item of the current list has been separated by blank lines.
    pub tight: bool,
    pub parent: ParentKind,
    pub level: u32,
    pub tokens: Vec<Token>,
    rules: &'a RuleChains<BlockRule>,
    max_nesting: usize,
}

impl<'a> BlockState<'a> {
    pub fn new(src: &'a str, rules: &'a RuleChains<BlockRule>, max_nesting: usize) -> Self {
        let lines = line_table(src);
        let line_max = lines.len();
        Self {
            src,
            lines,
            blk_indent: 0,
            line: 0,
            line_max,
            tight: false,
            parent: ParentKind::Root,
            level: 0,
            tokens: Vec::new(),
            rules,
            max_nesting,
        }
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Rules registered under the alternate chain `chain`.
    pub fn rules_for(&self, chain: &str) -> &'a [BlockRule] {
        self.rules.alt(chain)
    }

    /// True when any rule of `chain` accepts `line` in validation mode.
    pub fn terminates(&mut self, chain: &str, line: usize, end: usize) -> bool {
        self.rules_for(chain)
            .iter()
            .any(|rule| rule(self, line, end, true))
    }

    /// Out-of-range lines count as empty.
    pub fn is_empty(&self, line: usize) -> bool {
        self.lines.get(line).is_none_or(LineMarks::is_blank)
    }

    pub fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_max && self.is_empty(from) {
            from += 1;
        }
        from
    }

    /// True when `line` is indented four or more columns past the block base.
    pub fn is_code_indented(&self, line: usize) -> bool {
        self.lines[line].indent >= self.blk_indent + 4
    }

    /// Text of `line` after its indentation.
    pub fn line_text(&self, line: usize) -> &'a str {
        self.lines[line].text_span().slice(self.src)
    }

    /// Skips spaces and tabs forward, stopping at `max`.
    pub fn skip_spaces(&self, mut pos: usize, max: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < max && is_space(bytes[pos]) {
            pos += 1;
        }
        pos
    }

    /// Skips spaces and tabs backwards, never going below `min`.
    pub fn skip_spaces_back(&self, mut pos: usize, min: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos > min && is_space(bytes[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    /// Skips repeats of `b` forward, stopping at `max`.
    pub fn skip_byte(&self, mut pos: usize, max: usize, b: u8) -> usize {
        let bytes = self.src.as_bytes();
        while pos < max && bytes[pos] == b {
            pos += 1;
        }
        pos
    }

    /// Skips repeats of `b` backwards, never going below `min`.
    pub fn skip_byte_back(&self, mut pos: usize, min: usize, b: u8) -> usize {
        let bytes = self.src.as_bytes();
        while pos > min && bytes[pos - 1] == b {
            pos -= 1;
        }
        pos
    }

    /// Joins lines `[begin, end)`, stripping up to `indent` columns from each.
    ///
    /// Bytes inside a line's recorded indentation (such as a list marker the
    /// owning container has folded into it) count as one column each. When a
    /// tab overshoots `indent`, the excess columns are re-emitted as spaces.
    /// Lines are newline-terminated except the last, unless `keep_last_lf`.
    pub fn get_lines(&self, begin: usize, end: usize, indent: usize, keep_last_lf: bool) -> String {
        let bytes = self.src.as_bytes();
        let mut out = String::new();

        for line in begin..end.min(self.lines.len()) {
            let marks = self.lines[line];
            let mut line_indent = 0;
            let mut first = marks.begin;

            while first < marks.end && line_indent < indent {
                match bytes[first] {
                    b' ' => line_indent += 1,
                    b'\t' => line_indent += TAB_STOP - line_indent % TAB_STOP,
                    _ if first - marks.begin < marks.shift => line_indent += 1,
                    _ => break,
                }
                first += 1;
            }

            if line_indent > indent {
                out.extend(std::iter::repeat_n(' ', line_indent - indent));
            }
            out.push_str(&self.src[first..marks.end]);

            if line + 1 < end || keep_last_lf {
                out.push('\n');
            }
        }
        out
    }

    /// Pushes a block token, maintaining nesting levels.
    pub fn push(&mut self, kind: TokenKind, tag: &'static str, nesting: Nesting) -> &mut Token {
        let token = push_token(&mut self.tokens, &mut self.level, kind, tag, nesting);
        token.block = true;
        token
    }

    /// Runs the block rule chain over lines `[start, end)`.
    ///
    /// Stops early on a non-blank line indented below `blk_indent`, which
    /// means the enclosing container has ended.
    pub fn tokenize(&mut self, start: usize, end: usize) {
        let rules = self.rules;
        let mut line = start;
        let mut has_empty_lines = false;

        while line < end {
            line = self.skip_empty_lines(line).min(end);
            self.line = line;
            if line >= end {
                break;
            }
            if self.lines[line].indent < self.blk_indent {
                break;
            }
            if self.level as usize >= self.max_nesting {
                log::warn!("block nesting limit {} reached at line {line}", self.max_nesting);
                self.line = end;
                break;
            }

            let prev = self.line;
            let matched = rules.main().iter().any(|rule| rule(self, line, end, false));
            if !matched || self.line <= prev {
                // Paragraph accepts any line; only a misbehaving plugin gets here.
                log::warn!("no block rule consumed line {line}");
                self.line = line + 1;
            }

            self.tight = !has_empty_lines;
            line = self.line;

            if line > 0 && self.is_empty(line - 1) {
                has_empty_lines = true;
            }
            if line < end && self.is_empty(line) {
                has_empty_lines = true;
                line += 1;
                self.line = line;
            }
        }
    }
}
