use std::collections::HashMap;

use crate::parsing::token::{Nesting, Token, TokenKind, push_token};

use super::{InlineRule, cursor::Cursor};

/// Mutable inline parse state for the content of one `inline` token.
pub struct InlineState<'a> {
    pub cursor: Cursor<'a>,
    /// Literal text not yet flushed into a `text` token.
    pub pending: String,
    pub tokens: Vec<Token>,
    pub level: u32,
    /// Code-span closers seen so far, keyed by backtick run length.
    pub(crate) backticks: HashMap<usize, usize>,
    pub(crate) backticks_scanned: bool,
    /// `skip_token` results, keyed by start offset.
    cache: HashMap<usize, usize>,
    rules: &'a [InlineRule],
    max_nesting: usize,
}

impl<'a> InlineState<'a> {
    pub fn new(src: &'a str, rules: &'a [InlineRule], max_nesting: usize) -> Self {
        Self {
            cursor: Cursor::new(src),
            pending: String::new(),
            tokens: Vec::new(),
            level: 0,
            backticks: HashMap::new(),
            backticks_scanned: false,
            cache: HashMap::new(),
            rules,
            max_nesting,
        }
    }

    pub fn src(&self) -> &'a str {
        self.cursor.src()
    }

    pub fn into_tokens(mut self) -> Vec<Token> {
        self.push_pending();
        self.tokens
    }

    /// Flushes pending text into a `text` token.
    pub fn push_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.pending);
        push_token(&mut self.tokens, &mut self.level, TokenKind::Text, "", Nesting::Leaf).content =
            content;
    }

    /// Pushes a token, flushing pending text first.
    pub fn push(&mut self, kind: TokenKind, tag: &'static str, nesting: Nesting) -> &mut Token {
        self.push_pending();
        push_token(&mut self.tokens, &mut self.level, kind, tag, nesting)
    }

    /// Moves the cursor past the next inline construct without emitting
    /// tokens, or past one char when no rule matches.
    ///
    /// Results are memoised per start offset, so repeated scans for a closer
    /// stay linear.
    pub fn skip_token(&mut self) {
        let start = self.cursor.pos();
        if let Some(&end) = self.cache.get(&start) {
            self.cursor.set_pos(end);
            return;
        }

        if (self.level as usize) < self.max_nesting {
            let rules = self.rules;
            let mut matched = false;
            for rule in rules {
                self.level += 1;
                matched = rule(self, true);
                self.level -= 1;
                if matched {
                    break;
                }
            }
            if !matched || self.cursor.pos() <= start {
                self.cursor.set_pos(start);
                self.cursor.bump_char();
            }
        } else {
            self.cursor.set_pos(self.cursor.limit());
        }
        self.cache.insert(start, self.cursor.pos());
    }

    /// Runs the rule chain until the cursor reaches its limit.
    pub fn tokenize(&mut self) {
        let rules = self.rules;
        while !self.cursor.eof() {
            let prev = self.cursor.pos();
            let matched = (self.level as usize) < self.max_nesting
                && rules.iter().any(|rule| rule(self, false));

            if matched && self.cursor.pos() > prev {
                continue;
            }
            if matched {
                log::warn!("inline rule matched without advancing at offset {prev}");
            }
            if let Some(c) = self.cursor.bump_char() {
                self.pending.push(c);
            }
        }
        self.push_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::default_rules;
    use pretty_assertions::assert_eq;

    fn run(src: &str) -> Vec<Token> {
        let chains = default_rules().compile();
        let mut state = InlineState::new(src, chains.main(), 100);
        state.tokenize();
        state.into_tokens()
    }

    #[test]
    fn plain_text_is_one_token() {
        let tokens = run("just words, and more!");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].content, "just words, and more!");
    }

    #[test]
    fn pending_is_flushed_before_push() {
        let tokens = run("a `b` c");
        let contents: Vec<&str> = tokens.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["a ", "b", " c"]);
    }

    #[test]
    fn skip_token_jumps_whole_construct() {
        let chains = default_rules().compile();
        let mut state = InlineState::new("`a$$b` rest", chains.main(), 100);
        state.skip_token();
        assert_eq!(state.cursor.pos(), 6);
        assert!(state.tokens.is_empty());
        assert!(state.pending.is_empty());
    }

    #[test]
    fn skip_token_advances_one_char_without_match() {
        let chains = default_rules().compile();
        let mut state = InlineState::new("!x", chains.main(), 100);
        state.skip_token();
        assert_eq!(state.cursor.pos(), 1);
    }

    #[test]
    fn skip_token_is_memoised() {
        let chains = default_rules().compile();
        let mut state = InlineState::new("``x`` y", chains.main(), 100);
        state.skip_token();
        assert_eq!(state.cursor.pos(), 5);
        state.cursor.set_pos(0);
        state.skip_token();
        assert_eq!(state.cursor.pos(), 5);
        assert_eq!(state.cache.get(&0), Some(&5));
    }

    #[test]
    fn nesting_limit_consumes_rest_when_skipping() {
        let chains = default_rules().compile();
        let mut state = InlineState::new("abc def", chains.main(), 0);
        state.skip_token();
        assert_eq!(state.cursor.pos(), 7);
    }
}
