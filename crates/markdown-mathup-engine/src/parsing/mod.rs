//! # Parsing
//!
//! Two-phase, markdown-it style parsing into a flat token stream.
//!
//! 1. **Blocks**: the normalized source is split into a line table and the
//!    block chain turns it into block tokens. Leaf blocks with inline
//!    content emit an `inline` token holding the raw text.
//! 2. **Inline**: every `inline` token is parsed with the inline chain and
//!    its `children` are filled in.
//!
//! A [`Parser`] holds only compiled, immutable rule lists; every call builds
//! fresh state, so one parser can serve many threads.

pub mod blocks;
pub mod chars;
pub mod inline;
pub mod ruler;
pub mod snapshot;
pub mod source;
pub mod token;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockRule, BlockState};
use inline::{InlineRule, InlineState};
use ruler::RuleChains;
use source::{normalize, rope_to_string};
use token::{Token, TokenKind};

/// Compiled block and inline rule chains.
#[derive(Debug, Clone)]
pub struct Parser {
    block: RuleChains<BlockRule>,
    inline: RuleChains<InlineRule>,
    max_nesting: usize,
}

impl Parser {
    pub fn new(
        block: RuleChains<BlockRule>,
        inline: RuleChains<InlineRule>,
        max_nesting: usize,
    ) -> Self {
        Self {
            block,
            inline,
            max_nesting,
        }
    }

    /// Parses a whole document into block tokens with inline children.
    pub fn parse(&self, src: &str) -> Vec<Token> {
        let src = normalize(src);
        let mut state = BlockState::new(&src, &self.block, self.max_nesting);
        let line_max = state.line_max;
        state.tokenize(0, line_max);

        let mut tokens = state.into_tokens();
        for token in tokens.iter_mut().filter(|t| t.kind == TokenKind::Inline) {
            token.children = self.parse_inline(&token.content);
        }
        log::debug!("parsed {line_max} lines into {} block tokens", tokens.len());
        tokens
    }

    /// Parses `src` as the content of a single inline token.
    pub fn parse_inline(&self, src: &str) -> Vec<Token> {
        let mut state = InlineState::new(src, self.inline.main(), self.max_nesting);
        state.tokenize();
        state.into_tokens()
    }

    /// Parses the contents of an editor buffer.
    pub fn parse_rope(&self, rope: &Rope) -> Vec<Token> {
        self.parse(&rope_to_string(rope))
    }
}
