//! # Inline Parsing
//!
//! Cursor-based inline parsing over the content of `inline` block tokens.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing, once per `inline` token, and
//! writes the result into that token's `children`. Rules are tried in chain
//! order at the cursor; the first that matches pushes tokens (or appends to
//! the pending text buffer) and advances the cursor. When nothing matches,
//! one char becomes pending text.
//!
//! In validation mode (`silent == true`) a rule only moves the cursor past
//! the construct it recognizes. [`InlineState::skip_token`] uses this to
//! step over whole constructs when a rule looks ahead for a closing
//! delimiter, so code spans act as raw zones for everything after them.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` with position and scanning limit
//! - **`state`**: `InlineState`, the pending buffer and token sink
//! - **`kinds`**: one module per inline construct, each owning its delimiters

pub mod cursor;
pub mod kinds;
pub mod state;

pub use cursor::Cursor;
pub use state::InlineState;

use super::ruler::Ruler;
use kinds::{code_span, escape, newline, text};

/// An inline rule: `(state, silent) -> matched`.
pub type InlineRule = fn(&mut InlineState<'_>, bool) -> bool;

const NO_ALT: &[&str] = &[];

/// The built-in inline chain.
pub fn default_rules() -> Ruler<InlineRule> {
    Ruler::with_rules(&[
        ("text", text::text as InlineRule, NO_ALT),
        ("newline", newline::newline as InlineRule, NO_ALT),
        ("escape", escape::escape as InlineRule, NO_ALT),
        ("backticks", code_span::code_span as InlineRule, NO_ALT),
    ])
}
