//! # Block Parsing
//!
//! Line-oriented block parsing over a [`BlockState`].
//!
//! ## Model
//!
//! The source is split once into a line table (`begin`, `end`, indentation
//! per line). Block rules are tried in chain order at the first unconsumed
//! line; the first rule that accepts the line pushes tokens and advances
//! `state.line`. Container rules (blockquotes, list items) rewrite the marks
//! of the lines they own, recurse through [`BlockState::tokenize`], and
//! restore the marks afterwards.
//!
//! Every rule can also run in *validation* mode (`silent == true`), where it
//! only reports whether it would start at the line. Paragraphs, lists and
//! blockquotes use this to decide which constructs may interrupt them (the
//! rule's alternate chains).
//!
//! ## Modules
//!
//! - **`state`**: `BlockState`, the line table and token sink
//! - **`kinds`**: one module per block construct, each owning its delimiters
//!
//! ## Key Invariants
//!
//! - A rule that returns `true` outside validation mode has advanced `state.line`
//! - Line marks rewritten by a container are restored before it returns
//! - Fenced code and math blocks are raw zones: no block/inline parsing inside

pub mod kinds;
pub mod state;

pub use state::{BlockState, ParentKind};

use super::ruler::Ruler;
use kinds::{block_quote, code_block, code_fence, heading, list, paragraph, thematic_break};

/// A block rule: `(state, start_line, end_line, silent) -> matched`.
pub type BlockRule = fn(&mut BlockState<'_>, usize, usize, bool) -> bool;

/// Every alternate chain a block construct can interrupt.
pub const INTERRUPTS_ALL: &[&str] = &["paragraph", "reference", "blockquote", "list"];
const INTERRUPTS_TEXT: &[&str] = &["paragraph", "reference", "blockquote"];
const INTERRUPTS_NONE: &[&str] = &[];

/// The built-in block chain.
pub fn default_rules() -> Ruler<BlockRule> {
    Ruler::with_rules(&[
        ("code", code_block::code_block as BlockRule, INTERRUPTS_NONE),
        ("fence", code_fence::code_fence as BlockRule, INTERRUPTS_ALL),
        ("blockquote", block_quote::block_quote as BlockRule, INTERRUPTS_ALL),
        ("hr", thematic_break::thematic_break as BlockRule, INTERRUPTS_ALL),
        ("list", list::list as BlockRule, INTERRUPTS_TEXT),
        ("heading", heading::heading as BlockRule, INTERRUPTS_TEXT),
        ("paragraph", paragraph::paragraph as BlockRule, INTERRUPTS_NONE),
    ])
}
