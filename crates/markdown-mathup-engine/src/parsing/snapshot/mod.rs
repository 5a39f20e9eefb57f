//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a token stream as an indented, stable text dump
//!   for `insta` snapshots
//! - **`invariants`**: Structural checks on parser output (line ranges inside
//!   the document, balanced open/close tokens, consistent levels)
//!
//! Parsing behaviour is pinned by snapshot tests over markdown fixtures rather
//! than a separate grammar. A dump shows token kinds, source lines, markup and
//! content, with inline children nested under their `inline` token.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
