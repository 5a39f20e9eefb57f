//! # Inline Kinds
//!
//! One module per inline construct. Each owns its syntax delimiters as
//! associated constants and exposes its rule function.
//!
//! - **`text`**: runs of bytes no other rule can start on
//! - **`newline`**: soft and hard line breaks
//! - **`escape`**: `Escape::MARKER` followed by ASCII punctuation
//! - **`code_span`**: `CodeSpan::TICK` runs, a raw zone for every later rule

pub mod code_span;
pub mod escape;
pub mod newline;
pub mod text;

pub use code_span::CodeSpan;
pub use escape::Escape;
