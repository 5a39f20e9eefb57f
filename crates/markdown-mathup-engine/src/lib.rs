pub mod error;
pub mod markdown;
pub mod math;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::{MathError, PipelineError, RenderError};
pub use markdown::{Markdown, MarkdownBuilder, Plugin};
pub use math::{LatexRenderer, MathMode, MathPlugin, MathRenderer};
pub use options::{MathErrorPolicy, RenderOptions};
pub use parsing::{
    Parser,
    token::{LineRange, Nesting, Token, TokenKind},
};
pub use render::HtmlRenderer;
