//! # Math
//!
//! `$$inline$$` and `$$$` block math for the parsing pipeline.
//!
//! ## Syntax
//!
//! - **Inline**: `$$...$$`. The opener must be followed by a non-whitespace
//!   char and the closer preceded by one; nested constructs (code spans,
//!   escapes) are stepped over while looking for the closer.
//! - **Block**: a line starting with `$$$`. Closes on the same line when the
//!   trimmed remainder ends with `$$$`, otherwise at the first later line
//!   ending with `$$$` indented less than four columns past the block base.
//!   Unclosed blocks run to the end of the enclosing container.
//!
//! ## Modules
//!
//! - **`delimiter`**: whitespace adjacency of delimiter runs
//! - **`inline`** / **`block`**: the two recognizers
//! - **`convert`**: `MathRenderer` and the LaTeX to MathML implementation

pub mod block;
pub mod convert;
pub mod delimiter;
pub mod inline;

use std::sync::Arc;

use crate::{
    error::PipelineError,
    markdown::{MarkdownBuilder, Plugin},
    parsing::{
        blocks::{BlockRule, INTERRUPTS_ALL},
        inline::InlineRule,
        token::TokenKind,
    },
};

pub use block::{BlockScan, MathBlock};
pub use convert::{LatexRenderer, MathMode, MathRenderer};
pub use delimiter::DelimiterRun;
pub use inline::MathInline;

/// Registers both math recognizers and their render hooks.
pub struct MathPlugin<R> {
    renderer: Arc<R>,
}

impl<R: MathRenderer + 'static> MathPlugin<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}

impl Default for MathPlugin<LatexRenderer> {
    fn default() -> Self {
        Self::new(LatexRenderer)
    }
}

impl<R: MathRenderer + 'static> Plugin for MathPlugin<R> {
    fn register(&self, md: &mut MarkdownBuilder) -> Result<(), PipelineError> {
        md.inline
            .before("escape", "math_inline", inline::math_inline as InlineRule, &[])?;
        md.block.after(
            "blockquote",
            "math_block",
            block::math_block as BlockRule,
            INTERRUPTS_ALL,
        )?;

        let renderer = Arc::clone(&self.renderer);
        md.renderer
            .set_rule(TokenKind::MathInline, move |tokens, idx, options| {
                convert::render_token(&*renderer, &tokens[idx], MathMode::Inline, options.math_errors)
            });

        let renderer = Arc::clone(&self.renderer);
        md.renderer
            .set_rule(TokenKind::MathBlock, move |tokens, idx, options| {
                let mut html = convert::render_token(
                    &*renderer,
                    &tokens[idx],
                    MathMode::Display,
                    options.math_errors,
                )?;
                html.push('\n');
                Ok(html)
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Markdown, RenderOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_rules_in_order() {
        let mut md = Markdown::builder(RenderOptions::default());
        MathPlugin::default().register(&mut md).unwrap();
        assert_eq!(
            md.inline.names(),
            vec!["text", "newline", "math_inline", "escape", "backticks"]
        );
        assert_eq!(
            md.block.names(),
            vec![
                "code",
                "fence",
                "blockquote",
                "math_block",
                "hr",
                "list",
                "heading",
                "paragraph",
            ]
        );
    }

    #[test]
    fn registering_twice_fails() {
        let md = Markdown::builder(RenderOptions::default())
            .use_plugin(&MathPlugin::default())
            .unwrap();
        let err = md.use_plugin(&MathPlugin::default()).err();
        assert_eq!(err, Some(PipelineError::DuplicateRule("math_inline".into())));
    }

    #[test]
    fn block_hook_appends_one_newline() {
        let md = Markdown::builder(RenderOptions::default())
            .use_plugin(&MathPlugin::new(|src: &str, _: MathMode| {
                Ok::<_, crate::MathError>(format!("<m>{src}</m>"))
            }))
            .unwrap()
            .build();
        assert_eq!(md.render("$$$\na+b\n$$$").unwrap(), "<m>a+b\n</m>\n");
        assert_eq!(md.render("x $$y$$").unwrap(), "<p>x <m>y</m></p>\n");
    }

    #[test]
    fn shared_across_threads() {
        let md = Arc::new(Markdown::with_math(RenderOptions::default()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let md = Arc::clone(&md);
                std::thread::spawn(move || md.render(&format!("$$x_{i}$$")).unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().contains("<math"));
        }
    }
}
