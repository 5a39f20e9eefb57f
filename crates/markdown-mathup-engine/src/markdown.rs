use xi_rope::Rope;

use crate::{
    error::{PipelineError, RenderError},
    math::MathPlugin,
    options::RenderOptions,
    parsing::{
        Parser,
        blocks::{self, BlockRule},
        inline::{self, InlineRule},
        ruler::Ruler,
        source::rope_to_string,
        token::Token,
    },
    render::HtmlRenderer,
};

/// An extension hooking rules and render hooks into a pipeline under
/// construction.
pub trait Plugin {
    fn register(&self, md: &mut MarkdownBuilder) -> Result<(), PipelineError>;
}

/// A pipeline under construction.
///
/// Rule chains stay editable until [`MarkdownBuilder::build`] compiles them.
#[derive(Debug)]
pub struct MarkdownBuilder {
    pub block: Ruler<BlockRule>,
    pub inline: Ruler<InlineRule>,
    pub renderer: HtmlRenderer,
    options: RenderOptions,
}

impl MarkdownBuilder {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            block: blocks::default_rules(),
            inline: inline::default_rules(),
            renderer: HtmlRenderer::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn use_plugin<P: Plugin + ?Sized>(mut self, plugin: &P) -> Result<Self, PipelineError> {
        plugin.register(&mut self)?;
        Ok(self)
    }

    pub fn build(self) -> Markdown {
        log::debug!(
            "pipeline built: block {:?}, inline {:?}",
            self.block.names(),
            self.inline.names()
        );
        Markdown {
            parser: Parser::new(
                self.block.compile(),
                self.inline.compile(),
                self.options.max_nesting,
            ),
            renderer: self.renderer,
            options: self.options,
        }
    }
}

/// A built, immutable parse and render pipeline.
///
/// Cheap to share: every call constructs its own parse state.
#[derive(Debug)]
pub struct Markdown {
    parser: Parser,
    renderer: HtmlRenderer,
    options: RenderOptions,
}

impl Default for Markdown {
    fn default() -> Self {
        MarkdownBuilder::new(RenderOptions::default()).build()
    }
}

impl Markdown {
    pub fn builder(options: RenderOptions) -> MarkdownBuilder {
        MarkdownBuilder::new(options)
    }

    /// The host pipeline with LaTeX math enabled.
    pub fn with_math(options: RenderOptions) -> Result<Self, PipelineError> {
        Ok(Self::builder(options)
            .use_plugin(&MathPlugin::default())?
            .build())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn parse(&self, src: &str) -> Vec<Token> {
        self.parser.parse(src)
    }

    pub fn render(&self, src: &str) -> Result<String, RenderError> {
        self.render_tokens(&self.parse(src))
    }

    /// Renders the contents of an editor buffer.
    pub fn render_rope(&self, rope: &Rope) -> Result<String, RenderError> {
        self.render(&rope_to_string(rope))
    }

    pub fn render_tokens(&self, tokens: &[Token]) -> Result<String, RenderError> {
        self.renderer.render(tokens, &self.options)
    }
}
