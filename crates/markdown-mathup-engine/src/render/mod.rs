//! # HTML Rendering
//!
//! Turns a token stream into HTML. Tokens without a registered rule go
//! through [`HtmlRenderer::render_token`], which writes the opening or
//! closing tag and decides on line breaks from the neighbouring tokens;
//! content-bearing kinds (text, code, breaks) have rules installed by
//! default, and plugins add rules for their own kinds.

use std::{borrow::Cow, collections::HashMap, fmt};

use crate::{
    error::RenderError,
    options::RenderOptions,
    parsing::token::{Nesting, Token, TokenKind},
};

/// A render rule: `(tokens, index, options) -> html`.
pub type RenderRule =
    Box<dyn Fn(&[Token], usize, &RenderOptions) -> Result<String, RenderError> + Send + Sync>;

/// Escapes `&`, `<`, `>` and `"`.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

pub struct HtmlRenderer {
    rules: HashMap<TokenKind, RenderRule>,
}

impl fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.rules.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("HtmlRenderer").field("rules", &kinds).finish()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// A renderer with the built-in rules.
    pub fn new() -> Self {
        let mut renderer = Self {
            rules: HashMap::new(),
        };
        renderer.set_rule(TokenKind::Text, text);
        renderer.set_rule(TokenKind::CodeInline, code_inline);
        renderer.set_rule(TokenKind::CodeBlock, code_block);
        renderer.set_rule(TokenKind::Fence, fence);
        renderer.set_rule(TokenKind::Hardbreak, hardbreak);
        renderer.set_rule(TokenKind::Softbreak, softbreak);
        renderer
    }

    /// Installs (or replaces) the rule for `kind`.
    pub fn set_rule<F>(&mut self, kind: TokenKind, rule: F)
    where
        F: Fn(&[Token], usize, &RenderOptions) -> Result<String, RenderError>
            + Send
            + Sync
            + 'static,
    {
        self.rules.insert(kind, Box::new(rule));
    }

    pub fn has_rule(&self, kind: TokenKind) -> bool {
        self.rules.contains_key(&kind)
    }

    /// Renders block tokens, descending into the children of `inline` tokens.
    pub fn render(&self, tokens: &[Token], options: &RenderOptions) -> Result<String, RenderError> {
        let mut out = String::new();
        for idx in 0..tokens.len() {
            if tokens[idx].kind == TokenKind::Inline {
                out.push_str(&self.render_inline(&tokens[idx].children, options)?);
            } else {
                out.push_str(&self.render_one(tokens, idx, options)?);
            }
        }
        Ok(out)
    }

    /// Renders a list of inline tokens.
    pub fn render_inline(
        &self,
        tokens: &[Token],
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        for idx in 0..tokens.len() {
            out.push_str(&self.render_one(tokens, idx, options)?);
        }
        Ok(out)
    }

    fn render_one(
        &self,
        tokens: &[Token],
        idx: usize,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        match self.rules.get(&tokens[idx].kind) {
            Some(rule) => rule(tokens, idx, options),
            None => Ok(Self::render_token(tokens, idx, options)),
        }
    }

    /// Default output for tokens without a rule: just the tag.
    ///
    /// Block tags get a trailing newline unless an opening tag is directly
    /// followed by inline content, a hidden token, or its own closing tag.
    pub fn render_token(tokens: &[Token], idx: usize, options: &RenderOptions) -> String {
        let token = &tokens[idx];
        if token.hidden {
            return String::new();
        }

        let mut out = String::new();
        // Hidden paragraphs swallow the break a following block would need.
        if token.block && token.nesting != Nesting::Close && idx > 0 && tokens[idx - 1].hidden {
            out.push('\n');
        }

        out.push_str(if token.nesting == Nesting::Close { "</" } else { "<" });
        out.push_str(token.tag);
        out.push_str(&render_attrs(token));
        if token.nesting == Nesting::Leaf && options.xhtml_out {
            out.push_str(" /");
        }

        let mut need_lf = token.block;
        if token.block && token.nesting == Nesting::Open {
            if let Some(next) = tokens.get(idx + 1) {
                if next.kind == TokenKind::Inline
                    || next.hidden
                    || (next.nesting == Nesting::Close && next.tag == token.tag)
                {
                    need_lf = false;
                }
            }
        }
        out.push_str(if need_lf { ">\n" } else { ">" });
        out
    }
}

fn render_attrs(token: &Token) -> String {
    token
        .attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", escape_html(value)))
        .collect()
}

fn text(tokens: &[Token], idx: usize, _: &RenderOptions) -> Result<String, RenderError> {
    Ok(escape_html(&tokens[idx].content).into_owned())
}

fn code_inline(tokens: &[Token], idx: usize, _: &RenderOptions) -> Result<String, RenderError> {
    let token = &tokens[idx];
    Ok(format!(
        "<code{}>{}</code>",
        render_attrs(token),
        escape_html(&token.content)
    ))
}

fn code_block(tokens: &[Token], idx: usize, _: &RenderOptions) -> Result<String, RenderError> {
    let token = &tokens[idx];
    Ok(format!(
        "<pre{}><code>{}</code></pre>\n",
        render_attrs(token),
        escape_html(&token.content)
    ))
}

fn fence(tokens: &[Token], idx: usize, _: &RenderOptions) -> Result<String, RenderError> {
    let token = &tokens[idx];
    let body = escape_html(&token.content);
    Ok(match token.info.split_whitespace().next() {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{body}</code></pre>\n",
            escape_html(lang)
        ),
        None => format!("<pre><code>{body}</code></pre>\n"),
    })
}

fn hardbreak(_: &[Token], _: usize, options: &RenderOptions) -> Result<String, RenderError> {
    Ok(if options.xhtml_out { "<br />\n" } else { "<br>\n" }.to_string())
}

fn softbreak(tokens: &[Token], idx: usize, options: &RenderOptions) -> Result<String, RenderError> {
    if options.breaks {
        hardbreak(tokens, idx, options)
    } else {
        Ok("\n".to_string())
    }
}
