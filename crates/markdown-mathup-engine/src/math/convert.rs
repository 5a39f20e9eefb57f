//! Math to markup conversion.

use pulldown_latex::{
    Parser, Storage,
    config::{DisplayMode, RenderConfig},
    mathml::push_mathml,
};

use crate::{
    error::{MathError, RenderError},
    options::MathErrorPolicy,
    parsing::token::Token,
};

/// Whether an expression sits in running text or on its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

impl MathMode {
    /// CSS class carried by error markers.
    pub fn class(self) -> &'static str {
        match self {
            MathMode::Inline => "math-inline",
            MathMode::Display => "math-display",
        }
    }
}

/// Converts a math expression to markup.
///
/// Implementations are shared by every render call of a pipeline, possibly
/// across threads.
pub trait MathRenderer: Send + Sync {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, MathError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str, MathMode) -> Result<String, MathError> + Send + Sync,
{
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, MathError> {
        self(expression, mode)
    }
}

/// LaTeX to MathML via `pulldown-latex`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl MathRenderer for LatexRenderer {
    fn render(&self, latex: &str, mode: MathMode) -> Result<String, MathError> {
        let storage = Storage::new();
        let parser = Parser::new(latex, &storage);
        let config = RenderConfig {
            display_mode: match mode {
                MathMode::Inline => DisplayMode::Inline,
                MathMode::Display => DisplayMode::Block,
            },
            ..Default::default()
        };

        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();
        if !errors.is_empty() {
            return Err(MathError::Syntax(errors.join("; ")));
        }

        let mut mathml = String::new();
        push_mathml(&mut mathml, events.into_iter(), config)
            .map_err(|e| MathError::Output(e.to_string()))?;
        Ok(mathml)
    }
}

/// Renders the expression carried by `token`, applying `policy` on failure.
pub fn render_token<R: MathRenderer + ?Sized>(
    renderer: &R,
    token: &Token,
    mode: MathMode,
    policy: MathErrorPolicy,
) -> Result<String, RenderError> {
    match renderer.render(&token.content, mode) {
        Ok(markup) => Ok(markup),
        Err(source) => match policy {
            MathErrorPolicy::Propagate => Err(RenderError::Math {
                expression: token.content.clone(),
                source,
            }),
            MathErrorPolicy::Marker => {
                log::warn!("math expression {:?} failed: {source}", token.content);
                Ok(error_marker(&token.content, &source.to_string(), mode))
            }
        },
    }
}

/// Escaped source of a failed expression, with the error as its title.
pub fn error_marker(expression: &str, error: &str, mode: MathMode) -> String {
    let mode_class = mode.class();
    let escaped_error = html_escape::encode_double_quoted_attribute(error);
    let escaped_expression = html_escape::encode_double_quoted_attribute(expression);
    format!(
        r#"<span class="math math-error {mode_class}" title="{escaped_error}"><code>{escaped_expression}</code></span>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::token::{Nesting, TokenKind};
    use pretty_assertions::assert_eq;

    fn math_token(content: &str) -> Token {
        let mut token = Token::new(TokenKind::MathInline, "math", Nesting::Leaf);
        token.content = content.to_string();
        token
    }

    fn failing(_: &str, _: MathMode) -> Result<String, MathError> {
        Err(MathError::Syntax("unexpected `}`".into()))
    }

    #[test]
    fn renders_inline_latex() {
        let mathml = LatexRenderer.render("x^2", MathMode::Inline).unwrap();
        assert!(mathml.contains("<math"));
        assert!(mathml.contains("</math>"));
    }

    #[test]
    fn renders_display_latex() {
        let mathml = LatexRenderer.render(r"\frac{a}{b}", MathMode::Display).unwrap();
        assert!(mathml.contains("<math"));
        assert!(mathml.contains("<mfrac"));
    }

    #[test]
    fn invalid_latex_is_an_error() {
        let err = LatexRenderer.render(r"\frac{a", MathMode::Inline).unwrap_err();
        assert!(matches!(err, MathError::Syntax(ref msg) if !msg.is_empty()));
    }

    #[test]
    fn closures_are_renderers() {
        let upper = |src: &str, _: MathMode| Ok::<_, MathError>(src.to_uppercase());
        let out = render_token(&upper, &math_token("ab"), MathMode::Inline, Default::default());
        assert_eq!(out.unwrap(), "AB");
    }

    #[test]
    fn propagate_policy_returns_error() {
        let err = render_token(
            &failing,
            &math_token("a}"),
            MathMode::Inline,
            MathErrorPolicy::Propagate,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::Math { ref expression, .. } if expression == "a}"));
    }

    #[test]
    fn marker_policy_substitutes_escaped_source() {
        let out = render_token(
            &failing,
            &math_token("a<b}"),
            MathMode::Display,
            MathErrorPolicy::Marker,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"<span class="math math-error math-display" title="invalid math expression: unexpected `}`"><code>a&lt;b}</code></span>"#
        );
    }
}
