use thiserror::Error;

/// Errors raised while assembling a rule pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("cannot place rule `{rule}`: no rule named `{anchor}`")]
    UnknownAnchor { anchor: String, rule: String },

    #[error("rule `{0}` is already registered")]
    DuplicateRule(String),
}

/// Errors reported by a math converter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("invalid math expression: {0}")]
    Syntax(String),

    #[error("failed to write MathML: {0}")]
    Output(String),
}

/// Errors that abort a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render math expression `{expression}`: {source}")]
    Math {
        expression: String,
        source: MathError,
    },
}
