use serde::{Deserialize, Serialize};

/// What a render call does when a math expression fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathErrorPolicy {
    /// Abort the render with [`crate::RenderError::Math`].
    #[default]
    Propagate,
    /// Substitute an escaped error marker and keep rendering.
    Marker,
}

/// Options shared by parsing and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render soft line breaks as `<br>`.
    pub breaks: bool,
    /// Close void tags XHTML style (`<br />`).
    pub xhtml_out: bool,
    /// Maximum block and inline nesting depth.
    pub max_nesting: usize,
    pub math_errors: MathErrorPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            breaks: false,
            xhtml_out: false,
            max_nesting: 100,
            math_errors: MathErrorPolicy::default(),
        }
    }
}
