use serde::Serialize;

/// The kind of a token emitted by block or inline rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    ParagraphOpen,
    ParagraphClose,
    HeadingOpen,
    HeadingClose,
    BlockquoteOpen,
    BlockquoteClose,
    BulletListOpen,
    BulletListClose,
    OrderedListOpen,
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    Hr,
    CodeBlock,
    Fence,
    /// Container for inline content; its `children` hold the inline tokens.
    Inline,
    Text,
    Softbreak,
    Hardbreak,
    CodeInline,
    /// `$$...$$` inline math.
    MathInline,
    /// `$$$` fenced block math.
    MathBlock,
}

impl TokenKind {
    /// Stable snake_case name, used in snapshots and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::ParagraphClose => "paragraph_close",
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::HeadingClose => "heading_close",
            TokenKind::BlockquoteOpen => "blockquote_open",
            TokenKind::BlockquoteClose => "blockquote_close",
            TokenKind::BulletListOpen => "bullet_list_open",
            TokenKind::BulletListClose => "bullet_list_close",
            TokenKind::OrderedListOpen => "ordered_list_open",
            TokenKind::OrderedListClose => "ordered_list_close",
            TokenKind::ListItemOpen => "list_item_open",
            TokenKind::ListItemClose => "list_item_close",
            TokenKind::Hr => "hr",
            TokenKind::CodeBlock => "code_block",
            TokenKind::Fence => "fence",
            TokenKind::Inline => "inline",
            TokenKind::Text => "text",
            TokenKind::Softbreak => "softbreak",
            TokenKind::Hardbreak => "hardbreak",
            TokenKind::CodeInline => "code_inline",
            TokenKind::MathInline => "math_inline",
            TokenKind::MathBlock => "math_block",
        }
    }
}

/// Whether a token opens, closes, or is self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    Open,
    Close,
    Leaf,
}

/// Inclusive range of source lines a block token was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub first: usize,
    pub last: usize,
}

impl LineRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }
}

/// A single parser output token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// HTML tag name used by the default renderer.
    pub tag: &'static str,
    pub nesting: Nesting,
    /// Nesting level at which the token was pushed.
    pub level: u32,
    /// Raw content; never includes the delimiters recorded in `markup`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub markup: String,
    /// Fence info string or ordered list item number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    /// True for tokens produced by block rules.
    pub block: bool,
    /// Hidden tokens render nothing (paragraphs of tight lists).
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<LineRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, tag: &'static str, nesting: Nesting) -> Self {
        Self {
            kind,
            tag,
            nesting,
            level: 0,
            content: String::new(),
            markup: String::new(),
            info: String::new(),
            attrs: Vec::new(),
            block: false,
            hidden: false,
            lines: None,
            children: Vec::new(),
        }
    }

    /// Looks up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Appends a token to `tokens`, maintaining `level` the way both block and
/// inline states do: closing tokens step out before being recorded, opening
/// tokens step in after.
pub(crate) fn push_token<'t>(
    tokens: &'t mut Vec<Token>,
    level: &mut u32,
    kind: TokenKind,
    tag: &'static str,
    nesting: Nesting,
) -> &'t mut Token {
    let mut token = Token::new(kind, tag, nesting);
    if nesting == Nesting::Close {
        *level = level.saturating_sub(1);
    }
    token.level = *level;
    if nesting == Nesting::Open {
        *level += 1;
    }
    let idx = tokens.len();
    tokens.push(token);
    &mut tokens[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tracks_levels() {
        let mut tokens = vec![];
        let mut level = 0;
        push_token(&mut tokens, &mut level, TokenKind::ParagraphOpen, "p", Nesting::Open);
        push_token(&mut tokens, &mut level, TokenKind::Inline, "", Nesting::Leaf);
        push_token(&mut tokens, &mut level, TokenKind::ParagraphClose, "p", Nesting::Close);

        let levels: Vec<u32> = tokens.iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![0, 1, 0]);
        assert_eq!(level, 0);
    }

    #[test]
    fn attr_lookup() {
        let mut token = Token::new(TokenKind::OrderedListOpen, "ol", Nesting::Open);
        token.attrs.push(("start", "3".to_string()));
        assert_eq!(token.attr("start"), Some("3"));
        assert_eq!(token.attr("class"), None);
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(TokenKind::MathInline.name(), "math_inline");
        assert_eq!(TokenKind::MathBlock.name(), "math_block");
    }
}
