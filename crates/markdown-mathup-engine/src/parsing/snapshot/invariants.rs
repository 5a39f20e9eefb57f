use crate::parsing::{
    source::{line_table, normalize},
    token::{Nesting, Token, TokenKind},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Every block token's line range is ordered and inside the document
/// - Open and close tokens pair up with matching tags
/// - Each token's level equals the number of enclosing open tokens
/// - Only `inline` tokens carry children, and children never nest deeper
///   than their own open/close structure allows
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, tokens: &[Token]) {
    let line_count = line_table(&normalize(src)).len();
    for t in tokens {
        if let Some(lines) = t.lines {
            assert!(
                lines.first <= lines.last && lines.last < line_count,
                "{} lines out of bounds: {:?} (document has {} lines)",
                t.kind.name(),
                lines,
                line_count
            );
        }
        assert!(t.block, "{} emitted by the block phase without block flag", t.kind.name());
        if t.kind != TokenKind::Inline {
            assert!(
                t.children.is_empty(),
                "{} carries children",
                t.kind.name()
            );
        }
        for child in &t.children {
            assert!(!child.block, "inline child {} flagged as block", child.kind.name());
        }
        check_nesting(&t.children);
    }
    check_nesting(tokens);
}

fn check_nesting(tokens: &[Token]) {
    let mut open: Vec<&Token> = Vec::new();
    for t in tokens {
        match t.nesting {
            Nesting::Open => {
                assert_eq!(t.level as usize, open.len(), "bad level on {}", t.kind.name());
                open.push(t);
            }
            Nesting::Close => {
                let opener = open
                    .pop()
                    .unwrap_or_else(|| panic!("unmatched {}", t.kind.name()));
                assert_eq!(opener.tag, t.tag, "{} closes {}", t.kind.name(), opener.kind.name());
                assert_eq!(t.level, opener.level, "bad level on {}", t.kind.name());
            }
            Nesting::Leaf => {
                assert_eq!(t.level as usize, open.len(), "bad level on {}", t.kind.name());
            }
        }
    }
    assert!(
        open.is_empty(),
        "unclosed tokens: {:?}",
        open.iter().map(|t| t.kind.name()).collect::<Vec<_>>()
    );
}
