//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their token dumps (.snap) are co-located in `fixtures/`
//! and parsed with the math rules enabled.

use crate::parsing::{
    snapshot,
    test_support::{host, kinds},
    token::TokenKind,
};
use crate::test_support::math_parser;
use pretty_assertions::assert_eq;

// Fixture-based snapshot tests

#[test]
fn fixture_inline_math() {
    assert_fixture("inline_math");
}

#[test]
fn fixture_block_math() {
    assert_fixture("block_math");
}

#[test]
fn fixture_math_in_containers() {
    assert_fixture("math_in_containers");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let tokens = math_parser().parse(&md);
    snapshot::invariants(&md, &tokens);

    let dump = snapshot::normalize(&tokens);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, dump);
    });
}

// Invariant tests

/// Inputs mixing every construct, checked for structural soundness.
#[test]
fn invariants_hold_on_mixed_documents() {
    let docs = [
        "",
        "\n\n\n",
        "# h\n\n> a\n> - b\n>   $$$\n>   x\n",
        "- a\n\n  $$$\n  b\n\n- c $$d$$\n",
        "```\n$$$\n```\n$$$\n```\n",
        "    $$$\n    x\n\n$$$ y",
        "1. a\n2. b\n   > c\n\n***\n",
        "$$a\nb$$ `c` \\$$",
    ];
    for doc in docs {
        let tokens = math_parser().parse(doc);
        snapshot::invariants(doc, &tokens);
    }
}

/// Without math rules the same source stays plain markdown.
#[test]
fn host_ignores_math_syntax() {
    let tokens = host().parse("$$$\nx\n$$$");
    assert_eq!(
        kinds(&tokens),
        vec!["paragraph_open", "inline", "paragraph_close"]
    );
    assert!(
        tokens[1]
            .children
            .iter()
            .all(|t| t.kind != TokenKind::MathInline)
    );
}

/// Raw zones (code spans, fences) never produce math.
#[test]
fn raw_zones_suppress_math() {
    let tokens = math_parser().parse("`$$x$$`\n\n```\n$$$\ny\n$$$\n```");
    assert_eq!(
        kinds(&tokens),
        vec!["paragraph_open", "inline", "paragraph_close", "fence"]
    );
    assert_eq!(kinds(&tokens[1].children), vec!["code_inline"]);
    assert_eq!(tokens[3].content, "$$$\ny\n$$$\n");
}

/// Unclosed constructs become text or run to the end of their container.
#[test]
fn unclosed_constructs() {
    let tokens = math_parser().parse("$$x and `y");
    assert_eq!(kinds(&tokens[1].children), vec!["text"]);
    assert_eq!(tokens[1].children[0].content, "$$x and `y");

    let tokens = math_parser().parse("> $$$\n> a\n\nb");
    assert_eq!(
        kinds(&tokens),
        vec![
            "blockquote_open",
            "math_block",
            "blockquote_close",
            "paragraph_open",
            "inline",
            "paragraph_close",
        ]
    );
    assert_eq!(tokens[1].content, "a\n");
}

/// Test empty document produces no tokens.
#[test]
fn empty_document() {
    assert!(math_parser().parse("").is_empty());
    assert!(math_parser().parse("\n\n\n").is_empty());
}

#[test]
fn crlf_input_matches_lf() {
    let lf = math_parser().parse("$$$\na\n$$$\n\nb $$c$$\n");
    let crlf = math_parser().parse("$$$\r\na\r\n$$$\r\n\r\nb $$c$$\r\n");
    assert_eq!(lf, crlf);
}
