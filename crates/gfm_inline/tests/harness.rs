use gfm_inline::{parse_inline, SyntaxNode};

/// Parse an input and check the lossless-cover invariant on the way out:
/// concatenating the text of every leaf must reproduce the input exactly.
#[allow(unused)]
pub fn parse(input: &str) -> SyntaxNode {
    let tree = parse_inline(input);
    assert_eq!(
        tree.text(),
        input,
        "the tree's leaves must cover the input byte-for-byte"
    );
    tree
}

/// Test that the input parses into the expected structure, written in the
/// tree's compact Display notation.
#[allow(unused)]
pub fn run_tree_test(input: &str, expected: &str) {
    let tree = parse(input);
    assert_eq!(expected, tree.to_string(), "for input: {input:?}");
}
