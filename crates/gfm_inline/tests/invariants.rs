//! Whole-tree property checks run across a corpus of inputs: lossless
//! cover, delimiter symmetry, link non-nesting, and reparse idempotence.

use gfm_inline::{parse_inline, SyntaxElement, SyntaxKind, SyntaxNode};

mod harness;

static CORPUS: &[&str] = &[
    "",
    "plain text only",
    "*foo* **bar** ***baz***",
    "_foo_ __bar__ _foo_bar baz_",
    "*hi***yes**",
    "*foo**bar**baz*",
    "~~del~~ and ~single~ and ~~~inert~~~",
    "`code` ``code with ` tick`` `unclosed",
    "*a `b*` c",
    "[foo](bar \"baz\") [foo][bar] [foo][] [foo]",
    "![alt](img.png) ![alt][] ![a [b](u) c](x)",
    "[a [b] c](u) [foo](oops",
    "<http://example.com/a(b)> <user@example.com> <not an autolink",
    "<b>bold</b> <!-- c --> <?pi?> <!D x> <![CDATA[y]]>",
    "\\*escaped\\* \\\\ &amp; &#35; &#x22; &nope; &#;",
    "hard  \nbreak \\\nhere soft\nline",
    "unmatched ] and ( and < and ` and * and _",
    "***strong** in em*",
    "*em **strong** em*",
    "[*emphasis* in `code` link](dest (title))",
    "a*\"foo\"*b",
    "интра*национальное* слово",
    "[link](<with spaces> 'and\ntitle')",
    "![*nested* ![deep](x)](y)",
    "`` ` `` backtick in span",
];

fn walk(node: &SyntaxNode, f: &mut impl FnMut(&SyntaxNode)) {
    f(node);
    for child in node.children() {
        if let SyntaxElement::Node(child_node) = child {
            walk(child_node, f);
        }
    }
}

fn delimiter_text(element: &SyntaxElement) -> &str {
    element
        .as_token()
        .expect("emphasis delimiters must be tokens")
        .text()
}

#[test]
fn lossless_cover() {
    for input in CORPUS {
        // The harness asserts text() == input internally.
        harness::parse(input);
    }
}

#[test]
fn reparse_is_isomorphic() {
    for input in CORPUS {
        let first = parse_inline(input);
        let second = parse_inline(&first.text());
        assert_eq!(
            first.to_string(),
            second.to_string(),
            "reparsing the serialized tree must not change it for {input:?}"
        );
    }
}

#[test]
fn spans_are_contiguous() {
    for input in CORPUS {
        let tree = parse_inline(input);
        walk(&tree, &mut |node| {
            let mut position = node.span().start;
            for child in node.children() {
                assert_eq!(
                    child.span().start,
                    position,
                    "children must tile their parent's span in {input:?}"
                );
                position = child.span().end;
            }
            assert_eq!(position, node.span().end);
        });
    }
}

#[test]
fn code_span_delimiters_match() {
    for input in CORPUS {
        let tree = parse_inline(input);
        walk(&tree, &mut |node| {
            if node.kind() != SyntaxKind::CODE_SPAN {
                return;
            }
            let children = node.children();
            let open = children
                .first()
                .and_then(SyntaxElement::as_node)
                .expect("a code span starts with its opening delimiter");
            let close = children
                .last()
                .and_then(SyntaxElement::as_node)
                .expect("a code span ends with its closing delimiter");
            assert_eq!(open.kind(), SyntaxKind::CODE_SPAN_DELIMITER);
            assert_eq!(close.kind(), SyntaxKind::CODE_SPAN_DELIMITER);
            assert_eq!(
                open.span().len(),
                close.span().len(),
                "code span delimiters must have identical length in {input:?}"
            );
        });
    }
}

#[test]
fn emphasis_delimiters_match() {
    for input in CORPUS {
        let tree = parse_inline(input);
        walk(&tree, &mut |node| {
            let delimiter_count = match node.kind() {
                SyntaxKind::EMPHASIS => 1,
                SyntaxKind::STRONG_EMPHASIS => 2,
                _ => return,
            };
            let children = node.children();
            for index in 0..delimiter_count {
                let open = delimiter_text(&children[index]);
                let close = delimiter_text(&children[children.len() - 1 - index]);
                assert_eq!(
                    open, close,
                    "emphasis must open and close with the same character in {input:?}"
                );
                assert!(open == "*" || open == "_");
            }
        });
    }
}

#[test]
fn link_text_contains_no_links() {
    for input in CORPUS {
        let tree = parse_inline(input);
        walk(&tree, &mut |node| {
            if node.kind() != SyntaxKind::LINK_TEXT {
                return;
            }
            walk(node, &mut |inner| {
                assert!(
                    !inner.kind().is_link_shape(),
                    "a link text may not contain another link in {input:?}"
                );
            });
        });
    }
}

#[test]
fn serializes_with_spans() {
    let tree = parse_inline("*a*");
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "INLINE",
            "start": 0,
            "end": 3,
            "children": [{
                "kind": "EMPHASIS",
                "start": 0,
                "end": 3,
                "children": [
                    { "kind": "STAR", "start": 0, "end": 1, "text": "*" },
                    { "kind": "WORD", "start": 1, "end": 2, "text": "a" },
                    { "kind": "STAR", "start": 2, "end": 3, "text": "*" }
                ]
            }]
        })
    );
}
