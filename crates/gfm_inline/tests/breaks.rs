use test_case::test_case;

use gfm_inline::SyntaxKind;
use harness::{parse, run_tree_test};

mod harness;

#[test_case("foo\nbar", r#"(inline "foo" "\n" "bar")"#; "soft_break")]
#[test_case("foo\r\nbar", r#"(inline "foo" "\r\n" "bar")"#; "crlf_soft_break")]
#[test_case("foo  \nbar", r#"(inline "foo" "  \n" "bar")"#; "two_spaces_hard_break")]
#[test_case("foo   \nbar", r#"(inline "foo" "   \n" "bar")"#; "many_spaces_hard_break")]
#[test_case("foo\\\nbar", r#"(inline "foo" "\\\n" "bar")"#; "backslash_hard_break")]
#[test_case("foo \nbar", r#"(inline "foo" " " "\n" "bar")"#; "one_space_is_not_a_hard_break")]
#[test_case("foo  bar", r#"(inline "foo" "  " "bar")"#; "trailing_spaces_without_newline")]
fn breaks(input: &str, expected: &str) {
    run_tree_test(input, expected);
}

#[test_case("foo\nbar", 1, SyntaxKind::SOFT_LINE_BREAK; "soft_kind")]
#[test_case("foo  \nbar", 1, SyntaxKind::HARD_LINE_BREAK; "hard_kind")]
#[test_case("foo\\\nbar", 1, SyntaxKind::HARD_LINE_BREAK; "backslash_kind")]
#[test_case("foo \nbar", 2, SyntaxKind::SOFT_LINE_BREAK; "spaced_soft_kind")]
fn break_kinds(input: &str, child: usize, kind: SyntaxKind) {
    let tree = parse(input);
    assert_eq!(tree.children()[child].kind(), kind);
}

#[test]
fn hard_break_bounds_flanking() {
    // The delimiter after a break is preceded by whitespace, so it can only
    // open, and emphasis still pairs across the break.
    let tree = parse("*foo  \nbar*");
    assert_eq!(
        tree.to_string(),
        r#"(inline (emphasis "*" "foo" "  \n" "bar" "*"))"#
    );
}
