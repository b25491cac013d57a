use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case(
    "[foo](bar)",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "bar") ")"))"#;
    "inline_link"
)]
#[test_case(
    "[foo](bar \"baz\")",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "bar") " " (link_title "\"" "baz" "\"") ")"))"#;
    "inline_link_with_title"
)]
#[test_case(
    "[foo](u 'title')",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "u") " " (link_title "'" "title" "'") ")"))"#;
    "single_quoted_title"
)]
#[test_case(
    "[foo](u (title))",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "u") " " (link_title "(" "title" ")") ")"))"#;
    "parenthesized_title"
)]
#[test_case(
    "[foo](<u v>)",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "<" "u" " " "v" ">") ")"))"#;
    "angle_bracket_destination_allows_spaces"
)]
#[test_case(
    "[a](b(c)d)",
    r#"(inline (inline_link "[" (link_text "a") "]" "(" (link_destination "b" "(" "c" ")" "d") ")"))"#;
    "destination_with_balanced_parens"
)]
#[test_case(
    "[foo]()",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" ")"))"#;
    "empty_resource"
)]
#[test_case(
    "[foo][bar]",
    r#"(inline (full_reference_link "[" (link_text "foo") "]" (link_label "[" "bar" "]")))"#;
    "full_reference"
)]
#[test_case(
    "[foo][]",
    r#"(inline (collapsed_reference_link "[" (link_text "foo") "]" "[" "]"))"#;
    "collapsed_reference"
)]
#[test_case(
    "[foo]",
    r#"(inline (shortcut_link "[" (link_text "foo") "]"))"#;
    "shortcut"
)]
#[test_case(
    "[*a*](u)",
    r#"(inline (inline_link "[" (link_text (emphasis "*" "a" "*")) "]" "(" (link_destination "u") ")"))"#;
    "emphasis_inside_link_text"
)]
#[test_case(
    "*[foo](u)*",
    r#"(inline (emphasis "*" (inline_link "[" (link_text "foo") "]" "(" (link_destination "u") ")") "*"))"#;
    "link_wins_over_emphasis"
)]
#[test_case(
    "*a [b* c](u)",
    r#"(inline "*" "a" " " (inline_link "[" (link_text "b" "*" " " "c") "]" "(" (link_destination "u") ")"))"#;
    "emphasis_cannot_cross_link_boundary"
)]
#[test_case(
    "[a [b] c](u)",
    r#"(inline "[" "a" " " (shortcut_link "[" (link_text "b") "]") " " "c" "]" "(" "u" ")")"#;
    "inner_link_deactivates_outer_opener"
)]
#[test_case("a] b", r#"(inline "a" "]" " " "b")"#; "unmatched_close_is_literal")]
#[test_case("[foo", r#"(inline "[" "foo")"#; "unclosed_open_is_literal")]
#[test_case(
    "[foo](oops",
    r#"(inline (shortcut_link "[" (link_text "foo") "]") "(" "oops")"#;
    "unclosed_resource_falls_back_to_shortcut"
)]
#[test_case(
    "[a\\]b](u)",
    r#"(inline (inline_link "[" (link_text "a" "\\]" "b") "]" "(" (link_destination "u") ")"))"#;
    "escaped_bracket_stays_in_text"
)]
#[test_case(
    "[foo](\nu\n)",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" "\n" (link_destination "u") "\n" ")"))"#;
    "resource_allows_single_line_breaks"
)]
#[test_case(
    "[foo](u \"a\nb\")",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "u") " " (link_title "\"" "a" "\n" "b" "\"") ")"))"#;
    "title_allows_one_line_break"
)]
#[test_case(
    "[foo](u \"a\n\nb\")",
    r#"(inline (shortcut_link "[" (link_text "foo") "]") "(" "u" " " "\"" "a" "\n" "\n" "b" "\"" ")")"#;
    "blank_line_in_title_kills_the_resource"
)]
#[test_case(
    "[foo](u\t\"t\")",
    r#"(inline (inline_link "[" (link_text "foo") "]" "(" (link_destination "u") "\t" (link_title "\"" "t" "\"") ")"))"#;
    "tab_between_destination_and_title"
)]
fn links(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
