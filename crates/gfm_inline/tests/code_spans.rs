use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case(
    "`foo`",
    r#"(inline (code_span (code_span_delimiter "`") "foo" (code_span_delimiter "`")))"#;
    "simple_span"
)]
#[test_case(
    "``foo`bar``",
    r#"(inline (code_span (code_span_delimiter "`" "`") "foo" "`" "bar" (code_span_delimiter "`" "`")))"#;
    "shorter_run_inside_is_content"
)]
#[test_case(
    "`a``b`",
    r#"(inline (code_span (code_span_delimiter "`") "a" "`" "`" "b" (code_span_delimiter "`")))"#;
    "longer_run_inside_is_content"
)]
#[test_case("`foo", r#"(inline "`" "foo")"#; "unclosed_span_is_literal")]
#[test_case(
    "`` ` ``",
    r#"(inline (code_span (code_span_delimiter "`" "`") " " "`" " " (code_span_delimiter "`" "`")))"#;
    "lone_backtick_in_span"
)]
#[test_case(
    "`a\nb`",
    r#"(inline (code_span (code_span_delimiter "`") "a" "\n" "b" (code_span_delimiter "`")))"#;
    "span_crosses_a_soft_break"
)]
#[test_case(
    "`a\\`",
    r#"(inline (code_span (code_span_delimiter "`") "a" "\\" (code_span_delimiter "`")))"#;
    "backslash_cannot_escape_the_closer"
)]
#[test_case(
    "\\`not code\\`",
    r#"(inline "\\`" "not" " " "code" "\\`")"#;
    "escaped_backticks_make_no_span"
)]
#[test_case(
    "*a `b*` c",
    r#"(inline "*" "a" " " (code_span (code_span_delimiter "`") "b" "*" (code_span_delimiter "`")) " " "c")"#;
    "code_span_wins_over_emphasis"
)]
#[test_case(
    "`[not a link](x)`",
    r#"(inline (code_span (code_span_delimiter "`") "[" "not" " " "a" " " "link" "]" "(" "x" ")" (code_span_delimiter "`")))"#;
    "no_links_inside_spans"
)]
#[test_case(
    "`&amp; \\* _x_`",
    r#"(inline (code_span (code_span_delimiter "`") "&" "amp" ";" " " "\\" "*" " " "_" "x" "_" (code_span_delimiter "`")))"#;
    "content_is_verbatim"
)]
#[test_case(
    "a `b` c `d` e",
    r#"(inline "a" " " (code_span (code_span_delimiter "`") "b" (code_span_delimiter "`")) " " "c" " " (code_span (code_span_delimiter "`") "d" (code_span_delimiter "`")) " " "e")"#;
    "multiple_spans"
)]
fn code_spans(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
