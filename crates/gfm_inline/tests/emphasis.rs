use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case("*foo*", r#"(inline (emphasis "*" "foo" "*"))"#; "star_emphasis")]
#[test_case("_foo_", r#"(inline (emphasis "_" "foo" "_"))"#; "underscore_emphasis")]
#[test_case("**foo**", r#"(inline (strong_emphasis "*" "*" "foo" "*" "*"))"#; "star_strong")]
#[test_case("__foo__", r#"(inline (strong_emphasis "_" "_" "foo" "_" "_"))"#; "underscore_strong")]
#[test_case(
    "***foo***",
    r#"(inline (emphasis "*" (strong_emphasis "*" "*" "foo" "*" "*") "*"))"#;
    "triple_is_emphasis_around_strong"
)]
#[test_case("*foo bar*", r#"(inline (emphasis "*" "foo" " " "bar" "*"))"#; "emphasis_with_spaces")]
#[test_case("*foo_bar*", r#"(inline (emphasis "*" "foo" "_" "bar" "*"))"#; "inert_underscore_inside_star")]
#[test_case("_foo_bar", r#"(inline "_" "foo" "_" "bar")"#; "intraword_underscore_does_not_open")]
#[test_case("5*6*78", r#"(inline "5" (emphasis "*" "6" "*") "78")"#; "intraword_star_opens")]
#[test_case("* foo*", r#"(inline "*" " " "foo" "*")"#; "opener_before_whitespace_fails")]
#[test_case("*foo", r#"(inline "*" "foo")"#; "unclosed_opener_stays_literal")]
#[test_case("foo*", r#"(inline "foo" "*")"#; "unopened_closer_stays_literal")]
#[test_case("_foo*", r#"(inline "_" "foo" "*")"#; "mismatched_kinds_do_not_pair")]
#[test_case("**foo*", r#"(inline "*" (emphasis "*" "foo" "*"))"#; "longer_opener_keeps_leftover")]
#[test_case("*foo**", r#"(inline (emphasis "*" "foo" "*") "*")"#; "longer_closer_keeps_leftover")]
#[test_case(
    "*foo **bar** baz*",
    r#"(inline (emphasis "*" "foo" " " (strong_emphasis "*" "*" "bar" "*" "*") " " "baz" "*"))"#;
    "strong_nested_in_emphasis"
)]
#[test_case(
    "*foo**bar**baz*",
    r#"(inline (emphasis "*" "foo" (strong_emphasis "*" "*" "bar" "*" "*") "baz" "*"))"#;
    "multiple_of_three_rule"
)]
#[test_case(
    "*hi***yes**",
    r#"(inline (emphasis "*" "hi" "*") (strong_emphasis "*" "*" "yes" "*" "*"))"#;
    "run_split_across_elements"
)]
#[test_case("foo-_(bar)_", r#"(inline "foo" "-" (emphasis "_" "(" "bar" ")" "_"))"#; "underscore_after_punctuation")]
#[test_case("aa_\"bb\"_cc", r#"(inline "aa" "_" "\"" "bb" "\"" "_" "cc")"#; "underscore_against_quotes_is_inert")]
#[test_case("*фу*", r#"(inline (emphasis "*" "фу" "*"))"#; "non_ascii_content_is_word_text")]
#[test_case("\\*foo*", r#"(inline "\\*" "foo" "*")"#; "escaped_star_cannot_open")]
fn emphasis(input: &str, expected: &str) {
    run_tree_test(input, expected);
}

#[test_case("~foo~", r#"(inline (strikethrough "~" "foo" "~"))"#; "single_tilde")]
#[test_case("~~foo~~", r#"(inline (strikethrough "~" "~" "foo" "~" "~"))"#; "double_tilde")]
#[test_case("~~~foo~~~", r#"(inline "~" "~" "~" "foo" "~" "~" "~")"#; "triple_tilde_is_inert")]
#[test_case("~~no mixed~", r#"(inline "~" "~" "no" " " "mixed" "~")"#; "mismatched_counts_do_not_pair")]
#[test_case(
    "intra~~word~~strike",
    r#"(inline "intra" (strikethrough "~" "~" "word" "~" "~") "strike")"#;
    "intraword_strikethrough"
)]
#[test_case(
    "~~nested *emphasis* works~~",
    r#"(inline (strikethrough "~" "~" "nested" " " (emphasis "*" "emphasis" "*") " " "works" "~" "~"))"#;
    "emphasis_inside_strikethrough"
)]
#[test_case(
    "~~no *boundary~~ crossing*",
    r#"(inline (strikethrough "~" "~" "no" " " "*" "boundary" "~" "~") " " "crossing" "*")"#;
    "no_boundary_crossing"
)]
fn strikethrough(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
