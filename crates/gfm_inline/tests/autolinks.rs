use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case("<http://x>", r#"(inline (uri_autolink "<" "http://x" ">"))"#; "short_uri")]
#[test_case(
    "<https://example.com/a?b=c&d>",
    r#"(inline (uri_autolink "<" "https://example.com/a?b=c&d" ">"))"#;
    "uri_with_query"
)]
#[test_case(
    "<irc://foo.bar:2233/baz>",
    r#"(inline (uri_autolink "<" "irc://foo.bar:2233/baz" ">"))"#;
    "uri_with_port"
)]
#[test_case(
    "<user@example.com>",
    r#"(inline (email_autolink "<" "user@example.com" ">"))"#;
    "email"
)]
#[test_case(
    "<foo+special@Bar.baz-bar0.com>",
    r#"(inline (email_autolink "<" "foo+special@Bar.baz-bar0.com" ">"))"#;
    "email_with_punctuation"
)]
#[test_case("<>", r#"(inline "<" ">")"#; "empty_brackets")]
#[test_case(
    "<http://a b>",
    r#"(inline "<" "http" ":" "/" "/" "a" " " "b" ">")"#;
    "space_breaks_the_uri"
)]
#[test_case(
    "<m:abc>",
    r#"(inline "<" "m" ":" "abc" ">")"#;
    "one_letter_scheme_is_too_short"
)]
#[test_case(
    "<thisschemeiswaytoolongforanautolink:x>",
    r#"(inline "<" "thisschemeiswaytoolongforanautolink" ":" "x" ">")"#;
    "scheme_longer_than_32_is_rejected"
)]
#[test_case(
    "*<http://x>*",
    r#"(inline (emphasis "*" (uri_autolink "<" "http://x" ">") "*"))"#;
    "autolink_inside_emphasis"
)]
fn autolinks(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
