use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case("<b>", r#"(inline (html_tag "<b>"))"#; "bare_open_tag")]
#[test_case("<a href=\"u\">", r#"(inline (html_tag "<a href=\"u\">"))"#; "double_quoted_attribute")]
#[test_case("<a href='u'>", r#"(inline (html_tag "<a href='u'>"))"#; "single_quoted_attribute")]
#[test_case("<a foo=bar baz>", r#"(inline (html_tag "<a foo=bar baz>"))"#; "unquoted_and_bare_attributes")]
#[test_case("<input disabled/>", r#"(inline (html_tag "<input disabled/>"))"#; "self_closing_tag")]
#[test_case("<a\nb=\"c\">", r#"(inline (html_tag "<a\nb=\"c\">"))"#; "newline_inside_tag")]
#[test_case("<a data-x=\"1\" _y:z.w=v>", r#"(inline (html_tag "<a data-x=\"1\" _y:z.w=v>"))"#; "exotic_attribute_names")]
#[test_case("</div>", r#"(inline (html_tag "</div>"))"#; "closing_tag")]
#[test_case("</div >", r#"(inline (html_tag "</div >"))"#; "closing_tag_with_space")]
#[test_case("<!-- comment -->", r#"(inline (html_tag "<!-- comment -->"))"#; "comment")]
#[test_case("<?php echo 1; ?>", r#"(inline (html_tag "<?php echo 1; ?>"))"#; "processing_instruction")]
#[test_case("<!DOCTYPE html>", r#"(inline (html_tag "<!DOCTYPE html>"))"#; "declaration")]
#[test_case("<![CDATA[>&<]]>", r#"(inline (html_tag "<![CDATA[>&<]]>"))"#; "cdata")]
#[test_case(
    "*<b>*",
    r#"(inline (emphasis "*" (html_tag "<b>") "*"))"#;
    "tag_nested_in_emphasis"
)]
#[test_case(
    "a <b> c",
    r#"(inline "a" " " (html_tag "<b>") " " "c")"#;
    "tag_between_words"
)]
#[test_case(
    "<a \"bad\">",
    r#"(inline "<" "a" " " "\"" "bad" "\"" ">")"#;
    "quoted_attribute_name_is_invalid"
)]
#[test_case(
    "<1bad>",
    r#"(inline "<" "1" "bad" ">")"#;
    "tag_name_cannot_start_with_a_digit"
)]
#[test_case(
    "<!-- a -- b -->",
    r#"(inline "<" "!" "-" "-" " " "a" " " "-" "-" " " "b" " " "-" "-" ">")"#;
    "double_dash_inside_comment_is_invalid"
)]
#[test_case(
    "<a/bad>",
    r#"(inline "<" "a" "/" "bad" ">")"#;
    "slash_must_end_the_tag"
)]
#[test_case(
    "`<b>` beats <i>",
    r#"(inline (code_span (code_span_delimiter "`") "<" "b" ">" (code_span_delimiter "`")) " " "beats" " " (html_tag "<i>"))"#;
    "code_span_wins_over_html"
)]
fn raw_html(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
