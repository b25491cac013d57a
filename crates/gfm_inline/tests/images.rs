use test_case::test_case;

use harness::run_tree_test;

mod harness;

#[test_case(
    "![alt](img.png)",
    r#"(inline (inline_image "!" "[" (image_description "alt") "]" "(" (link_destination "img" "." "png") ")"))"#;
    "inline_image"
)]
#[test_case(
    "![alt](img.png \"title\")",
    r#"(inline (inline_image "!" "[" (image_description "alt") "]" "(" (link_destination "img" "." "png") " " (link_title "\"" "title" "\"") ")"))"#;
    "inline_image_with_title"
)]
#[test_case(
    "![alt][label]",
    r#"(inline (full_reference_image "!" "[" (image_description "alt") "]" (link_label "[" "label" "]")))"#;
    "full_reference_image"
)]
#[test_case(
    "![alt][]",
    r#"(inline (collapsed_reference_image "!" "[" (image_description "alt") "]" "[" "]"))"#;
    "collapsed_reference_image"
)]
#[test_case(
    "![alt]",
    r#"(inline (shortcut_image "!" "[" (image_description "alt") "]"))"#;
    "shortcut_image"
)]
#[test_case("!notimage", r#"(inline "!" "notimage")"#; "bang_without_bracket")]
#[test_case(
    "![a *b*](u)",
    r#"(inline (inline_image "!" "[" (image_description "a" " " (emphasis "*" "b" "*")) "]" "(" (link_destination "u") ")"))"#;
    "emphasis_inside_description"
)]
#[test_case(
    "![a [b](u) c](x)",
    r#"(inline (inline_image "!" "[" (image_description "a" " " (inline_link "[" (link_text "b") "]" "(" (link_destination "u") ")") " " "c") "]" "(" (link_destination "x") ")"))"#;
    "image_description_may_contain_links"
)]
#[test_case(
    "[a ![b](u)](x)",
    r#"(inline (inline_link "[" (link_text "a" " " (inline_image "!" "[" (image_description "b") "]" "(" (link_destination "u") ")")) "]" "(" (link_destination "x") ")"))"#;
    "links_may_contain_images"
)]
#[test_case(
    "[a ![b] c](x)",
    r#"(inline (inline_link "[" (link_text "a" " " (shortcut_image "!" "[" (image_description "b") "]") " " "c") "]" "(" (link_destination "x") ")"))"#;
    "shortcut_image_resolves_before_outer_link"
)]
#[test_case(
    "![a ![b] c](x)",
    r#"(inline (inline_image "!" "[" (image_description "a" " " (shortcut_image "!" "[" (image_description "b") "]") " " "c") "]" "(" (link_destination "x") ")"))"#;
    "images_nest_in_images"
)]
fn images(input: &str, expected: &str) {
    run_tree_test(input, expected);
}
