use test_case::test_case;

use gfm_inline::{html_entities::get_html_entity, SyntaxKind};
use harness::{parse, run_tree_test};

mod harness;

#[test_case("&amp;", r#"(inline "&amp;")"#; "named_entity")]
#[test_case("&AElig;", r#"(inline "&AElig;")"#; "mixed_case_entity")]
#[test_case("&#35;", r#"(inline "&#35;")"#; "decimal_reference")]
#[test_case("&#1234567;", r#"(inline "&#1234567;")"#; "decimal_reference_max_digits")]
#[test_case("&#x22;", r#"(inline "&#x22;")"#; "hex_reference")]
#[test_case("&#XCAB;", r#"(inline "&#XCAB;")"#; "uppercase_hex_reference")]
#[test_case("&noSuchEntity;", r#"(inline "&" "noSuchEntity" ";")"#; "unknown_name_is_literal")]
#[test_case("&amp", r#"(inline "&" "amp")"#; "missing_semicolon_is_literal")]
#[test_case("&;", r#"(inline "&" ";")"#; "empty_name_is_literal")]
#[test_case("&#;", r##"(inline "&" "#" ";")"##; "empty_number_is_literal")]
#[test_case("&#12345678;", r##"(inline "&" "#" "12345678" ";")"##; "too_many_digits_is_literal")]
#[test_case("a&b", r#"(inline "a" "&" "b")"#; "bare_ampersand")]
fn references(input: &str, expected: &str) {
    run_tree_test(input, expected);
}

#[test_case("\\*not\\*", r#"(inline "\\*" "not" "\\*")"#; "escaped_stars")]
#[test_case("\\\\", r#"(inline "\\\\")"#; "escaped_backslash")]
#[test_case("\\a", r#"(inline "\\" "a")"#; "backslash_before_word_is_literal")]
#[test_case("\\", r#"(inline "\\")"#; "trailing_backslash_is_literal")]
#[test_case("\\[x\\]", r#"(inline "\\[" "x" "\\]")"#; "escaped_brackets_make_no_link")]
fn escapes(input: &str, expected: &str) {
    run_tree_test(input, expected);
}

#[test]
fn reference_token_kinds() {
    let tree = parse("&amp;&#35;");
    let kinds: Vec<SyntaxKind> = tree.children().iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::ENTITY_REFERENCE, SyntaxKind::NUMERIC_CHAR_REF]
    );
}

#[test]
fn entity_values_are_exposed() {
    assert_eq!(get_html_entity("copy"), Some("\u{A9}"));
    assert_eq!(get_html_entity("amp"), Some("&"));
    assert_eq!(get_html_entity("bogus"), None);
}

#[test]
fn escape_token_kind() {
    let tree = parse("\\*");
    assert_eq!(tree.children()[0].kind(), SyntaxKind::BACKSLASH_ESCAPE);
    assert_eq!(tree.children()[0].span(), 0..2);
}
