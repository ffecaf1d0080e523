//! Tests for the building blocks: literal encoding, safe stringification and
//! reason joining.

use std::fmt;

use xception::{Value, literal_encode, reasons_to_string, safe_to_string, string_representation};

struct BuggyToString;

impl fmt::Display for BuggyToString {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("bug");
    }
}

#[test]
fn test_literal_encode_null() {
    assert_eq!(literal_encode(None), "null");
}

#[test_case::test_case("\t", "\"\\t\""; "tab")]
#[test_case::test_case("\n", "\"\\n\""; "newline")]
#[test_case::test_case("a\0b", "\"a\\0b\""; "null char")]
#[test_case::test_case("\x08\t\n\x0c\r\"\\\0", "\"\\b\\t\\n\\f\\r\\\"\\\\\\0\""; "escape sequences")]
#[test_case::test_case("'", "\"'\""; "single quotes are not escaped")]
#[test_case::test_case("æ", "\"\\x00e6\""; "upper ascii")]
#[test_case::test_case("ɷ", "\"\\x0277\""; "unicode")]
#[test_case::test_case("", "\"\""; "empty")]
fn test_literal_encode(input: &str, expected: &str) {
    assert_eq!(literal_encode(Some(input)), expected);
}

#[test]
fn test_safe_to_string_null() {
    assert_eq!(safe_to_string(Value::Null), "<NULL>");
}

#[test]
fn test_safe_to_string_buggy_display() {
    assert_eq!(
        safe_to_string(Value::from(&BuggyToString)),
        "<TOSTRING_EXCEPTION>"
    );
}

#[test]
fn test_reasons_insert_spaces() {
    assert_eq!(
        reasons_to_string(Value::from("foo"), &[Value::from("bar")]),
        "foo bar"
    );
}

#[test]
fn test_reasons_use_safe_to_string() {
    assert_eq!(
        reasons_to_string(Value::Null, &[Value::Null, Value::Null]),
        "<NULL> <NULL> <NULL>"
    );
}

#[test]
fn test_buggy_value_does_not_break_diagnostic() {
    let bad = BuggyToString;
    let err = xception::argument!(bad, "could not be described").unwrap();
    assert_eq!(
        err.to_string(),
        "Argument \"bad\" with value <TOSTRING_EXCEPTION> is invalid: bad could not be described"
    );
}

#[test]
fn test_buggy_reason_does_not_break_diagnostic() {
    let idx = 3;
    let err = xception::index_out_of_range!(idx, "because", BuggyToString).unwrap();
    assert_eq!(
        err.to_string(),
        "Index \"idx\" with value \"3\" is out of range: idx because <TOSTRING_EXCEPTION>"
    );
}

#[test]
fn test_string_representation() {
    assert_eq!(string_representation(Value::Null), "null");
    assert_eq!(string_representation(Value::from(&1.5)), "\"1.5\"");
}
