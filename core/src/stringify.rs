//! Total string conversion for values of unknown quality.
//!
//! A diagnostic is usually built while something has already gone wrong, so
//! describing a value must never become a second failure. A value whose
//! `Display` impl returns an error or panics is replaced with
//! [`TOSTRING_EXCEPTION`] instead.
//!
//! Panics are contained with [`std::panic::catch_unwind`]. The panic hook
//! still runs, and nothing can be contained when the crate is built with
//! `panic = "abort"`.

use core::fmt::{self, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::literal::literal_encode;
use crate::value::Value;

/// Rendered in place of the absent marker by [`safe_to_string`].
pub const NULL: &str = "<NULL>";

/// Rendered in place of a value whose string conversion failed.
pub const TOSTRING_EXCEPTION: &str = "<TOSTRING_EXCEPTION>";

/// Runs `value`'s `Display` impl, returning `None` if it failed in any way.
fn try_display(value: &dyn fmt::Display) -> Option<String> {
    let mut out = String::new();
    let result = catch_unwind(AssertUnwindSafe(|| write!(out, "{value}")));
    match result {
        Ok(Ok(())) => Some(out),
        Ok(Err(fmt::Error)) => {
            log::debug!("string conversion returned fmt::Error; substituting {TOSTRING_EXCEPTION}");
            None
        }
        Err(_) => {
            log::debug!("string conversion panicked; substituting {TOSTRING_EXCEPTION}");
            None
        }
    }
}

/// Converts `value` to display text. Never fails.
///
/// - [`Value::Null`] renders as [`NULL`].
/// - Text and `Display` values render verbatim, without literal encoding.
/// - A failing `Display` renders as [`TOSTRING_EXCEPTION`].
/// - Opaque values render as their type name.
pub fn safe_to_string(value: Value<'_>) -> String {
    match value {
        Value::Null => String::from(NULL),
        Value::Str(s) => String::from(s),
        Value::Display(d) => try_display(d).unwrap_or_else(|| String::from(TOSTRING_EXCEPTION)),
        Value::Opaque(type_name) => String::from(type_name),
    }
}

/// Renders the current value of an argument for use inside a message.
///
/// Unlike [`safe_to_string`], text is literal-encoded so that control
/// characters and quotes in the value cannot blur the message around it.
///
/// - [`Value::Null`] renders as the bare word `null`.
/// - Opaque values render as their type name, unquoted.
/// - A failing `Display` renders as [`TOSTRING_EXCEPTION`], unquoted, which
///   keeps it distinct from a value whose text happens to be that sentinel.
pub fn string_representation(value: Value<'_>) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Str(s) => literal_encode(Some(s)),
        Value::Display(d) => match try_display(d) {
            Some(text) => literal_encode(Some(&text)),
            None => String::from(TOSTRING_EXCEPTION),
        },
        Value::Opaque(type_name) => String::from(type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanickingDisplay;

    impl fmt::Display for PanickingDisplay {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("bug");
        }
    }

    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    struct Opaque;

    #[test]
    fn test_safe_to_string_null() {
        assert_eq!(safe_to_string(Value::Null), "<NULL>");
    }

    #[test]
    fn test_safe_to_string_panicking_display() {
        assert_eq!(
            safe_to_string(Value::from(&PanickingDisplay)),
            "<TOSTRING_EXCEPTION>"
        );
    }

    #[test]
    fn test_safe_to_string_failing_display_discards_partial_output() {
        assert_eq!(
            safe_to_string(Value::from(&FailingDisplay)),
            "<TOSTRING_EXCEPTION>"
        );
    }

    #[test]
    fn test_safe_to_string_is_verbatim() {
        assert_eq!(safe_to_string(Value::from("a\"b\n")), "a\"b\n");
        assert_eq!(safe_to_string(Value::from(&-3i64)), "-3");
    }

    #[test]
    fn test_safe_to_string_opaque_is_type_name() {
        let rendered = safe_to_string(Value::opaque(&Opaque));
        assert!(rendered.ends_with("stringify::tests::Opaque"), "{rendered}");
    }

    #[test]
    fn test_representation_null() {
        assert_eq!(string_representation(Value::Null), "null");
    }

    #[test]
    fn test_representation_encodes_text() {
        assert_eq!(string_representation(Value::from(&100)), "\"100\"");
        assert_eq!(string_representation(Value::from("x\ty")), r#""x\ty""#);
    }

    #[test]
    fn test_representation_opaque_is_unquoted_type_name() {
        let rendered = string_representation(Value::opaque(&Opaque));
        assert!(!rendered.starts_with('"'));
        assert!(rendered.ends_with("Opaque"));
    }

    #[test]
    fn test_representation_contains_failures() {
        assert_eq!(
            string_representation(Value::from(&PanickingDisplay)),
            "<TOSTRING_EXCEPTION>"
        );
        assert_eq!(
            string_representation(Value::from(&FailingDisplay)),
            "<TOSTRING_EXCEPTION>"
        );
    }

    #[test]
    fn test_sentinel_text_is_quoted_when_it_is_the_value() {
        assert_eq!(
            string_representation(Value::from(TOSTRING_EXCEPTION)),
            "\"<TOSTRING_EXCEPTION>\""
        );
    }
}
