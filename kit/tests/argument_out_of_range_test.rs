//! Argument-out-of-range diagnostics built through `argument_out_of_range!`.

use xception::{
    Because, ErrorKind, FormatConfig, ParameterError, UsageError, Value, argument_out_of_range,
};

#[test]
fn test_sets_param_name() {
    let max = 100;
    let err = argument_out_of_range!(max, "should be at most 50").unwrap();
    assert_eq!(err.param_name(), Some("max"));
    assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
}

#[test]
fn test_message_for_single_reason() {
    let max = 100;
    let err = argument_out_of_range!(max, "reason1").unwrap();
    insta::assert_snapshot!(err.to_string(), @r#"Argument "max" with value "100" is out of range: max reason1"#);
}

#[test]
fn test_message_for_multiple_reasons() {
    let max = 100;
    let err = argument_out_of_range!(max, "reason1", "reason2").unwrap();
    assert_eq!(
        err.to_string(),
        "Argument \"max\" with value \"100\" is out of range: max reason1 reason2"
    );
}

#[test]
fn test_null_reason_is_usage_error() {
    let max = 100;
    let err = argument_out_of_range!(max, None::<&str>).unwrap_err();
    assert_eq!(err, UsageError::MissingReason);
    assert_eq!(err.param_name(), Some("reason"));
}

#[test]
fn test_empty_reason_is_usage_error() {
    let max = 100;
    let err = argument_out_of_range!(max, "").unwrap_err();
    assert_eq!(err, UsageError::EmptyReason);
    assert_eq!(err.param_name(), Some("reason"));
}

#[test]
fn test_empty_continuation_is_allowed() {
    let max = 100;
    let err = argument_out_of_range!(max, "reason1", "").unwrap();
    assert_eq!(
        err.to_string(),
        "Argument \"max\" with value \"100\" is out of range: max reason1 "
    );
}

#[test]
fn test_parameter_trailer() {
    let because = Because::with_config(
        FormatConfig::new()
            .with_parameter_trailer(true)
            .with_line_ending("\r\n"),
    );
    let max = 100;
    let err = because
        .argument_out_of_range("max", Value::from(&max), Value::from("reason1"), &[])
        .unwrap();
    assert_eq!(
        err.to_string(),
        "Argument \"max\" with value \"100\" is out of range: max reason1\r\nParameter name: max"
    );
    assert_eq!(
        err.diagnostic().text(),
        "Argument \"max\" with value \"100\" is out of range: max reason1"
    );
}

#[allow(dead_code)]
struct Unprintable;

#[test]
fn test_null_reason_without_display_is_usage_error() {
    let max = 1;
    let err = argument_out_of_range!(max, None::<Unprintable>).unwrap_err();
    assert_eq!(err, UsageError::MissingReason);
}

#[test]
fn test_none_value_without_display_renders_null() {
    let slot: Option<Unprintable> = None;
    let err = argument_out_of_range!(slot, "must be filled").unwrap();
    assert_eq!(
        err.to_string(),
        "Argument \"slot\" with value null is out of range: slot must be filled"
    );
}

#[test]
fn test_borrowed_none_value_renders_null() {
    fn check(limit: &Option<u32>) -> xception::Xception {
        argument_out_of_range!(limit, "must be set").unwrap()
    }

    assert_eq!(
        check(&None).to_string(),
        "Argument \"limit\" with value null is out of range: limit must be set"
    );
    assert_eq!(
        check(&Some(9)).to_string(),
        "Argument \"limit\" with value \"9\" is out of range: limit must be set"
    );
}
