#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use xception::{Because, ParameterError, UsageError, Value};

#[derive(Debug, Arbitrary)]
struct Input {
    name: String,
    value: Option<String>,
    reason: Option<String>,
    rest: Vec<Option<String>>,
    index: bool,
}

fn value(s: &Option<String>) -> Value<'_> {
    s.as_deref().map_or(Value::Null, Value::Str)
}

fuzz_target!(|input: Input| {
    let because = Because::new();
    let rest: Vec<Value<'_>> = input.rest.iter().map(value).collect();

    let result = if input.index {
        because.index_out_of_range(&input.name, value(&input.value), value(&input.reason), &rest)
    } else {
        because.argument_out_of_range(&input.name, value(&input.value), value(&input.reason), &rest)
    };

    match result {
        Ok(err) => {
            assert_eq!(err.diagnostic().parameter_name(), input.name);
            assert!(err.to_string().contains(" is out of range: "));
        }
        Err(UsageError::EmptyName { .. }) => assert!(input.name.is_empty()),
        Err(UsageError::MissingReason) => assert!(input.reason.is_none()),
        Err(UsageError::EmptyReason) => assert_eq!(input.reason.as_deref(), Some("")),
        Err(err @ UsageError::NotNull { .. }) => panic!("unexpected {err:?}: {:?}", err.param_name()),
    }
});
