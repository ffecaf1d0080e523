//! Assembly of canonical diagnostic messages.
//!
//! Every message follows one of three templates:
//!
//! ```text
//! <Kind> "<name>" with value <value> is invalid: <name> <reasons>
//! <Kind> "<name>" with value <value> is out of range: <name> <reasons>
//! Argument "<name>" cannot be null.
//! ```
//!
//! `"<name>"` is the literal encoding of the name, `<value>` comes from
//! [`string_representation`] and `<reasons>` from [`reasons_to_string`]. The
//! composers here are pure; precondition checks live in [`Because`].
//!
//! [`Because`]: crate::Because

use core::fmt;

use crate::literal::write_literal;
use crate::reason::reasons_to_string;
use crate::stringify::string_representation;
use crate::value::Value;

/// What a diagnostic is about.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    /// A function or constructor argument.
    Argument,
    /// An index into some collection.
    Index,
}

impl SubjectKind {
    /// The word that opens a message about this kind of subject.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Argument => "Argument",
            SubjectKind::Index => "Index",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The argument or index being described, together with its current value.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    /// Whether this is an argument or an index.
    pub kind: SubjectKind,
    /// The parameter name, as written by the caller.
    pub name: &'a str,
    /// The offending value.
    pub value: Value<'a>,
}

impl<'a> Subject<'a> {
    /// An argument named `name`.
    #[inline]
    pub const fn argument(name: &'a str, value: Value<'a>) -> Self {
        Self {
            kind: SubjectKind::Argument,
            name,
            value,
        }
    }

    /// An index named `name`.
    #[inline]
    pub const fn index(name: &'a str, value: Value<'a>) -> Self {
        Self {
            kind: SubjectKind::Index,
            name,
            value,
        }
    }

    /// Writes `<Kind> "<name>"`.
    fn write_head(&self, out: &mut String) {
        out.push_str(self.kind.as_str());
        out.push(' ');
        // Writing into a String cannot fail.
        let _ = write_literal(out, self.name);
    }
}

/// A finished diagnostic: the message text and the name of the parameter it
/// is about.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticMessage {
    text: String,
    parameter_name: String,
}

impl DiagnosticMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Always the name of the subject that produced this message.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn into_parts(self) -> (String, String) {
        (self.text, self.parameter_name)
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn describe(
    subject: Subject<'_>,
    verdict: &str,
    reason: Value<'_>,
    rest: &[Value<'_>],
) -> DiagnosticMessage {
    let mut text = String::new();
    subject.write_head(&mut text);
    text.push_str(" with value ");
    text.push_str(&string_representation(subject.value));
    text.push_str(" is ");
    text.push_str(verdict);
    text.push_str(": ");
    text.push_str(subject.name);
    text.push(' ');
    text.push_str(&reasons_to_string(reason, rest));

    DiagnosticMessage {
        text,
        parameter_name: subject.name.to_owned(),
    }
}

/// Describes an argument that is invalid for the given reasons.
///
/// ```
/// use xception_core::{Value, invalid_argument};
///
/// let msg = invalid_argument("foo", Value::from(&100), Value::from("reason1"), &[]);
/// assert_eq!(msg.text(), r#"Argument "foo" with value "100" is invalid: foo reason1"#);
/// assert_eq!(msg.parameter_name(), "foo");
/// ```
pub fn invalid_argument(
    name: &str,
    value: Value<'_>,
    reason: Value<'_>,
    rest: &[Value<'_>],
) -> DiagnosticMessage {
    describe(Subject::argument(name, value), "invalid", reason, rest)
}

/// Describes an argument that is null.
pub fn null_argument(name: &str) -> DiagnosticMessage {
    let mut text = String::new();
    Subject::argument(name, Value::Null).write_head(&mut text);
    text.push_str(" cannot be null.");

    DiagnosticMessage {
        text,
        parameter_name: name.to_owned(),
    }
}

/// Describes an argument whose value is outside its permitted range.
pub fn argument_out_of_range(
    name: &str,
    value: Value<'_>,
    reason: Value<'_>,
    rest: &[Value<'_>],
) -> DiagnosticMessage {
    out_of_range(Subject::argument(name, value), reason, rest)
}

/// Describes an index whose value is outside the bounds of what it indexes.
pub fn index_out_of_range(
    name: &str,
    value: Value<'_>,
    reason: Value<'_>,
    rest: &[Value<'_>],
) -> DiagnosticMessage {
    out_of_range(Subject::index(name, value), reason, rest)
}

/// Describes any subject whose value is out of range.
pub fn out_of_range(subject: Subject<'_>, reason: Value<'_>, rest: &[Value<'_>]) -> DiagnosticMessage {
    describe(subject, "out of range", reason, rest)
}
