//! Error types produced by xception.
//!
//! Two kinds of error never mix:
//!
//! - [`Xception`] is the *product*: the diagnostic a caller asked for,
//!   describing someone else's bad argument.
//! - [`UsageError`] means the request itself was malformed (an empty name, a
//!   missing reason, a "null" argument that is not null). It is raised before
//!   any diagnostic is built and names the offending parameter of the xception
//!   call, not of the caller.
//!
//! Both expose a parameter name through [`ParameterError`].
//!
//! [`ParameterError`]: crate::ParameterError

use core::fmt;

use crate::message::{DiagnosticMessage, SubjectKind};

/// Result type for building diagnostics.
pub type Result<T, E = UsageError> = core::result::Result<T, E>;

/// The kind of condition an [`Xception`] reports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument is invalid.
    InvalidArgument,
    /// An argument is null.
    NullArgument,
    /// An argument is outside its permitted range.
    ArgumentOutOfRange,
    /// An index is outside the bounds of what it indexes.
    IndexOutOfRange,
}

impl ErrorKind {
    pub const fn subject(self) -> SubjectKind {
        match self {
            ErrorKind::IndexOutOfRange => SubjectKind::Index,
            _ => SubjectKind::Argument,
        }
    }

    /// Whether errors of this kind carry a parameter name.
    ///
    /// Index errors do not: an index is a position, not a parameter.
    pub const fn has_param_name(self) -> bool {
        !matches!(self, ErrorKind::IndexOutOfRange)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NullArgument => "null argument",
            ErrorKind::ArgumentOutOfRange => "argument out of range",
            ErrorKind::IndexOutOfRange => "index out of range",
        };
        f.write_str(s)
    }
}

/// An information-rich error describing a bad argument or index.
///
/// Displays as the diagnostic text, followed by the parameter trailer when
/// [`FormatConfig::parameter_trailer`](crate::FormatConfig::parameter_trailer)
/// was enabled at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Xception {
    kind: ErrorKind,
    diagnostic: DiagnosticMessage,
    message: String,
}

impl Xception {
    pub(crate) fn new(kind: ErrorKind, diagnostic: DiagnosticMessage, trailer: Option<String>) -> Self {
        let mut message = diagnostic.text().to_owned();
        if kind.has_param_name() {
            if let Some(trailer) = trailer {
                message.push_str(&trailer);
            }
        }
        Self {
            kind,
            diagnostic,
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The full display message, trailer included.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The bare diagnostic, without any trailer.
    pub fn diagnostic(&self) -> &DiagnosticMessage {
        &self.diagnostic
    }

    pub fn into_diagnostic(self) -> DiagnosticMessage {
        self.diagnostic
    }
}

/// A malformed request to build a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// The name identifying the argument or index was empty.
    #[error("Argument \"{param}\" with value \"\" is invalid: {param} must name the value being described")]
    EmptyName {
        /// `"argument"` or `"index"`, depending on the entry point.
        param: &'static str,
    },

    /// An out-of-range diagnostic was requested without a reason.
    #[error("Argument \"reason\" cannot be null.")]
    MissingReason,

    /// An out-of-range diagnostic was requested with a reason that renders
    /// as empty text.
    #[error("Argument \"reason\" with value \"\" is invalid: reason must not be empty")]
    EmptyReason,

    /// A null-argument diagnostic was requested for a value that is not null.
    #[error("Argument \"argument\" with value {value} is invalid: argument does not reference a value which is null")]
    NotNull {
        /// Representation of the offending value.
        value: String,
    },
}

impl UsageError {
    /// The xception parameter whose contract was violated.
    pub fn param(&self) -> &'static str {
        match self {
            UsageError::EmptyName { param } => *param,
            UsageError::MissingReason | UsageError::EmptyReason => "reason",
            UsageError::NotNull { .. } => "argument",
        }
    }
}
