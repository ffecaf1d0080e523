//! Checked entry points for building diagnostics.
//!
//! [`Because`] is the boundary between callers and the pure composers in
//! [`message`](crate::message). It validates each request, builds the
//! diagnostic and wraps it in an [`Xception`] according to its
//! [`FormatConfig`].
//!
//! # Example
//!
//! ```
//! use xception_core::{Because, ParameterError, Value};
//!
//! fn set_max(max: u32) -> Result<(), xception_core::Xception> {
//!     if max > 50 {
//!         let err = Because::DEFAULT
//!             .argument_out_of_range("max", Value::from(&max), Value::from("should be at most"), &[Value::from(&50)])
//!             .expect("valid request");
//!         return Err(err);
//!     }
//!     Ok(())
//! }
//!
//! let err = set_max(100).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     r#"Argument "max" with value "100" is out of range: max should be at most 50"#
//! );
//! assert_eq!(err.param_name(), Some("max"));
//! ```

use crate::config::FormatConfig;
use crate::error::{ErrorKind, Result, UsageError, Xception};
use crate::message;
use crate::stringify::{safe_to_string, string_representation};
use crate::traits::Nullable;
use crate::value::Value;

/// Builds information-rich errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Because {
    config: FormatConfig,
}

impl Because {
    /// Builder with the default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self::with_config(FormatConfig::DEFAULT);

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// An argument is invalid for the given reasons.
    ///
    /// Any reason is accepted, including [`Value::Null`].
    pub fn argument(
        &self,
        name: &str,
        value: Value<'_>,
        reason: Value<'_>,
        rest: &[Value<'_>],
    ) -> Result<Xception> {
        require_name(name, "argument")?;
        let diagnostic = message::invalid_argument(name, value, reason, rest);
        Ok(self.finish(ErrorKind::InvalidArgument, diagnostic))
    }

    /// An argument is null.
    ///
    /// Fails with [`UsageError::NotNull`] when `value` is not actually null,
    /// since that almost certainly means the wrong argument was named.
    pub fn argument_null<N: Nullable + ?Sized>(&self, name: &str, value: &N) -> Result<Xception> {
        require_name(name, "argument")?;
        if !value.is_null() {
            let err = UsageError::NotNull {
                value: string_representation(Value::opaque(value)),
            };
            log::trace!("rejected null-argument request for {name:?}: {err}");
            return Err(err);
        }
        Ok(self.finish(ErrorKind::NullArgument, message::null_argument(name)))
    }

    /// Same as [`argument_null`](Self::argument_null), but reports the
    /// offending value when it is not null.
    pub fn argument_null_value(&self, name: &str, value: Value<'_>) -> Result<Xception> {
        require_name(name, "argument")?;
        if !value.is_null() {
            let err = UsageError::NotNull {
                value: string_representation(value),
            };
            log::trace!("rejected null-argument request for {name:?}: {err}");
            return Err(err);
        }
        Ok(self.finish(ErrorKind::NullArgument, message::null_argument(name)))
    }

    /// An argument is outside its permitted range.
    ///
    /// `reason` is mandatory: it may be neither null nor empty.
    pub fn argument_out_of_range(
        &self,
        name: &str,
        value: Value<'_>,
        reason: Value<'_>,
        rest: &[Value<'_>],
    ) -> Result<Xception> {
        require_name(name, "argument")?;
        require_reason(reason)?;
        let diagnostic = message::argument_out_of_range(name, value, reason, rest);
        Ok(self.finish(ErrorKind::ArgumentOutOfRange, diagnostic))
    }

    /// An index is outside the bounds of what it indexes.
    ///
    /// `reason` is mandatory: it may be neither null nor empty.
    pub fn index_out_of_range(
        &self,
        name: &str,
        value: Value<'_>,
        reason: Value<'_>,
        rest: &[Value<'_>],
    ) -> Result<Xception> {
        require_name(name, "index")?;
        require_reason(reason)?;
        let diagnostic = message::index_out_of_range(name, value, reason, rest);
        Ok(self.finish(ErrorKind::IndexOutOfRange, diagnostic))
    }

    fn finish(&self, kind: ErrorKind, diagnostic: message::DiagnosticMessage) -> Xception {
        let trailer = self.config.trailer(diagnostic.parameter_name());
        Xception::new(kind, diagnostic, trailer)
    }
}

fn require_name(name: &str, param: &'static str) -> Result<()> {
    if name.is_empty() {
        let err = UsageError::EmptyName { param };
        log::trace!("rejected diagnostic request: {err}");
        return Err(err);
    }
    Ok(())
}

fn require_reason(reason: Value<'_>) -> Result<()> {
    let err = match reason {
        Value::Null => UsageError::MissingReason,
        _ if safe_to_string(reason).is_empty() => UsageError::EmptyReason,
        _ => return Ok(()),
    };
    log::trace!("rejected diagnostic request: {err}");
    Err(err)
}
