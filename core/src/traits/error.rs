use crate::error::{UsageError, Xception};

/// Error that blames a named parameter.
pub trait ParameterError {
    /// Name of the offending parameter, if the error carries one.
    fn param_name(&self) -> Option<&str>;
}

impl ParameterError for Xception {
    fn param_name(&self) -> Option<&str> {
        self.kind()
            .has_param_name()
            .then(|| self.diagnostic().parameter_name())
    }
}

impl ParameterError for UsageError {
    fn param_name(&self) -> Option<&str> {
        Some(self.param())
    }
}
