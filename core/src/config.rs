//! Presentation settings for finished diagnostics.
//!
//! The message text itself is fixed; [`FormatConfig`] only controls what the
//! error wrapper adds around it.
//!
//! # Parameter Trailer
//!
//! Some consumers display an error's message but not its structured fields.
//! For them the wrapper can repeat the parameter name on its own line:
//!
//! ```text
//! Argument "max" with value "100" is out of range: max should be at most 50
//! Parameter name: max
//! ```
//!
//! Index diagnostics never get a trailer.
//!
//! # Example
//!
//! ```
//! use xception_core::{Because, FormatConfig};
//!
//! let config = FormatConfig::new()
//!     .with_parameter_trailer(true)
//!     .with_line_ending("\r\n");
//! let because = Because::with_config(config);
//! ```

/// Configuration for how diagnostics are presented.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `parameter_trailer` | `false` |
/// | `line_ending` | `"\n"` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Append `Parameter name: <name>` to argument diagnostics.
    ///
    /// Off by default, since the parameter name is already available through
    /// [`ParameterError::param_name`](crate::ParameterError::param_name).
    pub parameter_trailer: bool,

    /// Separator placed between the message and the trailer.
    pub line_ending: &'static str,
}

impl Default for FormatConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FormatConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        parameter_trailer: false,
        line_ending: "\n",
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Enables or disables the parameter-name trailer.
    #[inline]
    pub const fn with_parameter_trailer(mut self, enabled: bool) -> Self {
        self.parameter_trailer = enabled;
        self
    }

    /// Sets the separator placed before the trailer.
    #[inline]
    pub const fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Renders the trailer for `param_name`, or nothing when disabled.
    pub(crate) fn trailer(&self, param_name: &str) -> Option<String> {
        self.parameter_trailer
            .then(|| format!("{}Parameter name: {}", self.line_ending, param_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_config_defaults() {
        let config = FormatConfig::default();
        assert!(!config.parameter_trailer);
        assert_eq!(config.line_ending, "\n");
        assert_eq!(config, FormatConfig::DEFAULT);
    }

    #[test]
    fn test_format_config_builder() {
        let config = FormatConfig::new()
            .with_parameter_trailer(true)
            .with_line_ending("\r\n");

        assert!(config.parameter_trailer);
        assert_eq!(config.line_ending, "\r\n");
    }

    #[test]
    fn test_trailer_disabled() {
        assert_eq!(FormatConfig::new().trailer("max"), None);
    }

    #[test]
    fn test_trailer_enabled() {
        let config = FormatConfig::new()
            .with_parameter_trailer(true)
            .with_line_ending("\r\n");
        assert_eq!(
            config.trailer("max").as_deref(),
            Some("\r\nParameter name: max")
        );
    }
}
