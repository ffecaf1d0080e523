//! Borrowed views of the values a diagnostic describes.

use core::fmt;

/// A value to be rendered inside a diagnostic message.
///
/// Rendering never takes ownership: a `Value` borrows whatever it describes
/// for the duration of message construction.
///
/// Whether a type has a meaningful textual form is decided by `Display`.
/// Types that only have a structural representation (or none at all) are
/// described by their type name through [`Value::opaque`].
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// The absent marker, e.g. `None`.
    Null,
    /// Text, which always renders successfully.
    Str(&'a str),
    /// A value with its own string conversion. The conversion may fail,
    /// either by returning [`fmt::Error`] or by panicking.
    Display(&'a dyn fmt::Display),
    /// A value without a meaningful string conversion, identified by the
    /// fully-qualified name of its type.
    Opaque(&'static str),
}

impl<'a> Value<'a> {
    /// Describes `value` by its type name rather than its contents.
    #[inline]
    pub fn opaque<T: ?Sized>(_value: &T) -> Self {
        Value::Opaque(core::any::type_name::<T>())
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a, T: fmt::Display> From<&'a T> for Value<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Value::Display(value)
    }
}

impl<'a, T: fmt::Display> From<Option<&'a T>> for Value<'a> {
    #[inline]
    fn from(value: Option<&'a T>) -> Self {
        value.map_or(Value::Null, |v| Value::Display(v))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Display(_) => f.write_str("Display(..)"),
            Value::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}
