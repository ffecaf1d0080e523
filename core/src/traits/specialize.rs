//! Autoref-based dispatch from an arbitrary expression to a [`Value`].
//!
//! Macro expansions call `(&&&&Probe(&expr)).xception_kind().value(&expr)`.
//! Method resolution peels one reference per tier and stops at the first
//! impl whose bounds hold:
//!
//! | Receiver     | Trait                | Applies to                            | Value                 |
//! |--------------|----------------------|---------------------------------------|-----------------------|
//! | `&&&&Probe`  | [`OptionKind`]       | `Option<T>`, `&Option<T>`, `T: Display` | `Null` or `Display` |
//! | `&&&Probe`   | [`OpaqueOptionKind`] | `Option<T>`, `&Option<T>`             | `Null` or `Opaque`    |
//! | `&&Probe`    | [`DisplayKind`]      | `T: Display`                          | `Display`             |
//! | `&Probe`     | [`OpaqueKind`]       | anything                              | `Opaque(type_name)`   |
//!
//! This only works on concrete types, which is why it lives behind macros.

use core::any::type_name;
use core::fmt::Display;

use crate::value::Value;

pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Optional values, seen through at most one reference.
pub trait OptionLike {
    type Inner;

    fn as_option(&self) -> Option<&Self::Inner>;
}

impl<T> OptionLike for Option<T> {
    type Inner = T;

    #[inline]
    fn as_option(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T> OptionLike for &Option<T> {
    type Inner = T;

    #[inline]
    fn as_option(&self) -> Option<&T> {
        self.as_ref()
    }
}

pub struct OptionTag;
pub struct OpaqueOptionTag;
pub struct DisplayTag;
pub struct OpaqueTag;

pub trait OptionKind {
    #[inline]
    fn xception_kind(&self) -> OptionTag {
        OptionTag
    }
}

impl<T: Display> OptionKind for &&&Probe<'_, Option<T>> {}
impl<T: Display> OptionKind for &&&Probe<'_, &Option<T>> {}

pub trait OpaqueOptionKind {
    #[inline]
    fn xception_kind(&self) -> OpaqueOptionTag {
        OpaqueOptionTag
    }
}

impl<O: OptionLike> OpaqueOptionKind for &&Probe<'_, O> {}

pub trait DisplayKind {
    #[inline]
    fn xception_kind(&self) -> DisplayTag {
        DisplayTag
    }
}

impl<T: Display> DisplayKind for &Probe<'_, T> {}

pub trait OpaqueKind {
    #[inline]
    fn xception_kind(&self) -> OpaqueTag {
        OpaqueTag
    }
}

impl<T: ?Sized> OpaqueKind for Probe<'_, T> {}

impl OptionTag {
    #[inline]
    pub fn value<O>(self, value: &O) -> Value<'_>
    where
        O: OptionLike,
        O::Inner: Display,
    {
        match value.as_option() {
            Some(inner) => Value::Display(inner),
            None => Value::Null,
        }
    }
}

impl OpaqueOptionTag {
    #[inline]
    pub fn value<O: OptionLike>(self, value: &O) -> Value<'static> {
        match value.as_option() {
            Some(_) => Value::Opaque(type_name::<O::Inner>()),
            None => Value::Null,
        }
    }
}

impl DisplayTag {
    #[inline]
    pub fn value<T: Display>(self, value: &T) -> Value<'_> {
        Value::Display(value)
    }
}

impl OpaqueTag {
    #[inline]
    pub fn value<T: ?Sized>(self, value: &T) -> Value<'_> {
        Value::opaque(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoDisplay;

    #[test]
    fn test_display_tier() {
        let n = 5;
        let v = (&&&&Probe(&n)).xception_kind().value(&n);
        assert!(matches!(v, Value::Display(_)));
    }

    #[test]
    fn test_option_tier() {
        let some = Some(5);
        let none: Option<i32> = None;
        assert!(matches!(
            (&&&&Probe(&some)).xception_kind().value(&some),
            Value::Display(_)
        ));
        assert!((&&&&Probe(&none)).xception_kind().value(&none).is_null());
    }

    #[test]
    fn test_option_reference_tier() {
        let none: &Option<u32> = &None;
        assert!((&&&&Probe(&none)).xception_kind().value(&none).is_null());

        let some: &Option<u32> = &Some(3);
        assert!(matches!(
            (&&&&Probe(&some)).xception_kind().value(&some),
            Value::Display(_)
        ));
    }

    #[test]
    fn test_opaque_option_tier() {
        let none: Option<NoDisplay> = None;
        assert!((&&&&Probe(&none)).xception_kind().value(&none).is_null());

        let some = Some(NoDisplay);
        let v = (&&&&Probe(&some)).xception_kind().value(&some);
        assert!(matches!(v, Value::Opaque(name) if name.ends_with("NoDisplay")));

        let by_ref: &Option<NoDisplay> = &None;
        assert!((&&&&Probe(&by_ref)).xception_kind().value(&by_ref).is_null());
    }

    #[test]
    fn test_opaque_tier() {
        let x = NoDisplay;
        let v = (&&&&Probe(&x)).xception_kind().value(&x);
        assert!(matches!(v, Value::Opaque(name) if name.ends_with("NoDisplay")));
    }

    #[test]
    fn test_reference_fields_use_display() {
        let s: &str = "text";
        let v = (&&&&Probe(&s)).xception_kind().value(&s);
        assert!(matches!(v, Value::Display(_)));
    }
}
