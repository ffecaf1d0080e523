use crate::value::Value;

/// A value that may be the absent marker.
///
/// Required by [`Because::argument_null`](crate::Because::argument_null),
/// which refuses to describe a value as null unless it actually is.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl Nullable for Value<'_> {
    #[inline]
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        T::is_null(*self)
    }
}
