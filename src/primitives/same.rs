//! Type identity.

/// Holds only when `Self` and `T` are the same type.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Fails to compile unless both types are identical.
///
/// ```
/// use needful::assert_same_type;
///
/// assert_same_type!(needful::Constify<*mut u8>, *const u8);
/// ```
///
/// ```compile_fail
/// use needful::assert_same_type;
///
/// assert_same_type!(*mut u8, *const u8);
/// ```
#[macro_export]
macro_rules! assert_same_type {
    ($A:ty, $B:ty $(,)?) => {{
        fn __same<A: ?Sized + $crate::primitives::SameAs<B>, B: ?Sized>() {}
        __same::<$A, $B>();
    }};
}
