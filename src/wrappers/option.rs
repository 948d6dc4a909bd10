//! Optional values without a discriminant.

use core::fmt;

use macros::Wrapper;

use crate::cast::Castable;
use crate::check::{Violation, ensure};
use crate::contra::Covariant;
use crate::detect::Basic;
use crate::wrappers::Sentinel;

/// Marker that converts into any disengaged `OptionWrapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoneMarker;

/// The disengaged value of every `OptionWrapper`.
pub const NONE: NoneMarker = NoneMarker;

/// A `T` that may be absent, using `T`'s own sentinel as "absent".
///
/// Same size and layout as `T`. Disengagement is an expected outcome here,
/// so there are two ways out: `unwrap` asserts engagement (checked builds),
/// `into_raw` hands back the sentinel-or-value untouched.
///
/// ```
/// use needful::{NONE, OptionWrapper};
///
/// let o: OptionWrapper<*mut i32> = NONE.into();
/// assert!(o.is_none());
///
/// let mut x = 1;
/// let p: *mut i32 = &mut x;
/// let o = OptionWrapper::from(p);
/// assert_eq!(o.unwrap(), p);
/// assert!(o == p && p == o);
/// ```
#[derive(Wrapper, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct OptionWrapper<T> {
    o: T,
}

impl<T> OptionWrapper<T> {
    #[inline(always)]
    pub(crate) fn raw(&self) -> &T {
        &self.o
    }

    /// Convert the raw payload, sentinel included.
    #[inline(always)]
    pub(crate) fn map_raw<U>(self, f: impl FnOnce(T) -> U) -> OptionWrapper<U> {
        OptionWrapper { o: f(self.o) }
    }
}

impl<T: Sentinel> OptionWrapper<T> {
    /// The disengaged option.
    #[inline(always)]
    pub const fn none() -> Self {
        OptionWrapper { o: T::NONE }
    }

    /// Build from anything implicitly convertible to `T`: a narrower scalar,
    /// a `*mut` where a `*const` is held, or a pointer to a derived type.
    #[inline(always)]
    pub fn from_value<U: Covariant<T>>(value: U) -> Self {
        OptionWrapper { o: value.upcast() }
    }

    /// Build from a value that only converts to `T` on explicit request.
    #[inline(always)]
    pub fn from_cast<U: Castable<T, Out = T>>(value: U) -> Self {
        OptionWrapper { o: value.cast_to() }
    }

    /// Convert an option of a covariant type, keeping disengaged as disengaged.
    #[inline(always)]
    pub fn upcast<U: Sentinel + Covariant<T>>(other: OptionWrapper<U>) -> Self {
        if other.is_none() {
            Self::none()
        } else {
            OptionWrapper { o: other.o.upcast() }
        }
    }

    #[inline(always)]
    pub fn is_some(&self) -> bool {
        !self.o.is_none()
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool {
        self.o.is_none()
    }

    /// Extract the value, asserting (checked builds) that it is engaged.
    #[inline(always)]
    #[track_caller]
    pub fn unwrap(self) -> T {
        ensure(self.is_some(), Violation::DisengagedOption);
        self.o
    }

    /// Extract the value or the sentinel, without any check.
    #[inline(always)]
    pub fn into_raw(self) -> T {
        self.o
    }

    #[inline(always)]
    pub fn to_option(self) -> Option<T> {
        if self.is_some() { Some(self.o) } else { None }
    }
}

impl<T: Sentinel> Default for OptionWrapper<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Sentinel + fmt::Debug> fmt::Debug for OptionWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            f.debug_tuple("Some").field(&self.o).finish()
        }
    }
}

impl<T: Basic> Basic for OptionWrapper<T> {}

// =============================================================================
// Conversions
// =============================================================================

impl<T: Sentinel> From<NoneMarker> for OptionWrapper<T> {
    #[inline(always)]
    fn from(_: NoneMarker) -> Self {
        Self::none()
    }
}

impl<T: Sentinel> From<T> for OptionWrapper<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        OptionWrapper { o: value }
    }
}

impl<T: Sentinel> From<Option<T>> for OptionWrapper<T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => OptionWrapper { o: v },
            None => Self::none(),
        }
    }
}

impl<T: Sentinel> From<OptionWrapper<T>> for Option<T> {
    #[inline(always)]
    fn from(value: OptionWrapper<T>) -> Self {
        value.to_option()
    }
}

// =============================================================================
// Comparisons: wrapper == wrapper is derived, wrapper == raw and raw == wrapper
// =============================================================================

impl<T: Sentinel> PartialEq<T> for OptionWrapper<T> {
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        self.o == *other
    }
}

impl<T> PartialEq<OptionWrapper<*const T>> for *const T {
    #[inline(always)]
    fn eq(&self, other: &OptionWrapper<*const T>) -> bool {
        *self == other.o
    }
}

impl<T> PartialEq<OptionWrapper<*mut T>> for *mut T {
    #[inline(always)]
    fn eq(&self, other: &OptionWrapper<*mut T>) -> bool {
        *self == other.o
    }
}

macro_rules! impl_raw_eq_option {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<OptionWrapper<$t>> for $t {
                #[inline(always)]
                fn eq(&self, other: &OptionWrapper<$t>) -> bool {
                    *self == other.o
                }
            }
        )*
    };
}

for_each_scalar!(impl_raw_eq_option);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_marker() {
        let o: OptionWrapper<*mut i32> = NONE.into();
        assert!(o.is_none());
        assert!(!o.is_some());
        assert_eq!(o.into_raw(), core::ptr::null_mut());
    }

    #[test]
    fn test_inequality_forms() {
        let a = OptionWrapper::from(3u8);
        let b = OptionWrapper::from(4u8);
        assert!(a != b);
        assert!(a != 4u8);
        assert!(4u8 != a);
        assert!(a == 3u8 && 3u8 == a);
    }

    #[test]
    fn test_debug() {
        extern crate std;
        use std::format;
        assert_eq!(format!("{:?}", OptionWrapper::from(5i32)), "Some(5)");
        assert_eq!(format!("{:?}", OptionWrapper::<i32>::none()), "None");
    }
}
