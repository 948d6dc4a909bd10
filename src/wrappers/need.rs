//! Inputs that are known to be present.

use macros::Wrapper;

use crate::check::{Violation, ensure};
use crate::contra::{Covariant, Derives};
use crate::detect::Basic;
use crate::wrappers::Sentinel;

/// An input the caller guarantees is not its sentinel.
///
/// Accepts anything covariant with `T`: a `*mut Derived` becomes a
/// `NeedWrapper<*const Base>`. The non-null precondition is asserted once at
/// the boundary (checked builds), so the callee never re-tests it. There is no
/// conversion from `bool` or from an `OptionWrapper`, which would let a
/// "maybe" value slip in unchecked.
///
/// ```compile_fail
/// use needful::{NeedWrapper, OptionWrapper};
///
/// let o: OptionWrapper<*const u8> = needful::NONE.into();
/// let _n: NeedWrapper<*const u8> = o.into();
/// ```
#[derive(Wrapper, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NeedWrapper<T> {
    n: T,
}

impl<T> NeedWrapper<T> {
    #[inline(always)]
    pub(crate) fn raw(&self) -> &T {
        &self.n
    }

    /// Convert an already-checked payload without checking it again.
    #[inline(always)]
    pub(crate) fn map_raw<U>(self, f: impl FnOnce(T) -> U) -> NeedWrapper<U> {
        NeedWrapper { n: f(self.n) }
    }
}

impl<T: Sentinel> NeedWrapper<T> {
    #[inline(always)]
    #[track_caller]
    pub fn new(value: T) -> Self {
        ensure(!value.is_none(), Violation::NullNeed);
        NeedWrapper { n: value }
    }

    /// Accept a covariant value.
    #[inline(always)]
    #[track_caller]
    pub fn upcast<U: Covariant<T>>(value: U) -> Self {
        Self::new(value.upcast())
    }

    #[inline(always)]
    #[track_caller]
    pub fn get(self) -> T {
        ensure(!self.n.is_none(), Violation::NullNeed);
        self.n
    }
}

impl<T: Basic> Basic for NeedWrapper<T> {}

macro_rules! impl_need_from_pointer {
    ($($({$lt:lifetime})? $from:ty => $to:ty),* $(,)?) => {
        $(
            impl<$($lt,)? B, D: Derives<B>> From<$from> for NeedWrapper<$to> {
                #[inline(always)]
                #[track_caller]
                fn from(p: $from) -> Self {
                    let p: *const D = p as *const D;
                    NeedWrapper::new(p.cast::<B>() as $to)
                }
            }
        )*
    };
}

impl_need_from_pointer!(
    *mut D => *mut B,
    *mut D => *const B,
    *const D => *const B,
    {'a} &'a D => *const B,
    {'a} &'a mut D => *const B,
    {'a} &'a mut D => *mut B,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reference() {
        let x = 3i32;
        let n: NeedWrapper<*const i32> = (&x).into();
        assert_eq!(unsafe { *n.get() }, 3);
    }

    #[test]
    fn test_scalar_need() {
        assert_eq!(NeedWrapper::new(7u8).get(), 7);
        assert_eq!(NeedWrapper::<u64>::upcast(7u8).get(), 7);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "null")]
    fn test_null_rejected() {
        let _ = NeedWrapper::new(core::ptr::null::<u8>());
    }
}
