//! Output parameters that are always fully overwritten.

use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::check::{Violation, ensure};
use crate::contra::{Derives, LayoutCheck};
use crate::corrupt::Corruptible;
use crate::detect::Wrapper;
use crate::wrappers::SinkWrapper;

/// A pointer to storage the callee will overwrite without reading.
///
/// Same contravariant construction rules as `SinkWrapper`, but nothing is ever
/// poisoned. Receiving an `InitWrapper` from a `SinkWrapper` cancels the
/// sink's pending poison write.
pub struct InitWrapper<'a, T> {
    p: *mut T,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> InitWrapper<'a, T> {
    #[inline(always)]
    pub const fn null() -> Self {
        InitWrapper {
            p: core::ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn from_uninit(slot: &'a mut MaybeUninit<T>) -> Self {
        InitWrapper {
            p: slot.as_mut_ptr(),
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// A non-null `p` must be aligned and valid for writes of `T` for `'a`,
    /// with no other access to it during `'a`.
    #[inline(always)]
    pub unsafe fn from_raw<D: Derives<T>>(p: *mut D) -> Self {
        let () = LayoutCheck::<T, D>::SAME_LAYOUT;
        InitWrapper {
            p: p.cast(),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.p.is_null()
    }

    #[inline(always)]
    #[track_caller]
    pub fn as_ptr(&mut self) -> *mut T {
        ensure(!self.p.is_null(), Violation::NullSink);
        self.p
    }

    /// Fill the target. The previous contents are not dropped.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, value: T) {
        ensure(!self.p.is_null(), Violation::NullSink);
        unsafe { self.p.write(value) }
    }

    #[inline(always)]
    pub fn reborrow(&mut self) -> InitWrapper<'_, T> {
        InitWrapper {
            p: self.p,
            _marker: PhantomData,
        }
    }
}

impl<'a, B, D: Derives<B>> From<&'a mut D> for InitWrapper<'a, B> {
    #[inline(always)]
    fn from(target: &'a mut D) -> Self {
        let () = LayoutCheck::<B, D>::SAME_LAYOUT;
        InitWrapper {
            p: (target as *mut D).cast(),
            _marker: PhantomData,
        }
    }
}

impl<'a, B, D: Derives<B> + Corruptible> From<SinkWrapper<'a, D>> for InitWrapper<'a, B> {
    #[inline(always)]
    fn from(mut sink: SinkWrapper<'a, D>) -> Self {
        let () = LayoutCheck::<B, D>::SAME_LAYOUT;
        let (p, mut pending) = sink.take_parts();
        pending.squash();
        InitWrapper {
            p: p.cast(),
            _marker: PhantomData,
        }
    }
}

impl<T> Wrapper for InitWrapper<'_, T> {
    type Wrapped = *mut T;

    #[inline(always)]
    fn into_wrapped(self) -> *mut T {
        self.p
    }
}

impl<T> fmt::Debug for InitWrapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InitWrapper").field(&self.p).finish()
    }
}
