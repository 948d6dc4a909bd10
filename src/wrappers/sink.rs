//! Write-only output parameters.

use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;

use crate::check::{Violation, ensure};
use crate::contra::{Derives, LayoutCheck};
use crate::corrupt::{Corruptible, PendingCorruption, corrupt};
use crate::detect::Wrapper;

/// A pointer to storage the callee promises to fill with a valid `T`.
///
/// Building a sink from a real pointer arms a pending poison write. The write
/// is deferred to the first read of the sink (`as_ptr`, `as_mut`,
/// `into_wrapped`, or drop), so arguments of the same call that alias the
/// target are all evaluated before anything is poisoned. `write` overwrites
/// the target and so cancels the poisoning.
///
/// Contravariant in the pointee: a `SinkWrapper<Base>` accepts storage for
/// any `D: Derives<Base>` of the same layout, while the reverse is rejected.
///
/// ```
/// use needful::SinkWrapper;
///
/// fn produce(mut out: SinkWrapper<'_, u32>) {
///     out.write(42);
/// }
///
/// let mut x = 0u32;
/// produce((&mut x).into());
/// assert_eq!(x, 42);
/// ```
pub struct SinkWrapper<'a, T: Corruptible> {
    p: *mut T,
    pending: PendingCorruption,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T: Corruptible> SinkWrapper<'a, T> {
    /// A sink with nowhere to write.
    #[inline(always)]
    pub const fn null() -> Self {
        SinkWrapper {
            p: core::ptr::null_mut(),
            pending: PendingCorruption::clear(),
            _marker: PhantomData,
        }
    }

    /// Sink into fresh storage.
    #[inline(always)]
    pub fn from_uninit(slot: &'a mut MaybeUninit<T>) -> Self {
        SinkWrapper {
            p: slot.as_mut_ptr(),
            pending: PendingCorruption::armed(true),
            _marker: PhantomData,
        }
    }

    /// Sink into storage behind a raw pointer, which may be null.
    ///
    /// # Safety
    ///
    /// A non-null `p` must be aligned and valid for reads and writes of `T`
    /// for `'a`, with no other access to it during `'a`.
    #[inline(always)]
    pub unsafe fn from_raw<D: Derives<T>>(p: *mut D) -> Self {
        let () = LayoutCheck::<T, D>::SAME_LAYOUT;
        SinkWrapper {
            p: p.cast(),
            pending: PendingCorruption::armed(!p.is_null()),
            _marker: PhantomData,
        }
    }

    /// Test for a real target. Does not count as a read.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.p.is_null()
    }

    /// Is a poison write still owed by this sink?
    #[inline(always)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    #[inline(always)]
    fn discharge(&mut self) {
        if self.pending.take() {
            unsafe { corrupt(self.p) }
        }
    }

    /// Read the target pointer, asserting (checked builds) that it is real.
    #[inline]
    #[track_caller]
    pub fn as_ptr(&mut self) -> *mut T {
        self.discharge();
        ensure(!self.p.is_null(), Violation::NullSink);
        self.p
    }

    /// Borrow the target.
    ///
    /// # Safety
    ///
    /// The sink must be non-null. With corruption enabled the target has just
    /// been poisoned, so it must not be read before it is written.
    #[inline]
    #[track_caller]
    pub unsafe fn as_mut(&mut self) -> &mut T {
        unsafe { &mut *self.as_ptr() }
    }

    /// Fill the target. The previous contents are not dropped.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, value: T) {
        self.pending.squash();
        ensure(!self.p.is_null(), Violation::NullSink);
        unsafe { self.p.write(value) }
    }

    /// A shorter-lived sink to the same target.
    ///
    /// The pending write moves to the new sink: whichever of the two is read
    /// first poisons, the other never does.
    #[inline(always)]
    pub fn reborrow(&mut self) -> SinkWrapper<'_, T> {
        SinkWrapper {
            p: self.p,
            pending: self.pending.hand_off(),
            _marker: PhantomData,
        }
    }

    /// Hand the target to a writer that overwrites it unconditionally.
    #[inline(always)]
    pub fn into_init(self) -> super::InitWrapper<'a, T> {
        self.into()
    }

    /// Take the target pointer and the pending flag, leaving a disarmed sink.
    #[inline(always)]
    pub(crate) fn take_parts(&mut self) -> (*mut T, PendingCorruption) {
        (self.p, self.pending.hand_off())
    }
}

impl<'a, B: Corruptible, D: Derives<B>> From<&'a mut D> for SinkWrapper<'a, B> {
    #[inline(always)]
    fn from(target: &'a mut D) -> Self {
        let () = LayoutCheck::<B, D>::SAME_LAYOUT;
        SinkWrapper {
            p: (target as *mut D).cast(),
            pending: PendingCorruption::armed(true),
            _marker: PhantomData,
        }
    }
}

/// Reading the raw pointer out discharges the sink.
///
/// Unlike `as_ptr`, this does not assert a real target: it forwards the sink
/// to a callee that takes a raw, possibly null, output pointer, and null is
/// how "no output wanted" is spelled there. The callee tests for null before
/// writing, so the null sink is never dereferenced on this path.
impl<T: Corruptible> Wrapper for SinkWrapper<'_, T> {
    type Wrapped = *mut T;

    #[inline(always)]
    fn into_wrapped(mut self) -> *mut T {
        self.discharge();
        self.p
    }
}

impl<T: Corruptible> Drop for SinkWrapper<'_, T> {
    #[inline]
    fn drop(&mut self) {
        self.discharge();
    }
}

impl<T: Corruptible> fmt::Debug for SinkWrapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkWrapper")
            .field("p", &self.p)
            .field("pending", &self.pending.is_pending())
            .finish()
    }
}
