//! Debug corruption instrumentation.
//!
//! Memory that is about to be written by a callee is overwritten with a
//! recognizable pattern first, so a caller that reads an output parameter the
//! callee never wrote sees garbage instead of a plausible stale value.
//!
//! Everything here is inert unless `config::CORRUPTION_ENABLED`.

use core::mem::{MaybeUninit, size_of};
use core::ptr;

use crate::config;

/// Byte pattern written into poisoned memory.
pub const POISON_BYTE: u8 = 0xBD;

/// Types that may be overwritten with poison.
///
/// The default `corrupt` fills the value with `POISON_BYTE`.
///
/// # Safety
///
/// After `corrupt` returns, the pointee must still be a valid `Self`. With the
/// default method that means every bit pattern must be valid for `Self`;
/// types with niches (references, `bool`, enums) must override `corrupt`.
pub unsafe trait Corruptible: Sized {
    /// Poison `*p`.
    ///
    /// # Safety
    ///
    /// `p` must be non-null, aligned and valid for writes of `Self`.
    #[inline]
    unsafe fn corrupt(p: *mut Self) {
        unsafe { ptr::write_bytes(p.cast::<u8>(), POISON_BYTE, size_of::<Self>()) }
    }
}

macro_rules! impl_corruptible_bytes {
    ($($t:ty),* $(,)?) => {
        $( unsafe impl Corruptible for $t {} )*
    };
}

impl_corruptible_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

unsafe impl<T> Corruptible for *const T {}
unsafe impl<T> Corruptible for *mut T {}

unsafe impl Corruptible for bool {
    #[inline]
    unsafe fn corrupt(p: *mut Self) {
        unsafe { p.write(true) }
    }
}

unsafe impl Corruptible for char {
    #[inline]
    unsafe fn corrupt(p: *mut Self) {
        unsafe { p.write(char::REPLACEMENT_CHARACTER) }
    }
}

unsafe impl<T: Corruptible, const N: usize> Corruptible for [T; N] {
    #[inline]
    unsafe fn corrupt(p: *mut Self) {
        let first = p.cast::<T>();
        for i in 0..N {
            unsafe { T::corrupt(first.add(i)) }
        }
    }
}

/// Poison `*p` if corruption is enabled.
///
/// # Safety
///
/// `p` must be non-null, aligned and valid for writes of `T`.
#[inline]
pub unsafe fn corrupt<T: Corruptible>(p: *mut T) {
    if config::CORRUPTION_ENABLED {
        log::trace!("poisoning {} bytes at {:p}", size_of::<T>(), p);
        unsafe { T::corrupt(p) }
    }
}

/// Fill a fresh local with poison so that reading it before writing is loud.
#[inline]
pub fn corrupt_if_needful<T>(slot: &mut MaybeUninit<T>) {
    if config::CORRUPTION_ENABLED {
        unsafe { ptr::write_bytes(slot.as_mut_ptr().cast::<u8>(), POISON_BYTE, size_of::<T>()) }
    }
}

// =============================================================================
// Pending flag
// =============================================================================

/// "This target still owes a poison write."
///
/// Move-only: whoever holds the flag is responsible for discharging it, and
/// `take` clears it so the write happens exactly once. Zero-sized when the
/// `corruption` feature is off.
#[cfg(feature = "corruption")]
#[derive(Debug, Default)]
pub struct PendingCorruption {
    pending: bool,
}

#[cfg(not(feature = "corruption"))]
#[derive(Debug, Default)]
pub struct PendingCorruption;

#[cfg(feature = "corruption")]
impl PendingCorruption {
    #[inline(always)]
    const fn from_flag(pending: bool) -> Self {
        PendingCorruption { pending }
    }

    #[inline(always)]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear the flag, reporting whether it was set.
    #[inline(always)]
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }
}

#[cfg(not(feature = "corruption"))]
impl PendingCorruption {
    #[inline(always)]
    const fn from_flag(_pending: bool) -> Self {
        PendingCorruption
    }

    #[inline(always)]
    pub const fn is_pending(&self) -> bool {
        false
    }

    #[inline(always)]
    pub fn take(&mut self) -> bool {
        false
    }
}

impl PendingCorruption {
    /// A flag that owes nothing.
    #[inline(always)]
    pub const fn clear() -> Self {
        Self::from_flag(false)
    }

    /// A flag that owes a poison write if corruption is enabled and `armed`.
    #[inline(always)]
    pub const fn armed(armed: bool) -> Self {
        Self::from_flag(armed && config::CORRUPTION_ENABLED)
    }

    /// Drop the obligation without poisoning (the target will be overwritten).
    #[inline(always)]
    pub fn squash(&mut self) {
        if self.take() {
            log::debug!("pending corruption squashed");
        }
    }

    /// Move the obligation into a new flag, leaving this one clear.
    #[inline(always)]
    pub fn hand_off(&mut self) -> Self {
        let pending = self.take();
        Self::armed(pending)
    }
}
