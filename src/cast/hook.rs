//! Injected validation for hookable casts.
//!
//! A hook is registered by implementing `CastHook<To>` for the source pointee,
//! keyed on the pointee types so that `*mut -> *mut`, `*mut -> *const` and
//! `*const -> *const` casts of the same pair run the same validator:
//!
//! ```
//! use needful::cast;
//! use needful::cast::CastHook;
//!
//! #[repr(C)]
//! struct Number { is_float: bool }
//! #[repr(C)]
//! struct Float { is_float: bool }
//!
//! impl CastHook<Float> for Number {
//!     fn validate(from: *const Number) {
//!         debug_assert!(from.is_null() || unsafe { (*from).is_float });
//!     }
//! }
//!
//! let mut n = Number { is_float: true };
//! let p: *mut Number = &mut n;
//! let _f: *mut Float = cast!(*mut Float, p);
//! ```
//!
//! Types without a hook fall back to `Unhooked::run`, which does nothing.

use core::marker::PhantomData;

use crate::config;
use crate::wrappers::{NeedWrapper, OptionWrapper};

/// Validator run by hookable casts from `*Self` to `*To`.
///
/// `from` is the pre-cast value and may be null when the cast source is an
/// `OptionWrapper`. Failure is reported however the implementor likes,
/// usually with `debug_assert!`.
pub trait CastHook<To> {
    fn validate(from: *const Self);
}

/// Maps a cast operand to the pointee type hooks are keyed on.
pub trait HookKey {
    type Key;

    fn hook_view(&self) -> *const Self::Key;
}

impl<T> HookKey for *const T {
    type Key = T;

    #[inline(always)]
    fn hook_view(&self) -> *const T {
        *self
    }
}

impl<T> HookKey for *mut T {
    type Key = T;

    #[inline(always)]
    fn hook_view(&self) -> *const T {
        self.cast_const()
    }
}

impl<P: HookKey> HookKey for OptionWrapper<P> {
    type Key = P::Key;

    #[inline(always)]
    fn hook_view(&self) -> *const P::Key {
        self.raw().hook_view()
    }
}

impl<P: HookKey> HookKey for NeedWrapper<P> {
    type Key = P::Key;

    #[inline(always)]
    fn hook_view(&self) -> *const P::Key {
        self.raw().hook_view()
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Selects between the registered hook and the no-op fallback.
///
/// `HookProbe::of(&value).run()` resolves to the inherent `run` when a hook is
/// registered for the pair and to `Unhooked::run` otherwise. The `Unhooked`
/// trait must be in scope at the call site; `cast!` imports it.
#[doc(hidden)]
pub struct HookProbe<'a, F, To>(&'a F, PhantomData<fn() -> To>);

impl<'a, F, To> HookProbe<'a, F, To> {
    #[inline(always)]
    pub fn of(from: &'a F) -> Self {
        HookProbe(from, PhantomData)
    }
}

impl<F: HookKey, To: HookKey> HookProbe<'_, F, To>
where
    F::Key: CastHook<To::Key>,
{
    #[inline(always)]
    pub fn run(&self) {
        if config::CAST_HOOKS_ENABLED {
            log::trace!(
                "cast hook {} -> {}",
                core::any::type_name::<F::Key>(),
                core::any::type_name::<To::Key>()
            );
            <F::Key as CastHook<To::Key>>::validate(self.0.hook_view());
        }
    }
}

/// No hook registered for the pair.
#[doc(hidden)]
pub trait Unhooked {
    #[inline(always)]
    fn run(&self) {}
}

impl<F, To> Unhooked for HookProbe<'_, F, To> {}

/// Run the hook for `From -> To` in generic code, where the probe cannot see
/// whether one is registered.
#[inline(always)]
pub fn run_hook<To, From>(from: &From)
where
    From: HookKey,
    To: HookKey,
    From::Key: CastHook<To::Key>,
{
    HookProbe::<From, To>::of(from).run();
}
