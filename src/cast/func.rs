//! Function pointer casts.
//!
//! Never hooked and never checked at runtime: there is no uniform way to
//! inspect a callable, and these must cost nothing in every build.

use core::marker::PhantomData;
use core::mem::size_of;

/// Function pointer types of arity 0..=6 (plain, `unsafe`, `extern "C"`).
///
/// # Safety
///
/// Implementors must be function pointers.
pub unsafe trait FnPtr: Copy {}

macro_rules! impl_fn_ptr {
    ([$($A:ident),*] $f:ty) => {
        unsafe impl<R, $($A),*> FnPtr for $f {}
    };
}

for_each_fn_ptr!(impl_fn_ptr);

/// Static assertion that two function pointer types have the same size.
pub struct FnCastCheck<From, To>(PhantomData<(From, To)>);

impl<From, To> FnCastCheck<From, To> {
    pub const SAME_SIZE: () = assert!(
        size_of::<From>() == size_of::<To>(),
        "function pointer cast between types of different size"
    );
}

/// Reinterpret one function pointer type as another.
///
/// # Safety
///
/// Calling the result is only sound if the real function's signature and ABI
/// are compatible with `To`.
///
/// ```
/// extern "C" fn three() -> u32 { 3 }
///
/// let f: extern "C" fn() -> u32 = three;
/// let g: unsafe extern "C" fn() -> i32 = unsafe { needful::f_cast(f) };
/// assert_eq!(unsafe { g() }, 3);
/// ```
#[inline(always)]
pub unsafe fn f_cast<To: FnPtr, From: FnPtr>(f: From) -> To {
    let () = FnCastCheck::<From, To>::SAME_SIZE;
    unsafe { core::mem::transmute_copy::<From, To>(&f) }
}
