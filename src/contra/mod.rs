//! # Layer 2: Contravariance / Compatibility
//!
//! Decides when a pointer to one type may stand in for a pointer to another.
//!
//! The relation is structural: `Derived: Derives<Base>` asserts that `Derived`
//! is `#[repr(C)]`/`#[repr(transparent)]` with a `Base` as its first field and
//! adds no storage. The "adds no storage" half is verified by
//! `LayoutCheck::SAME_LAYOUT` the first time a given pair is used.
//!
//! Inputs are covariant: a `*const Derived` may be read as a `*const Base`.
//! Output parameters are contravariant: `SinkWrapper<Base>` accepts storage
//! for a `Derived` (writing a full `Base` fills it), while
//! `SinkWrapper<Derived>` rejects storage for a `Base`.
//!
//! ```compile_fail
//! use needful::{Corruptible, Derived, SinkWrapper};
//!
//! #[derive(Clone, Copy)]
//! #[repr(C)]
//! struct Base { x: i32 }
//!
//! #[derive(Clone, Copy, Derived)]
//! #[repr(C)]
//! #[base(Base)]
//! struct Child { base: Base }
//!
//! unsafe impl Corruptible for Base {}
//! unsafe impl Corruptible for Child {}
//!
//! let mut b = Base { x: 1 };
//! let _s: SinkWrapper<Child> = (&mut b).into();
//! ```

use core::marker::PhantomData;
use core::mem::{align_of, size_of};

// =============================================================================
// Derives
// =============================================================================

/// `Self` is `Base` extended with nothing but a new nominal type.
///
/// Every type derives from itself. Other pairs come from `#[derive(Derived)]`,
/// which checks the repr and the first field, and asserts equal size and
/// alignment at compile time (for generic types, at the first use of a
/// concrete pair).
///
/// ```compile_fail
/// use needful::Derived;
///
/// #[repr(C)]
/// struct Base { x: i32 }
///
/// #[derive(Derived)]
/// #[repr(C)]
/// #[base(Base)]
/// struct Wider { base: Base, extra: i64 }
/// ```
///
/// # Safety
///
/// `Self` must be `#[repr(C)]` or `#[repr(transparent)]`, must begin with a
/// field of type `Base`, and must not be larger than `Base`. Any bit pattern
/// that is a valid `Base` must be a valid `Self`.
pub unsafe trait Derives<Base: ?Sized> {
    /// Validate a base pointer before it is downcast to `Self`.
    ///
    /// Runs only when cast hooks are enabled. The pointer may be null.
    #[inline(always)]
    fn validate_downcast(_base: *const Base) {}
}

unsafe impl<T: ?Sized> Derives<T> for T {}

// =============================================================================
// Layout check
// =============================================================================

/// Static assertion that `Derived` adds no storage to `Base`.
pub struct LayoutCheck<Base, Derived>(PhantomData<(*const Base, *const Derived)>);

impl<Base, Derived> LayoutCheck<Base, Derived> {
    /// Evaluated (and cached) per pair at its first use.
    pub const SAME_LAYOUT: () = assert!(
        size_of::<Base>() == size_of::<Derived>() && align_of::<Base>() == align_of::<Derived>(),
        "derived type adds storage to its base: output parameter substitution would be unsound"
    );
}

/// Is `Derived` storage acceptable where a writer of `Base` is expected?
///
/// Forces the layout check; the answer is a compile-time `true` or a build error.
#[inline(always)]
pub const fn output_compatible<Base, Derived: Derives<Base>>() -> bool {
    let () = LayoutCheck::<Base, Derived>::SAME_LAYOUT;
    true
}

// =============================================================================
// Covariant
// =============================================================================

/// Implicit, lossless conversion of an input value to `To`.
///
/// Used where an ordinary language would allow implicit conversion: building
/// an option from a narrower value, or a required pointer from a derived one.
pub trait Covariant<To> {
    fn upcast(self) -> To;
}

impl<B, D: Derives<B>> Covariant<*mut B> for *mut D {
    #[inline(always)]
    fn upcast(self) -> *mut B {
        self.cast()
    }
}

impl<B, D: Derives<B>> Covariant<*const B> for *mut D {
    #[inline(always)]
    fn upcast(self) -> *const B {
        self.cast_const().cast()
    }
}

impl<B, D: Derives<B>> Covariant<*const B> for *const D {
    #[inline(always)]
    fn upcast(self) -> *const B {
        self.cast()
    }
}

macro_rules! impl_covariant_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Covariant<$t> for $t {
                #[inline(always)]
                fn upcast(self) -> $t { self }
            }
        )*
    };
}

for_each_scalar!(impl_covariant_identity);

macro_rules! impl_covariant_widen {
    ($($from:ty => [$($to:ty),*]);* $(;)?) => {
        $($(
            impl Covariant<$to> for $from {
                #[inline(always)]
                fn upcast(self) -> $to { <$to>::from(self) }
            }
        )*)*
    };
}

impl_covariant_widen!(
    u8 => [u16, u32, u64, u128, usize, i16, i32, i64, i128, f32, f64];
    u16 => [u32, u64, u128, usize, i32, i64, i128, f32, f64];
    u32 => [u64, u128, i64, i128, f64];
    u64 => [u128, i128];
    i8 => [i16, i32, i64, i128, isize, f32, f64];
    i16 => [i32, i64, i128, isize, f32, f64];
    i32 => [i64, i128, f64];
    i64 => [i128];
    f32 => [f64];
    bool => [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize];
);

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    struct Base {
        x: i32,
    }

    #[repr(transparent)]
    struct Child {
        base: Base,
    }

    unsafe impl Derives<Base> for Child {}

    #[test]
    fn test_pointer_covariance() {
        let mut c = Child { base: Base { x: 5 } };
        let p: *mut Child = &mut c;
        let b: *const Base = p.upcast();
        assert_eq!(unsafe { (*b).x }, 5);
        assert_eq!(unsafe { (*p).base.x }, 5);
    }

    #[test]
    fn test_output_compatible() {
        assert!(output_compatible::<Base, Child>());
        assert!(output_compatible::<Base, Base>());
    }

    #[test]
    fn test_widening() {
        let w: u64 = 7u8.upcast();
        let f: f64 = 3i32.upcast();
        let b: i32 = true.upcast();
        assert_eq!((w, f, b), (7, 3.0, 1));
    }
}
