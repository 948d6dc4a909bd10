//! # Layer 2: Const Propagation
//!
//! Computes the read-only and writable forms of a type and copies constness
//! from one type onto another.
//!
//! | input                          | `Constify`            | `Unconstify`         |
//! |--------------------------------|-----------------------|----------------------|
//! | `*mut T` / `*const T`          | `*const T`            | `*mut T`             |
//! | `&'a mut T` / `&'a T`          | `&'a T`               | `&'a mut T`          |
//! | fn pointer                     | unchanged             | unchanged            |
//! | scalar, enum, `()`             | unchanged             | unchanged            |
//! | `XxxWrapper<T>`                | `XxxWrapper<Constify<T>>` | `XxxWrapper<Unconstify<T>>` |
//!
//! Both directions are idempotent. Output parameters (`SinkWrapper`,
//! `InitWrapper`) have no const form: a write target cannot be read-only, so
//! asking for one does not compile.
//!
//! ```compile_fail
//! use needful::{Constify, SinkWrapper};
//!
//! let _: Option<Constify<SinkWrapper<'static, u32>>> = None;
//! ```

use crate::primitives::{Absent, Bool, Present};
use crate::wrappers::{ExactWrapper, NeedWrapper, OptionWrapper, ResultWrapper};

/// Const qualification of a type, as seen by the propagation engine.
pub trait ConstForm {
    /// `Self` with a read-only pointee (unchanged where constness is moot).
    type Constified: ConstForm;

    /// `Self` with a writable pointee (unchanged where constness is moot).
    type Unconstified: ConstForm;

    /// `Present` for read-only views.
    type IsConst: Bool;

    /// `Absent` when const qualification carries no meaning for `Self`.
    type Relevant: Bool;

    const IS_CONST: bool = <Self::IsConst as Bool>::VALUE;
    const IS_RELEVANT: bool = <Self::Relevant as Bool>::VALUE;
}

/// Read-only form of `T`.
pub type Constify<T> = <T as ConstForm>::Constified;

/// Writable form of `T`.
pub type Unconstify<T> = <T as ConstForm>::Unconstified;

/// `To`, made const or mutable to match `From`. Never changes which type `To` is.
pub type MirrorConst<From, To> =
    <<From as ConstForm>::IsConst as Bool>::If<Constify<To>, Unconstify<To>>;

/// `To`, made const if `From` is const; otherwise `To` untouched.
///
/// Only ever adds const, so a cast cannot silently strip the source's
/// read-only annotation.
pub type MergeConst<From, To> = <<From as ConstForm>::IsConst as Bool>::If<Constify<To>, To>;

// =============================================================================
// Pointers and references
// =============================================================================

impl<T: ?Sized> ConstForm for *const T {
    type Constified = *const T;
    type Unconstified = *mut T;
    type IsConst = Present;
    type Relevant = Present;
}

impl<T: ?Sized> ConstForm for *mut T {
    type Constified = *const T;
    type Unconstified = *mut T;
    type IsConst = Absent;
    type Relevant = Present;
}

impl<'a, T: ?Sized> ConstForm for &'a T {
    type Constified = &'a T;
    type Unconstified = &'a mut T;
    type IsConst = Present;
    type Relevant = Present;
}

impl<'a, T: ?Sized> ConstForm for &'a mut T {
    type Constified = &'a T;
    type Unconstified = &'a mut T;
    type IsConst = Absent;
    type Relevant = Present;
}

// =============================================================================
// Const-irrelevant types
// =============================================================================

macro_rules! impl_const_irrelevant {
    ($($t:ty),* $(,)?) => {
        $(
            impl ConstForm for $t {
                type Constified = $t;
                type Unconstified = $t;
                type IsConst = Absent;
                type Relevant = Absent;
            }
        )*
    };
}

for_each_scalar!(impl_const_irrelevant);
impl_const_irrelevant!(());

macro_rules! impl_const_form_fn {
    ([$($A:ident),*] $f:ty) => {
        impl<R, $($A),*> ConstForm for $f {
            type Constified = $f;
            type Unconstified = $f;
            type IsConst = Absent;
            type Relevant = Absent;
        }
    };
}

for_each_fn_ptr!(impl_const_form_fn);

// =============================================================================
// Wrappers: recurse one level, rebuild the same wrapper
// =============================================================================

macro_rules! impl_const_form_wrapper {
    ($($W:ident),* $(,)?) => {
        $(
            impl<T: ConstForm> ConstForm for $W<T> {
                type Constified = $W<T::Constified>;
                type Unconstified = $W<T::Unconstified>;
                type IsConst = T::IsConst;
                type Relevant = T::Relevant;
            }
        )*
    };
}

impl_const_form_wrapper!(OptionWrapper, ResultWrapper, NeedWrapper, ExactWrapper);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_same_type;

    #[test]
    fn test_pointer_forms() {
        assert_same_type!(Constify<*mut u8>, *const u8);
        assert_same_type!(Constify<*const u8>, *const u8);
        assert_same_type!(Unconstify<*const u8>, *mut u8);
        assert_same_type!(Unconstify<*mut u8>, *mut u8);
        assert_same_type!(Constify<&'static mut str>, &'static str);
    }

    #[test]
    fn test_irrelevant_forms_unchanged() {
        assert_same_type!(Constify<u32>, u32);
        assert_same_type!(Unconstify<bool>, bool);
        assert_same_type!(Constify<fn(*mut u8) -> i32>, fn(*mut u8) -> i32);
        assert_same_type!(Constify<unsafe extern "C" fn()>, unsafe extern "C" fn());
    }

    #[test]
    fn test_wrapper_recursion() {
        assert_same_type!(Constify<OptionWrapper<*mut u8>>, OptionWrapper<*const u8>);
        assert_same_type!(
            Unconstify<NeedWrapper<OptionWrapper<*const u8>>>,
            NeedWrapper<OptionWrapper<*mut u8>>
        );
        assert!(<OptionWrapper<*const u8> as ConstForm>::IS_CONST);
        assert!(!<ExactWrapper<u8> as ConstForm>::IS_RELEVANT);
    }

    #[test]
    fn test_mirror_and_merge() {
        assert_same_type!(MirrorConst<*const u8, *mut u32>, *const u32);
        assert_same_type!(MirrorConst<*mut u8, *const u32>, *mut u32);
        assert_same_type!(MergeConst<*const u8, *mut u32>, *const u32);
        assert_same_type!(MergeConst<*mut u8, *const u32>, *const u32);
        assert_same_type!(MergeConst<*mut u8, *mut u32>, *mut u32);
    }
}
