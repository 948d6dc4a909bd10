//! The underlying conversions every cast operator ends in.

use crate::check::{Violation, ensure};
use crate::wrappers::{NeedWrapper, OptionWrapper, Sentinel};

/// A conversion from `Self` that must be requested explicitly.
///
/// `To` is the type the caller asks for; `Out` is what it gets. They differ
/// only for pointers, where `Out` is `MergeConst<Self, To>`: a lenient cast
/// from a `*const` source to a `*mut` destination stays `*const`.
pub trait Castable<To> {
    type Out;

    fn cast_to(self) -> Self::Out;
}

// =============================================================================
// Scalars
// =============================================================================

macro_rules! impl_castable_as {
    ([$($from:ty),* $(,)?] => $to:tt) => {
        $( impl_castable_as!(@one $from => $to); )*
    };
    (@one $from:ty => [$($to:ty),* $(,)?]) => {
        $(
            impl Castable<$to> for $from {
                type Out = $to;

                #[inline(always)]
                fn cast_to(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_castable_as!(
    [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64]
    => [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64]
);
impl_castable_as!(
    [bool, char] => [u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize]
);
impl_castable_as!([bool] => [bool]);
impl_castable_as!([char] => [char]);
impl_castable_as!([u8] => [char]);

// =============================================================================
// Pointers
// =============================================================================

impl<F, T> Castable<*const T> for *const F {
    type Out = *const T;

    #[inline(always)]
    fn cast_to(self) -> *const T {
        self.cast()
    }
}

/// Lenient: asking for `*mut` from a `*const` source keeps it `*const`.
impl<F, T> Castable<*mut T> for *const F {
    type Out = *const T;

    #[inline(always)]
    fn cast_to(self) -> *const T {
        self.cast()
    }
}

impl<F, T> Castable<*const T> for *mut F {
    type Out = *const T;

    #[inline(always)]
    fn cast_to(self) -> *const T {
        self.cast_const().cast()
    }
}

impl<F, T> Castable<*mut T> for *mut F {
    type Out = *mut T;

    #[inline(always)]
    fn cast_to(self) -> *mut T {
        self.cast()
    }
}

// =============================================================================
// Wrappers
// =============================================================================

/// Disengaged stays disengaged: the sentinel of a pointer or integer casts to
/// the sentinel of the destination.
///
/// Engaged must stay engaged too. A truncating scalar cast can land on the
/// destination's sentinel (`256u32` as `u8`, `0.5f32` as `u32`); checked
/// builds reject that instead of silently dropping the value.
impl<F, T> Castable<OptionWrapper<T>> for OptionWrapper<F>
where
    F: Castable<T> + Sentinel,
    F::Out: Sentinel,
{
    type Out = OptionWrapper<F::Out>;

    #[inline(always)]
    #[track_caller]
    fn cast_to(self) -> Self::Out {
        let engaged = self.is_some();
        let out = self.map_raw(|v| <F as Castable<T>>::cast_to(v));
        ensure(!engaged || out.is_some(), Violation::LostEngagement);
        out
    }
}

impl<F: Castable<T>, T> Castable<NeedWrapper<T>> for NeedWrapper<F> {
    type Out = NeedWrapper<F::Out>;

    #[inline(always)]
    fn cast_to(self) -> Self::Out {
        self.map_raw(|v| <F as Castable<T>>::cast_to(v))
    }
}
