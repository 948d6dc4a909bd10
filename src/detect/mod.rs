//! # Layer 1: Capability Detection
//!
//! Compile-time questions about a type, used as gates for overload resolution
//! (trait bounds) and static assertions. A negative answer is never an error
//! by itself.
//!
//! | question                        | generic context        | concrete type        |
//! |---------------------------------|------------------------|----------------------|
//! | is T a declared wrapper?        | `T: Wrapper`           | `is_wrapper!(T)`     |
//! | is T fundamental/enum?          | `T: Basic`             | `is_basic!(T)`       |
//! | does T have a falsy sentinel?   | `T: Sentinel`          | `is_sentinel!(T)`    |
//! | is T const-like?                | `is_constlike::<T>()`  | same                 |
//! | is T's constness meaningless?   | `is_const_irrelevant::<T>()` | same           |
//!
//! ```
//! use needful::{is_basic, is_wrapper, OptionWrapper};
//!
//! assert!(is_wrapper!(OptionWrapper<*mut u8>));
//! assert!(!is_wrapper!(*mut u8));
//! assert!(is_basic!(OptionWrapper<u32>));
//! assert!(!is_basic!(OptionWrapper<*mut u32>));
//! ```

#[doc(hidden)]
pub mod probe;

use crate::constness::ConstForm;

// =============================================================================
// Wrapper
// =============================================================================

/// A zero-overhead holder of exactly one value of type `Wrapped`.
///
/// Generic code recovers the wrapped type through `Wrapped` without per-wrapper
/// specializations. Derive it with `#[derive(Wrapper)]`: the tag is then read
/// off the field itself and cannot drift from the type the wrapper holds.
pub trait Wrapper: Sized {
    type Wrapped;

    /// Give up the wrapper and return the wrapped value.
    ///
    /// For output parameters this counts as a read.
    fn into_wrapped(self) -> Self::Wrapped;
}

/// The type a wrapper proxies.
pub type Wrapped<W> = <W as Wrapper>::Wrapped;

// =============================================================================
// Basic
// =============================================================================

/// Fundamental scalars, fieldless enums, and wrappers around either.
///
/// Const qualification is meaningless for these, and casts to them are plain
/// value conversions. Enums opt in with `#[derive(Basic)]`.
pub trait Basic: Copy {}

macro_rules! impl_basic {
    ($($t:ty),* $(,)?) => {
        $( impl Basic for $t {} )*
    };
}

impl_basic!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char,
);

// =============================================================================
// Constness questions
// =============================================================================

/// Is `T` a read-only view (`*const`, `&`, or a wrapper around one)?
pub const fn is_constlike<T: ConstForm + ?Sized>() -> bool {
    T::IS_CONST
}

/// Is const qualification meaningless for `T` (scalars, enums, fn pointers)?
pub const fn is_const_irrelevant<T: ConstForm + ?Sized>() -> bool {
    !T::IS_RELEVANT
}

// =============================================================================
// Probe macros
// =============================================================================

/// `true` when the named concrete type implements `$Trait`.
///
/// Same mechanism as the probes in [`probe`], built ad hoc for any trait.
/// Generic parameters always answer `false`.
///
/// ```
/// use needful::has_impl;
///
/// assert!(has_impl!(u32, Copy));
/// assert!(!has_impl!(String, Copy));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

/// Is `T` a declared wrapper? (`HasWrappedType`)
#[macro_export]
macro_rules! is_wrapper {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::probe::WrapperFallback as _;
        $crate::detect::probe::Probe::<$T>::IS_WRAPPER
    }};
}

/// Is `T` fundamental/enum, possibly through a wrapper? (`IsBasicType`)
#[macro_export]
macro_rules! is_basic {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::probe::BasicFallback as _;
        $crate::detect::probe::Probe::<$T>::IS_BASIC
    }};
}

/// Does `T` have a natural falsy state usable as an option sentinel?
#[macro_export]
macro_rules! is_sentinel {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::probe::SentinelFallback as _;
        $crate::detect::probe::Probe::<$T>::IS_SENTINEL
    }};
}
