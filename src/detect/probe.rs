//! Named probes behind `is_wrapper!`, `is_basic!` and `is_sentinel!`.
//!
//! Each probe pairs a fallback trait whose `IS_*` const is `false` with an
//! inherent `IS_*` const on `Probe<T>` that exists only when `T` has the
//! trait. Path resolution prefers the inherent const, so the answer is `true`
//! exactly when the impl is visible. Inside a generic function the bound is
//! never visible and the answer is always `false`.

use core::marker::PhantomData;

#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

macro_rules! impl_probe {
    ($Trait:ident => $path:path) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T: ?Sized> [<$Trait Fallback>] for Probe<T> {}
            impl<T: ?Sized + $path> Probe<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

impl_probe!(Wrapper => crate::detect::Wrapper);
impl_probe!(Basic => crate::detect::Basic);
impl_probe!(Sentinel => crate::wrappers::Sentinel);
