//! Base-to-derived casts whose destination comes from the binding.

use crate::config;
use crate::contra::Derives;
use crate::wrappers::OptionWrapper;

/// A pending downcast. Converts (via `Into`) to any pointer to a type that
/// derives from the source pointee, running that type's downcast validator.
///
/// ```compile_fail
/// #[deny(unused_must_use)]
/// fn forget_destination(p: *const u32) {
///     needful::downcast(p);
/// }
/// ```
#[must_use = "a downcast does nothing until it is converted to its destination"]
#[derive(Debug, Clone, Copy)]
pub struct Downcast<P>(P);

/// Start a downcast of `p`; the destination is inferred where it is bound.
///
/// ```
/// use needful::{Derived, downcast};
///
/// #[repr(C)]
/// struct Base { tag: u8 }
///
/// #[derive(Derived)]
/// #[repr(C)]
/// #[base(Base)]
/// struct Child { base: Base }
///
/// let mut c = Child { base: Base { tag: 3 } };
/// let b: *mut Base = (&mut c as *mut Child).cast();
/// let back: *mut Child = downcast(b).into();
/// assert_eq!(unsafe { (*back).base.tag }, 3);
/// ```
#[inline(always)]
pub fn downcast<P>(p: P) -> Downcast<P> {
    Downcast(p)
}

#[inline(always)]
fn validated<B, D: Derives<B>>(base: *const B) {
    if config::CAST_HOOKS_ENABLED {
        D::validate_downcast(base);
    }
}

impl<B, D: Derives<B>> From<Downcast<*mut B>> for *mut D {
    #[inline(always)]
    fn from(d: Downcast<*mut B>) -> Self {
        validated::<B, D>(d.0.cast_const());
        d.0.cast()
    }
}

impl<B, D: Derives<B>> From<Downcast<*mut B>> for *const D {
    #[inline(always)]
    fn from(d: Downcast<*mut B>) -> Self {
        validated::<B, D>(d.0.cast_const());
        d.0.cast_const().cast()
    }
}

impl<B, D: Derives<B>> From<Downcast<*const B>> for *const D {
    #[inline(always)]
    fn from(d: Downcast<*const B>) -> Self {
        validated::<B, D>(d.0);
        d.0.cast()
    }
}

impl<B, D: Derives<B>> From<Downcast<OptionWrapper<*mut B>>> for OptionWrapper<*mut D> {
    #[inline(always)]
    fn from(d: Downcast<OptionWrapper<*mut B>>) -> Self {
        let p = d.0.into_raw();
        validated::<B, D>(p.cast_const());
        OptionWrapper::from(p.cast::<D>())
    }
}

impl<B, D: Derives<B>> From<Downcast<OptionWrapper<*const B>>> for OptionWrapper<*const D> {
    #[inline(always)]
    fn from(d: Downcast<OptionWrapper<*const B>>) -> Self {
        let p = d.0.into_raw();
        validated::<B, D>(p);
        OptionWrapper::from(p.cast::<D>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_downcast() {
        let mut x = 5i32;
        let p: *mut i32 = &mut x;
        let q: *const i32 = downcast(p).into();
        assert_eq!(q, p.cast_const());
    }

    #[test]
    fn test_option_downcast_keeps_none() {
        let o: OptionWrapper<*const u8> = OptionWrapper::none();
        let d: OptionWrapper<*const u8> = downcast(o).into();
        assert!(d.is_none());
    }
}
