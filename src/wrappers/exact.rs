//! Inputs that must be exactly the named type.

use macros::Wrapper;

use crate::detect::Basic;

/// An input that accepts `T` itself and nothing covariant with it.
///
/// Only qualification is normalized: a `*mut T` or `&T` may become an
/// `ExactWrapper<*const T>`. A `*const Derived` is rejected even when its
/// layout would allow it, for callees where substituting a derived type
/// would be semantically wrong.
///
/// ```compile_fail
/// use needful::{Derived, ExactWrapper};
///
/// #[repr(C)]
/// struct Base { x: i32 }
///
/// #[derive(Derived)]
/// #[repr(C)]
/// #[base(Base)]
/// struct Child { base: Base }
///
/// let c = Child { base: Base { x: 1 } };
/// let p: *const Child = &c;
/// let _e: ExactWrapper<*const Base> = p.into();
/// ```
#[derive(Wrapper, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ExactWrapper<T> {
    e: T,
}

impl<T> ExactWrapper<T> {
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        ExactWrapper { e: value }
    }

    #[inline(always)]
    pub fn get(self) -> T {
        self.e
    }
}

impl<T: Basic> Basic for ExactWrapper<T> {}

impl<T> From<T> for ExactWrapper<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<*mut T> for ExactWrapper<*const T> {
    #[inline(always)]
    fn from(p: *mut T) -> Self {
        Self::new(p.cast_const())
    }
}

impl<'a, T> From<&'a T> for ExactWrapper<*const T> {
    #[inline(always)]
    fn from(r: &'a T) -> Self {
        Self::new(r)
    }
}

impl<'a, T> From<&'a mut T> for ExactWrapper<*mut T> {
    #[inline(always)]
    fn from(r: &'a mut T) -> Self {
        Self::new(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualification_normalized() {
        let mut x = 4u16;
        let p: *mut u16 = &mut x;
        let e: ExactWrapper<*const u16> = p.into();
        assert_eq!(e.get(), p.cast_const());
        let e: ExactWrapper<*const u16> = (&x).into();
        assert_eq!(unsafe { *e.get() }, 4);
    }
}
