//! Const-strict casts.

use core::marker::PhantomData;

use crate::cast::Castable;
use crate::constness::ConstForm;

/// Static assertion behind every rigid cast: a mutable destination requires a
/// mutable source.
pub struct RigidCheck<From, To>(PhantomData<(fn() -> From, fn() -> To)>);

impl<From: ConstForm, To: ConstForm> RigidCheck<From, To> {
    pub const OK: () = assert!(
        To::IS_CONST || !From::IS_CONST,
        "rigid cast cannot drop const: a mutable destination needs a mutable source"
    );
}

/// Force `RigidCheck` for the type of `from`, whose type is inferred.
#[doc(hidden)]
#[inline(always)]
pub const fn rigid_check<To: ConstForm, From: ConstForm>(_from: &From) {
    let () = RigidCheck::<From, To>::OK;
}

/// Unhookable rigid cast.
///
/// ```compile_fail
/// let x = 1u32;
/// let p: *const u32 = &x;
/// let _q = needful::u_rigid_cast::<*mut u8, _>(p);
/// ```
#[inline(always)]
pub fn u_rigid_cast<To, From>(from: From) -> From::Out
where
    To: ConstForm,
    From: Castable<To> + ConstForm,
{
    let () = RigidCheck::<From, To>::OK;
    from.cast_to()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_directions() {
        let mut x = 9u32;
        let p: *mut u32 = &mut x;
        let q: *mut u8 = u_rigid_cast::<*mut u8, _>(p);
        let r: *const u8 = u_rigid_cast::<*const u8, _>(p);
        let s: *const i8 = u_rigid_cast::<*const i8, _>(r);
        assert_eq!(q.cast_const(), r);
        assert_eq!(r.cast::<i8>(), s);
        assert_eq!(u_rigid_cast::<u8, _>(300u32), 44);
    }
}
