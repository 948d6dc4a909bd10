//! # Layer 4: Cast Dispatch
//!
//! Two independent axes:
//!
//! |              | lenient (const kept silently) | rigid (const mismatch rejected) |
//! |--------------|-------------------------------|---------------------------------|
//! | hookable     | `cast!(To, v)`                | `rigid_cast!(To, v)`            |
//! | unhookable   | `u_cast::<To, _>(v)`          | `u_rigid_cast::<To, _>(v)`      |
//!
//! Hookable casts run the `CastHook` registered for the pair (when
//! `config::CAST_HOOKS_ENABLED`) with the pre-cast value, then convert.
//! Unhookable casts are for fresh memory that a validator must not read.
//! `cast!` finds hooks on concrete types; generic code that needs the hook
//! uses `h_cast`, which requires one.
//!
//! Narrow helpers sit beside them: `downcast` (destination inferred at the
//! binding), `p_cast` / `i_cast` (pointer <-> address), and `f_cast`
//! (function pointers, never hooked).
//!
//! ```
//! use needful::{cast, rigid_cast};
//!
//! let x = 5u32;
//! let p: *const u32 = &x;
//! let b: *const u8 = cast!(*mut u8, p); // lenient: stays const
//! let b2: *const u8 = rigid_cast!(*const u8, p);
//! assert_eq!(b, b2);
//! assert_eq!(cast!(u8, 300u32), 44);
//! ```
//!
//! ```compile_fail
//! use needful::rigid_cast;
//!
//! let x = 5u32;
//! let p: *const u32 = &x;
//! let _b = rigid_cast!(*mut u8, p);
//! ```

mod address;
mod downcast;
mod func;
mod hook;
mod rigid;
mod value;

pub use address::{Address, RawPointer, i_cast, p_cast};
pub use downcast::{Downcast, downcast};
pub use func::{FnCastCheck, FnPtr, f_cast};
#[doc(hidden)]
pub use hook::{HookProbe, Unhooked};
pub use hook::{CastHook, HookKey, run_hook};
#[doc(hidden)]
pub use rigid::rigid_check;
pub use rigid::{RigidCheck, u_rigid_cast};
pub use value::Castable;

/// Unhookable lenient cast.
#[inline(always)]
pub fn u_cast<To, From: Castable<To>>(from: From) -> From::Out {
    from.cast_to()
}

/// Hookable cast for generic code: the pair must have a registered hook.
#[inline(always)]
pub fn h_cast<To, From>(from: From) -> From::Out
where
    From: Castable<To> + HookKey,
    To: HookKey,
    From::Key: CastHook<To::Key>,
{
    run_hook::<To, From>(&from);
    from.cast_to()
}

/// Hookable lenient cast: `cast!(To, value)`.
///
/// Runs the hook registered for the pointee pair, if any, then converts.
#[macro_export]
macro_rules! cast {
    ($To:ty, $value:expr $(,)?) => {{
        let __from = $value;
        {
            #[allow(unused_imports)]
            use $crate::cast::Unhooked as _;
            $crate::cast::HookProbe::<_, $To>::of(&__from).run();
        }
        $crate::cast::Castable::<$To>::cast_to(__from)
    }};
}

/// Hookable rigid cast: `rigid_cast!(To, value)`.
///
/// As `cast!`, but naming a mutable destination for a const source does not
/// compile.
#[macro_export]
macro_rules! rigid_cast {
    ($To:ty, $value:expr $(,)?) => {{
        let __from = $value;
        $crate::cast::rigid_check::<$To, _>(&__from);
        $crate::cast!($To, __from)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u_cast_is_lenient() {
        let x = 1u64;
        let p: *const u64 = &x;
        let q: *const u8 = u_cast::<*mut u8, _>(p);
        assert_eq!(q, p.cast());
    }

    #[test]
    fn test_cast_macro_without_hook() {
        let mut x = 1u64;
        let p: *mut u64 = &mut x;
        let q: *mut u32 = cast!(*mut u32, p);
        assert_eq!(q, p.cast());
        assert_eq!(cast!(f64, 3i32), 3.0);
    }
}
