//! Cast operators other than hook dispatch.
//!
//! 1. Lenient vs rigid
//! 2. Downcast
//! 3. Pointer <-> address
//! 4. Function pointers

use std::cell::Cell;

use needful::prelude::*;
use needful::{f_cast, i_cast, p_cast, u_rigid_cast};

// ============================================================================
// PART 1: LENIENT VS RIGID
// ============================================================================

#[test]
fn test_lenient_cast_keeps_const() {
    let x = 3u32;
    let p: *const u32 = &x;
    // Asking for `*mut` from a const source yields `*const`.
    let q: *const u8 = cast!(*mut u8, p);
    assert_eq!(q, p.cast());
}

#[test]
fn test_rigid_cast_allowed_directions() {
    let mut x = 3u32;
    let pm: *mut u32 = &mut x;
    let pc: *const u32 = pm;
    let a: *mut u8 = rigid_cast!(*mut u8, pm);
    let b: *const u8 = rigid_cast!(*const u8, pm);
    let c: *const u8 = rigid_cast!(*const u8, pc);
    assert_eq!(a.cast_const(), b);
    assert_eq!(b, c);
    let d: *mut i8 = u_rigid_cast::<*mut i8, _>(pm);
    assert_eq!(d.cast::<u8>(), a);
}

#[test]
fn test_scalar_casts_are_value_conversions() {
    assert_eq!(cast!(u8, 0x1_02u16), 2);
    assert_eq!(cast!(i32, -1.5f32), -1);
    assert_eq!(rigid_cast!(u32, 'Z'), 90);
}

#[test]
fn test_option_cast_of_scalar_stays_engaged() {
    let o = cast!(OptionWrapper<u16>, OptionWrapper::from(256u32));
    assert_eq!(o.unwrap(), 256);
    let none: OptionWrapper<u32> = NONE.into();
    assert!(cast!(OptionWrapper<u8>, none).is_none());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "engaged option became disengaged")]
fn test_option_cast_onto_sentinel_asserts() {
    let _ = cast!(OptionWrapper<u8>, OptionWrapper::from(256u32));
}

// ============================================================================
// PART 2: DOWNCAST
// ============================================================================

#[repr(C)]
struct Series {
    kind: u8,
}

thread_local! {
    static DOWNCASTS: Cell<usize> = const { Cell::new(0) };
}

fn check_text(base: *const Series) {
    DOWNCASTS.with(|c| c.set(c.get() + 1));
    if !base.is_null() {
        debug_assert_eq!(unsafe { (*base).kind }, 1, "Series is not Text");
    }
}

#[derive(Derived)]
#[repr(C)]
#[base(Series, check = check_text)]
struct Text {
    series: Series,
}

#[test]
fn test_downcast_runs_validator() {
    let mut t = Text { series: Series { kind: 1 } };
    let s: *mut Series = (&mut t as *mut Text).cast();
    let back: *mut Text = downcast(s).into();
    assert_eq!(unsafe { (*back).series.kind }, 1);
    let expected = if needful::config::CAST_HOOKS_ENABLED { 1 } else { 0 };
    assert_eq!(DOWNCASTS.with(Cell::get), expected);
}

#[test]
fn test_downcast_to_const() {
    let t = Text { series: Series { kind: 1 } };
    let s: *const Series = (&t as *const Text).cast();
    let back: *const Text = downcast(s).into();
    assert!(core::ptr::eq(back, &t));
}

#[test]
fn test_downcast_option_keeps_none() {
    let none: OptionWrapper<*mut Series> = NONE.into();
    let back: OptionWrapper<*mut Text> = downcast(none).into();
    assert!(back.is_none());
}

#[cfg(all(debug_assertions, feature = "cast-hooks"))]
#[test]
#[should_panic(expected = "Series is not Text")]
fn test_downcast_validator_rejects() {
    let mut s = Series { kind: 2 };
    let p: *mut Series = &mut s;
    let _t: *mut Text = downcast(p).into();
}

// ============================================================================
// PART 3: POINTER <-> ADDRESS
// ============================================================================

#[test]
fn test_address_round_trip() {
    let x = [1u8, 2, 3];
    let p: *const u8 = x.as_ptr();
    let addr: usize = i_cast(p);
    let q: *const u8 = p_cast(addr + 1);
    assert_eq!(unsafe { *q }, 2);
}

// ============================================================================
// PART 4: FUNCTION POINTERS
// ============================================================================

fn double(x: u32) -> u32 {
    x * 2
}

#[test]
fn test_fn_pointer_cast() {
    let f: fn(u32) -> u32 = double;
    let g: unsafe fn(u32) -> u32 = unsafe { f_cast(f) };
    assert_eq!(unsafe { g(4) }, 8);
}
