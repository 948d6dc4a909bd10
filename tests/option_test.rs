//! OptionWrapper: sentinel-based optionality.
//!
//! Organized as:
//! 1. Construction
//! 2. Extraction (checked / unchecked)
//! 3. Comparisons
//! 4. Properties over all values

use needful::prelude::*;
use needful::NoneMarker;

#[repr(C)]
struct Base {
    x: i32,
}

#[derive(Derived)]
#[repr(C)]
#[base(Base)]
struct Child {
    base: Base,
}

// ============================================================================
// PART 1: CONSTRUCTION
// ============================================================================

#[test]
fn test_none_marker_is_disengaged() {
    let o: OptionWrapper<*mut i32> = NONE.into();
    assert!(!o.is_some());
    assert!(o.is_none());
}

#[test]
fn test_none_marker_for_every_sentinel_type() {
    fn check<T: needful::Sentinel>() {
        let o: OptionWrapper<T> = NoneMarker.into();
        assert!(o.is_none());
        assert!(OptionWrapper::<T>::default().is_none());
    }
    check::<u8>();
    check::<i128>();
    check::<f32>();
    check::<bool>();
    check::<char>();
    check::<*const String>();
}

#[test]
fn test_from_convertible_value() {
    let o = OptionWrapper::<u64>::from_value(7u8);
    assert_eq!(o.unwrap(), 7);
}

#[test]
fn test_from_mutable_pointer_into_const_option() {
    let mut x = 4u8;
    let pm: *mut u8 = &mut x;
    let o = OptionWrapper::<*const u8>::from_value(pm);
    assert_eq!(o.unwrap(), pm.cast_const());
    let none = OptionWrapper::<*const u8>::from_value(core::ptr::null_mut::<u8>());
    assert!(none.is_none());
}

#[test]
fn test_from_derived_pointer_into_base_option() {
    let mut c = Child { base: Base { x: 11 } };
    let pm: *mut Child = &mut c;
    let o = OptionWrapper::<*const Base>::from_value(pm);
    assert_eq!(unsafe { (*o.unwrap()).x }, 11);
    let pc: *const Child = pm;
    let o = OptionWrapper::<*const Base>::from_value(pc);
    assert_eq!(unsafe { (*o.unwrap()).x }, 11);
    let o = OptionWrapper::<*mut Base>::from_value(pm);
    assert_eq!(unsafe { (*o.unwrap()).x }, 11);
}

#[test]
fn test_from_explicit_cast() {
    let o = OptionWrapper::<u8>::from_cast(300u32);
    assert_eq!(o.unwrap(), 44);
}

#[test]
fn test_upcast_keeps_disengaged() {
    let none: OptionWrapper<u8> = NONE.into();
    assert!(OptionWrapper::<u32>::upcast(none).is_none());
    let some = OptionWrapper::from(9u8);
    assert_eq!(OptionWrapper::<u32>::upcast(some).unwrap(), 9);
}

#[test]
fn test_std_option_round_trip() {
    let o: OptionWrapper<i16> = Some(-3).into();
    assert_eq!(Option::<i16>::from(o), Some(-3));
    let o: OptionWrapper<i16> = None.into();
    assert_eq!(o.to_option(), None);
}

#[test]
fn test_float_sentinel_edges() {
    assert!(OptionWrapper::from(-0.0f32).is_none());
    assert!(OptionWrapper::from(f32::NAN).is_some());
    assert!(OptionWrapper::from(f64::MIN_POSITIVE).is_some());
}

#[test]
fn test_same_layout_as_payload() {
    use core::mem::size_of;
    assert_eq!(size_of::<OptionWrapper<*mut u8>>(), size_of::<*mut u8>());
    assert_eq!(size_of::<OptionWrapper<u16>>(), size_of::<u16>());
}

// ============================================================================
// PART 2: EXTRACTION
// ============================================================================

#[test]
fn test_checked_extract_returns_pointer() {
    let mut x = 10;
    let p: *mut i32 = &mut x;
    let o: OptionWrapper<*mut i32> = p.into();
    assert_eq!(o.unwrap(), p);
}

#[test]
fn test_unchecked_extract_of_null_does_not_assert() {
    let p: *mut i32 = core::ptr::null_mut();
    let o: OptionWrapper<*mut i32> = p.into();
    assert!(o.into_raw().is_null());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "disengaged option")]
fn test_checked_extract_of_null_asserts() {
    let p: *mut i32 = core::ptr::null_mut();
    let o: OptionWrapper<*mut i32> = p.into();
    let _ = o.unwrap();
}

// ============================================================================
// PART 3: COMPARISONS
// ============================================================================

#[test]
fn test_all_six_comparison_forms() {
    let a = OptionWrapper::from(1i32);
    let b = OptionWrapper::from(2i32);

    assert!(a == a);
    assert!(a != b);
    assert!(a == 1i32);
    assert!(a != 2i32);
    assert!(1i32 == a);
    assert!(2i32 != a);
}

#[test]
fn test_pointer_comparisons() {
    let x = 0u8;
    let p: *const u8 = &x;
    let o: OptionWrapper<*const u8> = p.into();
    let none: OptionWrapper<*const u8> = NONE.into();
    assert!(o == p && p == o);
    assert!(none != p && p != none);
    assert!(none == core::ptr::null());
}

// ============================================================================
// PART 4: PROPERTIES
// ============================================================================

mod proptests {
    use needful::OptionWrapper;
    use proptest::prelude::*;

    proptest! {
        /// Engaged exactly when the bits differ from the sentinel.
        #[test]
        fn engaged_iff_not_sentinel(v in any::<u32>()) {
            let o = OptionWrapper::from(v);
            prop_assert_eq!(o.is_some(), v != 0);
            prop_assert_eq!(o.into_raw(), v);
        }

        /// A convertible non-sentinel value comes back unchanged through the
        /// checked path.
        #[test]
        fn checked_extract_of_converted_value(v in any::<i32>().prop_filter("non-zero", |v| *v != 0)) {
            let o = OptionWrapper::<i64>::from_value(v);
            prop_assert_eq!(o.unwrap(), i64::from(v));
        }

        /// Only `0.0` and `-0.0` are the float sentinel; NaN and every other
        /// value are engaged.
        #[test]
        fn float_engaged_iff_nonzero(v in any::<f64>()) {
            let o = OptionWrapper::from(v);
            prop_assert_eq!(o.is_some(), v != 0.0);
            prop_assert_eq!(o.into_raw().to_bits(), v.to_bits());
        }

        /// A pointer is engaged exactly when it is non-null, and `from_value`
        /// keeps the address while adding const.
        #[test]
        fn pointer_engaged_iff_non_null(addr in any::<usize>()) {
            let p = core::ptr::without_provenance_mut::<u8>(addr);
            let o = OptionWrapper::<*const u8>::from_value(p);
            prop_assert_eq!(o.is_some(), addr != 0);
            prop_assert_eq!(o.into_raw().addr(), addr);
        }
    }
}
