//! Const propagation laws.

use needful::{
    Constify, ExactWrapper, MergeConst, MirrorConst, NeedWrapper, OptionWrapper, ResultWrapper,
    Unconstify, assert_same_type,
};
use needful::detect::{is_const_irrelevant, is_constlike};

// ============================================================================
// Round trip and idempotence
// ============================================================================

macro_rules! check_laws {
    ($($T:ty),* $(,)?) => {
        $(
            assert_same_type!(Unconstify<Constify<$T>>, Unconstify<$T>);
            assert_same_type!(Constify<Unconstify<$T>>, Constify<$T>);
            assert_same_type!(Constify<Constify<$T>>, Constify<$T>);
            assert_same_type!(Unconstify<Unconstify<$T>>, Unconstify<$T>);
        )*
    };
}

#[test]
fn test_round_trip_and_idempotence() {
    check_laws!(
        *const u8,
        *mut u8,
        &'static str,
        u64,
        fn(u8) -> u8,
        OptionWrapper<*mut i32>,
        ResultWrapper<*const i32>,
        NeedWrapper<OptionWrapper<*mut u8>>,
        ExactWrapper<u32>,
    );
}

// ============================================================================
// Projection
// ============================================================================

macro_rules! check_projection {
    ($(($From:ty, $To:ty)),* $(,)?) => {
        $(
            assert_same_type!(MirrorConst<$From, MirrorConst<$From, $To>>, MirrorConst<$From, $To>);
            assert_same_type!(MergeConst<$From, MergeConst<$From, $To>>, MergeConst<$From, $To>);
        )*
    };
}

#[test]
fn test_projection() {
    check_projection!(
        (*const u8, *mut u32),
        (*mut u8, *const u32),
        (*mut u8, *mut u32),
        (OptionWrapper<*const u8>, NeedWrapper<*mut u32>),
        (u8, *const u32),
    );
}

#[test]
fn test_mirror_never_changes_the_type() {
    assert_same_type!(MirrorConst<*const u8, OptionWrapper<*mut i64>>, OptionWrapper<*const i64>);
    assert_same_type!(MirrorConst<*mut u8, u16>, u16);
    // A const-irrelevant source counts as mutable.
    assert_same_type!(MirrorConst<u8, *const u16>, *mut u16);
}

#[test]
fn test_constness_predicates_through_wrappers() {
    assert!(is_constlike::<OptionWrapper<*const u8>>());
    assert!(!is_constlike::<NeedWrapper<*mut u8>>());
    assert!(is_const_irrelevant::<ResultWrapper<()>>());
    assert!(!is_const_irrelevant::<ResultWrapper<*mut ()>>());
}
