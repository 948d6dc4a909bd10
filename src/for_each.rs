//! Crate-internal macro plumbing shared by several layers.

/// Invoke `$m!([A0, .., An] <fn pointer type>)` for every fn pointer shape
/// the crate supports: arity 0..=6, plain / `unsafe` / `extern "C"`.
macro_rules! for_each_fn_ptr {
    ($m:ident) => {
        for_each_fn_ptr!(@arity $m;);
        for_each_fn_ptr!(@arity $m; A0);
        for_each_fn_ptr!(@arity $m; A0, A1);
        for_each_fn_ptr!(@arity $m; A0, A1, A2);
        for_each_fn_ptr!(@arity $m; A0, A1, A2, A3);
        for_each_fn_ptr!(@arity $m; A0, A1, A2, A3, A4);
        for_each_fn_ptr!(@arity $m; A0, A1, A2, A3, A4, A5);
    };
    (@arity $m:ident; $($A:ident),*) => {
        $m!([$($A),*] fn($($A),*) -> R);
        $m!([$($A),*] unsafe fn($($A),*) -> R);
        $m!([$($A),*] extern "C" fn($($A),*) -> R);
        $m!([$($A),*] unsafe extern "C" fn($($A),*) -> R);
    };
}

/// Invoke `$m!(T)` for every fundamental scalar.
macro_rules! for_each_scalar {
    ($m:ident) => {
        $m!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);
    };
}
