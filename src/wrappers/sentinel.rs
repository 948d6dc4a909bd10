//! Falsy states.

/// A type with a natural falsy value that can mark "no value" in-band.
///
/// `OptionWrapper<T>` uses `NONE` as its disengaged state, so it needs no
/// discriminant. Enums opt in with `#[derive(Sentinel)]`.
pub trait Sentinel: Copy + PartialEq + Placeholder {
    /// The disengaged bit pattern (null, zero, false).
    const NONE: Self;

    /// Does `self` hold the sentinel?
    #[inline(always)]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// The payload a `ResultWrapper` carries alongside a failure.
pub trait Placeholder {
    fn placeholder() -> Self;
}

macro_rules! impl_sentinel {
    ($($t:ty = $none:expr),* $(,)?) => {
        $(
            impl Sentinel for $t {
                const NONE: Self = $none;
            }

            impl Placeholder for $t {
                #[inline(always)]
                fn placeholder() -> Self { $none }
            }
        )*
    };
}

impl_sentinel!(
    u8 = 0, u16 = 0, u32 = 0, u64 = 0, u128 = 0, usize = 0,
    i8 = 0, i16 = 0, i32 = 0, i64 = 0, i128 = 0, isize = 0,
    f32 = 0.0, f64 = 0.0,
    bool = false,
    char = '\0',
);

impl<T> Sentinel for *const T {
    const NONE: Self = core::ptr::null();

    #[inline(always)]
    fn is_none(&self) -> bool {
        self.is_null()
    }
}

impl<T> Placeholder for *const T {
    #[inline(always)]
    fn placeholder() -> Self {
        core::ptr::null()
    }
}

impl<T> Sentinel for *mut T {
    const NONE: Self = core::ptr::null_mut();

    #[inline(always)]
    fn is_none(&self) -> bool {
        self.is_null()
    }
}

impl<T> Placeholder for *mut T {
    #[inline(always)]
    fn placeholder() -> Self {
        core::ptr::null_mut()
    }
}

/// Success that is nothing but the absence of failure.
impl Placeholder for () {
    #[inline(always)]
    fn placeholder() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(0u32.is_none());
        assert!(!1u32.is_none());
        assert!((-0.0f64).is_none());
        assert!(!f64::NAN.is_none());
        assert!(core::ptr::null::<u8>().is_none());
        assert!(false.is_none());
        assert!('\0'.is_none());
    }
}
