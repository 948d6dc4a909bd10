//! Pointer <-> address casts.
//!
//! Kept apart from the general cast path: the only thing these check is that
//! the destination is the category the caller meant (a pointer, or an integer
//! wide enough for an address).

/// Integers that hold an address.
pub trait Address: Copy {
    fn from_addr(addr: usize) -> Self;
    fn to_addr(self) -> usize;
}

impl Address for usize {
    #[inline(always)]
    fn from_addr(addr: usize) -> Self {
        addr
    }

    #[inline(always)]
    fn to_addr(self) -> usize {
        self
    }
}

impl Address for isize {
    #[inline(always)]
    fn from_addr(addr: usize) -> Self {
        addr as isize
    }

    #[inline(always)]
    fn to_addr(self) -> usize {
        self as usize
    }
}

/// Thin raw pointers.
pub trait RawPointer: Copy {
    fn from_exposed(addr: usize) -> Self;
    fn expose(self) -> usize;
}

impl<T> RawPointer for *const T {
    #[inline(always)]
    fn from_exposed(addr: usize) -> Self {
        core::ptr::with_exposed_provenance(addr)
    }

    #[inline(always)]
    fn expose(self) -> usize {
        self.expose_provenance()
    }
}

impl<T> RawPointer for *mut T {
    #[inline(always)]
    fn from_exposed(addr: usize) -> Self {
        core::ptr::with_exposed_provenance_mut(addr)
    }

    #[inline(always)]
    fn expose(self) -> usize {
        self.expose_provenance()
    }
}

/// Pointer from an address previously produced by `i_cast`.
///
/// ```compile_fail
/// let _n: u64 = needful::p_cast(0usize);
/// ```
#[inline(always)]
pub fn p_cast<To: RawPointer, From: Address>(addr: From) -> To {
    To::from_exposed(addr.to_addr())
}

/// Address of a pointer, exposing its provenance for a later `p_cast`.
#[inline(always)]
pub fn i_cast<To: Address, From: RawPointer>(p: From) -> To {
    To::from_addr(p.expose())
}
