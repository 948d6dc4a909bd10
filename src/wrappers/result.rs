//! Produced values that may instead carry a failure placeholder.
//!
//! The failure itself travels out of band. Here that channel is an explicit
//! `FailureSink` passed by the caller, never global state.

use macros::Wrapper;

use crate::detect::Basic;
use crate::wrappers::Placeholder;

/// Marker that converts into the failure placeholder of any `ResultWrapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailMarker;

/// The failure placeholder.
pub const FAIL: FailMarker = FailMarker;

/// Either a produced `T`, or a placeholder `T` that stands beside a failure
/// recorded in a `FailureSink`.
///
/// The placeholder is only reachable through `fail`, `FAIL`, or `fail_into`.
/// A produced zero is still a produced value. `ResultWrapper<()>` is zero-sized:
/// success is nothing but the absence of failure.
///
/// ```
/// use needful::{FailureSink, ResultWrapper};
///
/// fn parse_digit(c: char, failures: &mut FailureSink<&'static str>) -> ResultWrapper<u32> {
///     match c.to_digit(10) {
///         Some(d) => d.into(),
///         None => ResultWrapper::fail_into(failures, "not a digit"),
///     }
/// }
///
/// let mut failures = FailureSink::new();
/// assert_eq!(parse_digit('7', &mut failures).resolve(&mut failures), Ok(7));
/// assert_eq!(parse_digit('x', &mut failures).resolve(&mut failures), Err("not a digit"));
/// ```
#[derive(Wrapper, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ResultWrapper<T> {
    r: T,
}

impl<T> ResultWrapper<T> {
    /// A produced value.
    #[inline(always)]
    pub const fn ok(value: T) -> Self {
        ResultWrapper { r: value }
    }

    /// The payload, whether produced or placeholder.
    #[inline(always)]
    pub fn into_payload(self) -> T {
        self.r
    }

    /// Pair the payload with whatever the sink recorded.
    ///
    /// Takes the failure out of the sink, so the sink is clear afterwards.
    #[inline]
    pub fn resolve<E>(self, failures: &mut FailureSink<E>) -> Result<T, E> {
        match failures.take() {
            Some(e) => Err(e),
            None => Ok(self.r),
        }
    }
}

impl<T: Placeholder> ResultWrapper<T> {
    /// The failure placeholder.
    #[inline(always)]
    pub fn fail() -> Self {
        ResultWrapper { r: T::placeholder() }
    }

    /// Record `error` and return the placeholder that goes with it.
    #[inline]
    pub fn fail_into<E>(failures: &mut FailureSink<E>, error: E) -> Self {
        failures.record(error);
        Self::fail()
    }

    /// Does the payload have the placeholder bit pattern?
    ///
    /// Only meaningful next to a sink: a produced zero also answers `true`.
    #[inline(always)]
    pub fn is_placeholder(&self) -> bool
    where
        T: PartialEq,
    {
        self.r == T::placeholder()
    }
}

impl<T> From<T> for ResultWrapper<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::ok(value)
    }
}

impl<T: Placeholder> From<FailMarker> for ResultWrapper<T> {
    #[inline(always)]
    fn from(_: FailMarker) -> Self {
        Self::fail()
    }
}

impl<T: Basic> Basic for ResultWrapper<T> {}

// =============================================================================
// FailureSink
// =============================================================================

/// Caller-owned channel carrying the failure that a placeholder stands for.
#[derive(Debug)]
pub struct FailureSink<E> {
    failure: Option<E>,
}

impl<E> FailureSink<E> {
    pub const fn new() -> Self {
        FailureSink { failure: None }
    }

    /// Record a failure. A second failure replaces the first.
    pub fn record(&mut self, error: E) {
        if self.failure.is_some() {
            log::debug!("failure sink overwritten before it was read");
        }
        self.failure = Some(error);
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn take(&mut self) -> Option<E> {
        self.failure.take()
    }
}

impl<E> Default for FailureSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_result_is_zero_sized() {
        assert_eq!(core::mem::size_of::<ResultWrapper<()>>(), 0);
        assert_eq!(core::mem::size_of::<ResultWrapper<*mut u8>>(), core::mem::size_of::<*mut u8>());
    }

    #[test]
    fn test_fail_marker_gives_placeholder() {
        let r: ResultWrapper<*mut u8> = FAIL.into();
        assert!(r.is_placeholder());
        assert!(r.into_payload().is_null());
        let u: ResultWrapper<()> = ResultWrapper::fail();
        u.into_payload();
    }

    #[test]
    fn test_produced_zero_is_not_failure() {
        let mut failures: FailureSink<()> = FailureSink::new();
        let r = ResultWrapper::from(0u32);
        assert_eq!(r.resolve(&mut failures), Ok(0));
    }

    #[test]
    fn test_resolve_clears_sink() {
        let mut failures = FailureSink::new();
        let r: ResultWrapper<u8> = ResultWrapper::fail_into(&mut failures, 42);
        assert!(failures.is_failed());
        assert_eq!(r.resolve(&mut failures), Err(42));
        assert!(!failures.is_failed());
    }
}
