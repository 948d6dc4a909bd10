//! Runtime tier of the error model.
//!
//! Almost every misuse is rejected at compile time. The handful of invariants
//! that cannot be checked statically are asserted here, and only in checked
//! builds (`config::CHECKED`). A violation is a programmer error: it logs and
//! panics, it is never returned.

use core::fmt;

use crate::config;

/// An invariant that could only be checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Checked extraction from an `OptionWrapper` holding its sentinel.
    DisengagedOption,
    /// A `NeedWrapper` was built from, or read as, a null/sentinel value.
    NullNeed,
    /// An output parameter was read while holding no real pointer.
    NullSink,
    /// An integer did not match any variant of the enum it was cast to.
    BadEnumValue,
    /// An engaged `OptionWrapper` was cast onto the destination's sentinel.
    LostEngagement,
}

impl Violation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Violation::DisengagedOption => "checked extraction of a disengaged option",
            Violation::NullNeed => "required value is null",
            Violation::NullSink => "output parameter read without a real pointer",
            Violation::BadEnumValue => "integer does not name a variant of the target enum",
            Violation::LostEngagement => "engaged option became disengaged after cast",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report a violation and halt.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violation(kind: Violation) -> ! {
    log::error!("needful violation: {}", kind);
    panic!("needful: {}", kind)
}

/// Assert `cond` in checked builds; compiles to nothing otherwise.
#[inline(always)]
#[track_caller]
pub fn ensure(cond: bool, kind: Violation) {
    if config::CHECKED && !cond {
        violation(kind)
    }
}
