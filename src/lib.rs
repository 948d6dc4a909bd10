#![cfg_attr(not(feature = "std"), no_std)]

//! # needful
//!
//! **Strict type discipline over raw pointers and scalars, at zero layout cost.**
//!
//! Low-level code that traffics in raw pointers loses track of four things the
//! type system could check: may this be null, may it be written, has it been
//! initialized, and is this reinterpretation valid. `needful` puts a
//! `#[repr(transparent)]` wrapper around the plain value for each of these
//! contracts, plus a family of cast operators with injectable validation.
//! No wrapper adds a discriminant or changes layout.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - type-level Bool (Present/Absent), SameAs                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Detection          |  Layer 2: Const propagation        |
//! |  - Wrapper, Basic, probes    |  - Constify, MirrorConst, ...      |
//! |                              |  Layer 2: Contravariance           |
//! |                              |  - Derives, LayoutCheck, Covariant |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Wrappers           |  Layer 4: Casts                    |
//! |  - Option, Result, Sink,     |  - cast!, rigid_cast!, u_cast,     |
//! |    Init, Need, Exact         |    downcast, p_cast, f_cast, hooks |
//! +-------------------------------------------------------------------+
//!          cross-cutting: corrupt (debug poisoning), check, config
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use needful::prelude::*;
//!
//! #[derive(Clone, Copy)]
//! #[repr(C)]
//! struct Base { x: i32 }
//!
//! unsafe impl needful::Corruptible for Base {}
//!
//! #[derive(Clone, Copy, Derived)]
//! #[repr(C)]
//! #[base(Base)]
//! struct Child { base: Base }
//!
//! fn fill(mut out: SinkWrapper<'_, Base>) {
//!     out.write(Base { x: 7 });
//! }
//!
//! fn find(haystack: &[i32], needle: i32) -> OptionWrapper<*const i32> {
//!     match haystack.iter().find(|&&x| x == needle) {
//!         Some(r) => OptionWrapper::from(r as *const i32),
//!         None => NONE.into(),
//!     }
//! }
//!
//! let mut c = Child { base: Base { x: 0 } };
//! fill((&mut c).into());
//! assert_eq!(c.base.x, 7);
//!
//! assert!(find(&[1, 2], 3).is_none());
//! assert_eq!(unsafe { *find(&[1, 2], 2).unwrap() }, 2);
//! ```
//!
//! ## Build switches
//!
//! Cargo features, mirrored as constants in [`config`]: `cast-hooks`
//! (default), `corruption` (default, active in checked builds only), and
//! `checked` (runtime assertions in release builds).

// Allow `::needful` to work inside the crate itself
extern crate self as needful;

// Re-export paste for the probe macros
pub use paste;

#[macro_use]
mod for_each;

pub mod config;
pub mod check;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Const Propagation / Contravariance
// =============================================================================
pub mod constness;
pub mod contra;

// =============================================================================
// Cross-cutting: Debug Corruption
// =============================================================================
pub mod corrupt;

// =============================================================================
// Layer 3: Wrappers
// =============================================================================
pub mod wrappers;

// =============================================================================
// Layer 4: Casts
// =============================================================================
pub mod cast;

// =============================================================================
// Re-exports
// =============================================================================

pub use macros::{Basic, Derived, Sentinel, Wrapper};

pub use cast::{
    CastHook, Castable, Downcast, downcast, f_cast, h_cast, i_cast, p_cast, u_cast, u_rigid_cast,
};
pub use constness::{ConstForm, Constify, MergeConst, MirrorConst, Unconstify};
pub use contra::{Covariant, Derives, LayoutCheck};
pub use corrupt::Corruptible;
pub use detect::{Basic, Wrapper};
pub use wrappers::{
    ExactWrapper, FAIL, FailMarker, FailureSink, InitWrapper, NONE, NeedWrapper, NoneMarker,
    OptionWrapper, Placeholder, ResultWrapper, Sentinel, SinkWrapper,
};

/// Everything needed to declare and use wrapped parameters.
pub mod prelude {
    pub use crate::{cast, rigid_cast};
    pub use crate::{Basic, Derived, Sentinel, Wrapper};
    pub use crate::{
        Castable, CastHook, Corruptible, Derives, ExactWrapper, FAIL, FailureSink, InitWrapper,
        NONE, NeedWrapper, OptionWrapper, ResultWrapper, SinkWrapper, downcast,
    };
}
