//! # Layer 0: Primitives
//!
//! Basic building blocks for the type discipline:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `same.rs`: Type identity (`SameAs`, `assert_same_type!`).

pub mod bool;
pub mod same;

pub use bool::{Absent, Bool, Present};
pub use same::SameAs;
