//! User-facing derive implementations
//!
//! | Derive                | Target              | Emits                                  |
//! |-----------------------|---------------------|----------------------------------------|
//! | `#[derive(Wrapper)]`  | struct              | `Wrapper` with the field's type as tag |
//! | `#[derive(Derived)]`  | `repr(C)` struct    | `unsafe impl Derives<Base>`            |
//! | `#[derive(Sentinel)]` | fieldless enum      | `Sentinel` + `Placeholder`             |
//! | `#[derive(Basic)]`    | fieldless enum      | `Basic`, `ConstForm`, casts to/from repr |

mod basic;
mod derived;
mod sentinel;
mod wrapper;

pub use basic::expand_derive_basic;
pub use derived::expand_derive_derived;
pub use sentinel::expand_derive_sentinel;
pub use wrapper::expand_derive_wrapper;
