//! # Layer 3: Wrapper Type Family
//!
//! Each wrapper enforces one contract on a plain value, without changing its
//! layout:
//!
//! | wrapper              | contract                                   | runtime state  |
//! |----------------------|--------------------------------------------|----------------|
//! | `OptionWrapper<T>`   | may be absent (`T`'s sentinel)              | none           |
//! | `ResultWrapper<T>`   | produced, or placeholder beside a failure  | none           |
//! | `SinkWrapper<T>`     | write-only output, poisoned until written  | pending flag   |
//! | `InitWrapper<T>`     | output that is always overwritten          | none           |
//! | `NeedWrapper<T>`     | covariant input, never absent              | none           |
//! | `ExactWrapper<T>`    | input of exactly `T`                       | none           |

mod exact;
mod init;
mod need;
mod option;
mod result;
mod sentinel;
mod sink;

pub use exact::ExactWrapper;
pub use init::InitWrapper;
pub use need::NeedWrapper;
pub use option::{NONE, NoneMarker, OptionWrapper};
pub use result::{FAIL, FailMarker, FailureSink, ResultWrapper};
pub use sentinel::{Placeholder, Sentinel};
pub use sink::SinkWrapper;
