//! Build switches.
//!
//! Every switch is a `const bool` that is always defined, so code tests a named
//! constant instead of probing for a `cfg` that may be misspelled. Branches on
//! these constants fold away at compile time.

/// Runtime assertions (disengaged Option, null Need, null Sink) are compiled in.
pub const CHECKED: bool = cfg!(any(debug_assertions, feature = "checked"));

/// Hookable casts call the registered `CastHook` before reinterpreting.
pub const CAST_HOOKS_ENABLED: bool = cfg!(feature = "cast-hooks");

/// Output parameters poison their target until it is written.
///
/// Poisoning is a debugging aid, so it is only active in checked builds.
pub const CORRUPTION_ENABLED: bool = cfg!(feature = "corruption") && CHECKED;
