//! Procedural macros for needful
//!
//! # Derives
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Wrapper)]` | struct | Declare a wrapper; tag read off the field |
//! | `#[derive(Derived)]` | struct | Register a layout-compatible base |
//! | `#[derive(Sentinel)]` | enum | Falsy variant for `OptionWrapper` |
//! | `#[derive(Basic)]` | enum | Scalar-like enum: const-irrelevant, castable |
//!
//! ## Example
//!
//! ```ignore
//! #[repr(C)]
//! struct Series { len: usize }
//!
//! #[derive(Derived)]
//! #[repr(C)]
//! #[base(Series, check = check_is_text)]
//! struct Text { series: Series }
//! ```
//!
//! Generated code names `::needful::...`, so these are meant to be used
//! through the `needful` re-exports.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derives (user/)
// =============================================================================

/// Implement `Wrapper` for a single-field struct, or the `#[wrapped]` field
/// of a multi-field one.
#[proc_macro_derive(Wrapper, attributes(wrapped))]
pub fn derive_wrapper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_wrapper(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declare `Self` layout-compatible with the `#[base(...)]` type.
///
/// Requires `#[repr(C)]`/`#[repr(transparent)]` and the base as first field.
/// `#[base(B, check = path)]` installs `path` as the downcast validator.
#[proc_macro_derive(Derived, attributes(base))]
pub fn derive_derived(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_derived(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Pick the falsy variant of a fieldless enum (`#[sentinel]`, else the zero
/// discriminant).
#[proc_macro_derive(Sentinel, attributes(sentinel))]
pub fn derive_sentinel(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_sentinel(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Mark a fieldless enum as a fundamental type.
#[proc_macro_derive(Basic)]
pub fn derive_basic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_basic(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
