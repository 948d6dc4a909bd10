//! Attribute and keyword helpers shared by the derives.

use syn::{parse::ParseStream, Attribute, Ident, Type};

// =============================================================================
// Keywords inside attribute arguments
// =============================================================================

/// Consume `keyword` if it is the next identifier.
///
/// Used for `check = ...` in `#[base(Base, check = ...)]`, where `check` is
/// an ordinary identifier rather than a Rust keyword.
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    let is_keyword = input
        .fork()
        .parse::<Ident>()
        .is_ok_and(|ident| ident == keyword);
    if is_keyword {
        input.parse::<Ident>()?;
    }
    Ok(is_keyword)
}

// =============================================================================
// Attributes
// =============================================================================

/// First attribute named `name`, e.g. `#[base(...)]`.
pub fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|a| a.path().is_ident(name))
}

pub fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    find_attr(attrs, name).is_some()
}

/// Every identifier listed in `#[repr(...)]` attributes, e.g. `C`, `u8`.
///
/// Arguments such as `align(8)` are skipped.
pub fn repr_idents(attrs: &[Attribute]) -> syn::Result<Vec<Ident>> {
    let mut out = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            if let Some(ident) = meta.path.get_ident() {
                out.push(ident.clone());
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Is the layout pinned by `#[repr(C)]` or `#[repr(transparent)]`?
pub fn has_layout_repr(attrs: &[Attribute]) -> syn::Result<bool> {
    Ok(repr_idents(attrs)?
        .iter()
        .any(|i| i == "C" || i == "transparent"))
}

const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// The integer an enum is represented as (`isize` when unspecified).
pub fn int_repr(attrs: &[Attribute]) -> syn::Result<Type> {
    let int = repr_idents(attrs)?
        .into_iter()
        .find(|i| INT_REPRS.contains(&i.to_string().as_str()));
    match int {
        Some(ident) => Ok(syn::parse_quote!(#ident)),
        None => Ok(syn::parse_quote!(isize)),
    }
}

/// Compare two types by their token spelling.
pub fn same_spelling(a: &Type, b: &Type) -> bool {
    use quote::ToTokens;
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}
