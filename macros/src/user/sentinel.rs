//! `#[derive(Sentinel)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{has_attr, unit_variants};

/// Make a fieldless enum usable inside `OptionWrapper`.
///
/// The sentinel is the variant marked `#[sentinel]`, else the variant whose
/// discriminant is zero.
pub fn expand_derive_sentinel(input: DeriveInput) -> syn::Result<TokenStream2> {
    let variants = unit_variants(&input, "Sentinel")?;

    let mut marked = variants.iter().filter(|v| has_attr(v.attrs, "sentinel"));
    let chosen = match (marked.next(), marked.next()) {
        (Some(v), None) => v,
        (Some(_), Some(second)) => {
            return Err(syn::Error::new_spanned(
                second.ident,
                "only one variant may be `#[sentinel]`",
            ));
        }
        (None, _) => variants
            .iter()
            .find(|v| v.discriminant == Some(0))
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    &input.ident,
                    "no variant has discriminant 0; mark the falsy one `#[sentinel]`",
                )
            })?,
    };

    let name = &input.ident;
    let none = chosen.ident;

    Ok(quote! {
        impl ::needful::wrappers::Sentinel for #name {
            const NONE: Self = #name::#none;
        }

        impl ::needful::wrappers::Placeholder for #name {
            #[inline(always)]
            fn placeholder() -> Self {
                #name::#none
            }
        }
    })
}
