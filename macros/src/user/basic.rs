//! `#[derive(Basic)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{int_repr, unit_variants};

/// Treat a fieldless enum like a fundamental scalar: const-irrelevant,
/// covariant only with itself, and castable to and from its integer repr.
///
/// Casting an integer that names no variant is a violation.
pub fn expand_derive_basic(input: DeriveInput) -> syn::Result<TokenStream2> {
    let variants = unit_variants(&input, "Basic")?;
    let repr = int_repr(&input.attrs)?;
    let name = &input.ident;
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();

    Ok(quote! {
        impl ::needful::detect::Basic for #name {}

        impl ::needful::constness::ConstForm for #name {
            type Constified = Self;
            type Unconstified = Self;
            type IsConst = ::needful::primitives::Absent;
            type Relevant = ::needful::primitives::Absent;
        }

        impl ::needful::contra::Covariant<#name> for #name {
            #[inline(always)]
            fn upcast(self) -> Self {
                self
            }
        }

        impl ::needful::cast::Castable<#name> for #name {
            type Out = #name;

            #[inline(always)]
            fn cast_to(self) -> Self {
                self
            }
        }

        impl ::needful::cast::Castable<#repr> for #name {
            type Out = #repr;

            #[inline(always)]
            fn cast_to(self) -> #repr {
                self as #repr
            }
        }

        impl ::needful::cast::Castable<#name> for #repr {
            type Out = #name;

            #[inline]
            #[track_caller]
            fn cast_to(self) -> #name {
                #(
                    if self == #name::#idents as #repr {
                        return #name::#idents;
                    }
                )*
                ::needful::check::violation(::needful::check::Violation::BadEnumValue)
            }
        }
    })
}
