//! `#[derive(Derived)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    DeriveInput, Path, Token, Type,
};

use crate::common::{find_attr, has_layout_repr, same_spelling, struct_fields, try_parse_keyword};

/// Arguments of `#[base(Base)]` / `#[base(Base, check = path::to::fn)]`.
struct BaseArgs {
    base: Type,
    check: Option<Path>,
}

impl Parse for BaseArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let base: Type = input.parse()?;
        let mut check = None;
        if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            if !try_parse_keyword(input, "check")? {
                return Err(input.error("expected `check = path`"));
            }
            input.parse::<Token![=]>()?;
            check = Some(input.parse()?);
            input.parse::<Option<Token![,]>>()?;
        }
        Ok(BaseArgs { base, check })
    }
}

/// Emit `unsafe impl Derives<Base>` after checking what can be checked
/// syntactically: a pinned layout and `Base` as the first field.
///
/// Equal size and alignment are asserted next to the impl for non-generic
/// types. A generic type's layout depends on its parameters, so there the
/// assertion fires at the first use of a concrete pair.
pub fn expand_derive_derived(input: DeriveInput) -> syn::Result<TokenStream2> {
    let attr = find_attr(&input.attrs, "base").ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "#[derive(Derived)] needs `#[base(BaseType)]`")
    })?;
    let BaseArgs { base, check } = attr.parse_args()?;

    if !has_layout_repr(&input.attrs)? {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "a derived type must be `#[repr(C)]` or `#[repr(transparent)]`",
        ));
    }

    let fields = struct_fields(&input, "Derived")?;
    match fields.first() {
        Some(first) if same_spelling(&first.ty, &base) => {}
        Some(first) => {
            return Err(syn::Error::new_spanned(
                &first.ty,
                "the first field of a derived type must be its base",
            ));
        }
        None => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "a derived type must begin with a field of its base type",
            ));
        }
    }

    let validate = check.map(|path| {
        quote! {
            #[inline(always)]
            fn validate_downcast(base: *const #base) {
                #path(base)
            }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let layout = input.generics.params.is_empty().then(|| {
        quote! {
            const _: () = ::needful::contra::LayoutCheck::<#base, #name>::SAME_LAYOUT;
        }
    });

    Ok(quote! {
        unsafe impl #impl_generics ::needful::contra::Derives<#base> for #name #ty_generics #where_clause {
            #validate
        }

        #layout
    })
}
