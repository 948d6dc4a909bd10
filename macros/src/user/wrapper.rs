//! `#[derive(Wrapper)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{field_access, has_attr, struct_fields};

/// Implement `::needful::detect::Wrapper` with the wrapped field's own type as
/// the tag, so the tag can never drift from what the wrapper holds.
///
/// The wrapped field is the only field, or the one marked `#[wrapped]`.
pub fn expand_derive_wrapper(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = struct_fields(&input, "Wrapper")?;

    let (index, field) = match fields.as_slice() {
        [only] => (0, *only),
        _ => {
            let mut marked = fields
                .iter()
                .enumerate()
                .filter(|(_, f)| has_attr(&f.attrs, "wrapped"));
            match (marked.next(), marked.next()) {
                (Some((i, f)), None) => (i, *f),
                (None, _) => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "a wrapper with several fields must mark one `#[wrapped]`",
                    ));
                }
                (Some(_), Some((_, second))) => {
                    return Err(syn::Error::new_spanned(
                        second,
                        "only one field may be `#[wrapped]`",
                    ));
                }
            }
        }
    };

    let name = &input.ident;
    let ty = &field.ty;
    let access = field_access(field, index);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::needful::detect::Wrapper for #name #ty_generics #where_clause {
            type Wrapped = #ty;

            #[inline(always)]
            fn into_wrapped(self) -> #ty {
                self.#access
            }
        }
    })
}
