//! Field and variant access on derive inputs.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Field, Ident, Lit, UnOp};

/// Fields of a struct, in declaration order. Enums and unions are rejected.
pub fn struct_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<Vec<&'a Field>> {
    match &input.data {
        Data::Struct(s) => Ok(s.fields.iter().collect()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("#[derive({derive})] only applies to structs"),
        )),
    }
}

/// `self.name` or `self.0` accessor for the field at `index`.
pub fn field_access(field: &Field, index: usize) -> TokenStream2 {
    match &field.ident {
        Some(ident) => quote!(#ident),
        None => {
            let index = syn::Index::from(index);
            quote!(#index)
        }
    }
}

/// A unit variant and its discriminant, when that is an integer literal.
pub struct UnitVariant<'a> {
    pub ident: &'a Ident,
    pub attrs: &'a [syn::Attribute],
    pub discriminant: Option<i128>,
}

/// Variants of a fieldless enum, with discriminants computed the way the
/// compiler assigns them. A non-literal discriminant makes it and every
/// implicit one after it unknown.
pub fn unit_variants<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<Vec<UnitVariant<'a>>> {
    let data = match &input.data {
        Data::Enum(e) => e,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("#[derive({derive})] only applies to fieldless enums"),
            ));
        }
    };

    let mut next = Some(0i128);
    let mut out = Vec::with_capacity(data.variants.len());
    for v in &data.variants {
        if !v.fields.is_empty() {
            return Err(syn::Error::new_spanned(
                v,
                format!("#[derive({derive})] only applies to fieldless enums"),
            ));
        }
        let discriminant = match &v.discriminant {
            Some((_, expr)) => int_literal(expr),
            None => next,
        };
        next = discriminant.and_then(|d| d.checked_add(1));
        out.push(UnitVariant {
            ident: &v.ident,
            attrs: &v.attrs,
            discriminant,
        });
    }
    Ok(out)
}

fn int_literal(expr: &Expr) -> Option<i128> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(i) => i.base10_parse().ok(),
            _ => None,
        },
        Expr::Unary(u) if matches!(u.op, UnOp::Neg(_)) => int_literal(&u.expr).map(|v| -v),
        Expr::Paren(p) => int_literal(&p.expr),
        _ => None,
    }
}
