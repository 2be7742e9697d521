//! Derive macro for style variant sets.
//!
//! Each enum variant wraps one style. The generated `Visit<T>` impl is generic
//! over the object type and bounded on every alternative implementing
//! `Draw<T>`, so it exists exactly for the object types all alternatives can
//! be asked to draw (including by an empty `Draw<T>` impl that declines).

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result, Type};

struct Alternative<'a> {
    variant: &'a Ident,
    ty: &'a Type,
}

fn collect_alternatives(input: &DeriveInput) -> Result<Vec<Alternative<'_>>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new(
                input.span(),
                "StyleVariant can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(Error::new(
            input.span(),
            "StyleVariant needs at least one style alternative",
        ));
    }

    data.variants
        .iter()
        .map(|variant| match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Alternative {
                variant: &variant.ident,
                ty: &fields.unnamed[0].ty,
            }),
            _ => Err(Error::new(
                variant.span(),
                "each StyleVariant variant must wrap exactly one style, e.g. `HeatMap(HeatMap)`",
            )),
        })
        .collect()
}

pub fn style_variant_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "StyleVariant cannot be derived for generic enums",
        ));
    }

    let alternatives = collect_alternatives(&input)?;
    let name = &input.ident;

    let variants: Vec<_> = alternatives.iter().map(|a| a.variant).collect();
    let types: Vec<_> = alternatives.iter().map(|a| a.ty).collect();
    let labels: Vec<String> = variants.iter().map(|v| v.to_string()).collect();

    let from_impls = alternatives.iter().map(|a| {
        let variant = a.variant;
        let ty = a.ty;
        quote! {
            impl ::core::convert::From<#ty> for #name {
                fn from(style: #ty) -> Self {
                    #name::#variant(style)
                }
            }
        }
    });

    Ok(quote! {
        impl ::qplot::StyleVariant for #name {
            fn alternative(&self) -> &'static str {
                match self {
                    #(#name::#variants(_) => #labels,)*
                }
            }
        }

        #(#from_impls)*

        impl<__QplotObject> ::qplot::Visit<__QplotObject> for #name
        where
            #(#types: ::qplot::Draw<__QplotObject>,)*
        {
            fn visit(
                &self,
                session: &mut ::qplot::Session,
                object: &__QplotObject,
            ) -> ::std::io::Result<::qplot::Drawn> {
                match self {
                    #(#name::#variants(style) => {
                        ::qplot::Draw::<__QplotObject>::draw(style, session, object)
                    })*
                }
            }
        }
    })
}
