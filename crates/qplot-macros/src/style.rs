//! Derive macro for style classification.
//!
//! Container attributes, applied with `#[style(...)]`:
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `supports(T1, ...)` | Object types the style is selected for |
//!
//! A missing or empty `supports` list classifies the type as a canvas style.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    DeriveInput, Error, Meta, Result, Token, Type,
};

/// Container-level attributes: `#[style(supports(...))]`
#[derive(Default)]
struct StyleAttrs {
    supports: Vec<Type>,
}

impl Parse for StyleAttrs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attrs = StyleAttrs::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::List(list) if list.path.is_ident("supports") => {
                    let types =
                        list.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                    attrs.supports.extend(types);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown attribute, expected `supports(Type, ...)`",
                    ));
                }
            }
        }

        Ok(attrs)
    }
}

fn parse_style_attrs(input: &DeriveInput) -> Result<StyleAttrs> {
    for attr in &input.attrs {
        if attr.path().is_ident("style") {
            return attr.parse_args::<StyleAttrs>();
        }
    }
    Ok(StyleAttrs::default())
}

pub fn style_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let attrs = parse_style_attrs(&input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    if attrs.supports.is_empty() {
        return Ok(quote! {
            impl #impl_generics ::qplot::Arg for #name #ty_generics #where_clause {
                fn command(&self) -> ::qplot::Command<'_> {
                    ::qplot::Command::Canvas(self)
                }
            }
        });
    }

    let supports = &attrs.supports;

    Ok(quote! {
        impl #impl_generics ::qplot::ObjectStyle for #name #ty_generics #where_clause {
            type Supports = (#(#supports,)*);
        }

        impl #impl_generics ::qplot::Arg for #name #ty_generics #where_clause {
            fn command(&self) -> ::qplot::Command<'_> {
                ::qplot::Command::Select(self)
            }
        }
    })
}
