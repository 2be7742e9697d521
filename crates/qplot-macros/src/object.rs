//! Derive macro for plottable objects.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    DeriveInput, Error, Expr, Meta, Path, Result, Token,
};

/// Container-level attributes: `#[plot(styles = Path)]`
#[derive(Default)]
struct PlotAttrs {
    styles: Option<Path>,
}

impl Parse for PlotAttrs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attrs = PlotAttrs::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("styles") => {
                    if let Expr::Path(expr_path) = &nv.value {
                        attrs.styles = Some(expr_path.path.clone());
                    } else {
                        return Err(Error::new(nv.value.span(), "expected path"));
                    }
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown attribute, expected `styles = path`",
                    ));
                }
            }
        }

        Ok(attrs)
    }
}

fn parse_plot_attrs(input: &DeriveInput) -> Result<PlotAttrs> {
    for attr in &input.attrs {
        if attr.path().is_ident("plot") {
            return attr.parse_args::<PlotAttrs>();
        }
    }

    Err(Error::new(
        input.span(),
        "missing `#[plot(styles = path)]` attribute",
    ))
}

pub fn plot_object_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let attrs = parse_plot_attrs(&input)?;
    let styles = attrs.styles.ok_or_else(|| {
        Error::new(input.span(), "missing `styles` in `#[plot(styles = path)]`")
    })?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::qplot::PlotObject for #name #ty_generics #where_clause {
            type Styles = #styles;
        }

        impl #impl_generics ::qplot::Arg for #name #ty_generics #where_clause {
            fn command(&self) -> ::qplot::Command<'_> {
                ::qplot::Command::Object(self)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_styles_path() {
        let input: DeriveInput = parse_quote! {
            #[plot(styles = styles::Scalar2d)]
            struct Grid;
        };
        let attrs = parse_plot_attrs(&input).unwrap();
        let path = attrs.styles.unwrap();
        assert_eq!(path.segments.last().unwrap().ident, "Scalar2d");
    }

    #[test]
    fn test_missing_attribute_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Grid;
        };
        let err = plot_object_derive_impl(input).err().unwrap();
        assert!(err.to_string().contains("missing `#[plot(styles = path)]`"));
    }

    #[test]
    fn test_empty_attribute_rejected() {
        let input: DeriveInput = parse_quote! {
            #[plot()]
            struct Grid;
        };
        let err = plot_object_derive_impl(input).err().unwrap();
        assert!(err.to_string().contains("missing `styles`"));
    }

    #[test]
    fn test_non_path_rejected() {
        let input: DeriveInput = parse_quote! {
            #[plot(styles = "Scalar2d")]
            struct Grid;
        };
        let err = plot_object_derive_impl(input).err().unwrap();
        assert_eq!(err.to_string(), "expected path");
    }
}
