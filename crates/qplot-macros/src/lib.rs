//! Derive macros for qplot.
//!
//! These derives classify a type as a canvas style, an object style or a
//! plottable object, and generate the variant-set plumbing that routes an
//! object to the style selected for it.
//!
//! - [`Style`] - canvas or object style, depending on `#[style(supports(...))]`
//! - [`PlotObject`] - a plottable type and its set of legal styles
//! - [`StyleVariant`] - an enum naming the closed set of styles for an object type
//!
//! Generated code refers to the `qplot` facade crate (`::qplot::...`).
//!
//! For working examples, see `qplot/tests/derive.rs`.

mod object;
mod style;
mod variant;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Classifies a type as a style.
///
/// # Container Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `supports(T1, T2, ...)` | Object types this style can be selected for |
///
/// With a non-empty `supports` list the type becomes an object style:
/// `ObjectStyle` is implemented with `Supports = (T1, T2, ...)` and passing the
/// value to a plot call stores it for each listed type. The type must be
/// `Clone` and each listed type's variant set must contain it.
///
/// Without the attribute, or with an empty list, the type is a canvas style and
/// must implement `qplot::Canvas`.
///
/// ```ignore
/// #[derive(Clone, Style)]
/// #[style(supports(Grid))]
/// struct HeatMap;
///
/// #[derive(Style)]
/// struct Filename(String);
/// ```
#[proc_macro_derive(Style, attributes(style))]
pub fn style_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    style::style_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Marks a type as plottable and names its variant set.
///
/// # Container Attributes
///
/// | Attribute | Required | Description |
/// |-----------|----------|-------------|
/// | `styles = Path` | Yes | Enum deriving `StyleVariant` |
///
/// ```ignore
/// #[derive(PlotObject)]
/// #[plot(styles = Scalar2d)]
/// struct Grid(Vec<Vec<f64>>);
/// ```
#[proc_macro_derive(PlotObject, attributes(plot))]
pub fn plot_object_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::plot_object_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives the closed variant set for an object type.
///
/// Every variant must wrap exactly one style. Generates:
///
/// - `StyleVariant`, naming the held alternative after its variant
/// - `From<Style>` for every alternative
/// - `Visit<T>` for every `T` that all alternatives implement `Draw<T>` for
///
/// ```ignore
/// #[derive(StyleVariant)]
/// enum Scalar2d {
///     HeatMap(HeatMap),
///     NumberGrid(NumberGrid),
///     Contour(ContourPlot),
/// }
/// ```
#[proc_macro_derive(StyleVariant)]
pub fn style_variant_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    variant::style_variant_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
