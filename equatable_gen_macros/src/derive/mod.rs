//! Implementation of `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;
mod rename;

/// Parses `input` and generates its `Reflect` impl.
///
/// Invalid input fails fast with a spanned error so the user sees the
/// offending attribute or item.
pub(crate) fn derive_reflect(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::reflect_impl(&parsed))
}
