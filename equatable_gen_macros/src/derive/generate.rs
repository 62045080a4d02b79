//! Token generation for the `Reflect` impl.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::ReflectInput;

/// Generates `impl Reflect` for the parsed struct.
///
/// `MODULE_PATH` expands `module_path!()` at the call site so it names the
/// module that defines the type.
pub(crate) fn reflect_impl(input: &ReflectInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let type_name = input.type_name();
    let fields = &input.fields;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
            const MODULE_PATH: &'static str = ::core::module_path!();
            const TYPE_NAME: &'static str = #type_name;
            const FIELD_NAMES: &'static [&'static str] = &[#(#fields),*];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use syn::{DeriveInput, parse_quote};

    fn expand(input: &DeriveInput) -> Result<String> {
        Ok(reflect_impl(&parse_input(input)?).to_string())
    }

    #[rstest]
    fn generates_impl_for_named_struct() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Point { x: i32, y: i32 }
        };
        let expected = quote! {
            impl equatable_gen::Reflect for Point {
                const MODULE_PATH: &'static str = ::core::module_path!();
                const TYPE_NAME: &'static str = "Point";
                const FIELD_NAMES: &'static [&'static str] = &["x", "y"];
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens == expected.to_string(),
            "generated tokens differ: {tokens} != {expected}"
        );
        Ok(())
    }

    #[rstest]
    fn generates_empty_field_list_for_unit_struct() -> Result<()> {
        let input: DeriveInput = parse_quote! { struct Marker; };
        let tokens = expand(&input)?;
        let expected = quote! { const FIELD_NAMES: &'static [&'static str] = &[]; };
        ensure!(
            tokens.contains(&expected.to_string()),
            "missing empty field list in {tokens}"
        );
        Ok(())
    }

    #[rstest]
    fn carries_generics_and_where_clause() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> where T: Clone { inner: T }
        };
        let tokens = expand(&input)?;
        let expected = quote! {
            impl<T> equatable_gen::Reflect for Wrapper<T> where T: Clone
        };
        ensure!(
            tokens.starts_with(&expected.to_string()),
            "unexpected impl header in {tokens}"
        );
        Ok(())
    }

    #[rstest]
    fn honours_crate_alias_and_rename() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[equatable(crate = "gen_alias", rename = "Outer.Point")]
            struct Point { x: i32 }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.starts_with(&quote! { impl gen_alias::Reflect for Point }.to_string()),
            "crate alias not applied in {tokens}"
        );
        ensure!(tokens.contains("\"Outer.Point\""), "rename not applied in {tokens}");
        Ok(())
    }
}
