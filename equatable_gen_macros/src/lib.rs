//! Procedural macros for `equatable_gen`.
//!
//! [`Reflect`](macro@Reflect) records a struct's defining module, its type
//! name, and its field names in declaration order, giving `equatable_gen` the
//! shape it needs to render an `Equatable` conformance without runtime
//! reflection.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `equatable_gen::Reflect`.
///
/// Accepted attributes:
///
/// - `#[equatable(crate = "path")]` references the runtime crate through an
///   aliased dependency name.
/// - `#[equatable(rename = "Name")]` on the struct overrides the emitted type
///   name; dotted names such as `"Outer.Inner"` describe nested types.
/// - `#[equatable(rename_all = "camelCase")]` re-cases every field name.
/// - `#[equatable(rename = "name")]` on a named field overrides that field.
#[proc_macro_derive(Reflect, attributes(equatable))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_reflect(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
