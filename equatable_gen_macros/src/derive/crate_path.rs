//! Runtime crate path used by generated impls.
//!
//! Users who depend on `equatable_gen` under another name (or re-export it
//! from their own crate) point the derive at it with
//! `#[equatable(crate = "...")]`.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens naming the crate that defines the `Reflect` trait.
///
/// Without an override this is plain `equatable_gen`; otherwise the user's
/// path is emitted unchanged, so `#[equatable(crate = "vendored::gen")]`
/// produces `impl vendored::gen::Reflect for ...`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { equatable_gen }, |path| quote! { #path })
}
