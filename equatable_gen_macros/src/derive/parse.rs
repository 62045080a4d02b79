//! Input parsing for the `Reflect` derive macro.
//!
//! Gathers the struct identifier, generics, attribute metadata, and the final
//! field names in one pass so expansion fails fast with useful errors.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr};

use super::rename::RenameAll;

/// Struct-level `#[equatable(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
    /// Type name emitted in place of the struct identifier.
    pub rename: Option<String>,
    pub rename_all: Option<RenameAll>,
}

/// Everything code generation needs from the derive input.
pub(crate) struct ReflectInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    /// Field names in declaration order; positional fields are empty.
    pub fields: Vec<String>,
}

impl ReflectInput {
    /// Name emitted for the type: the `rename` override or the identifier.
    pub(crate) fn type_name(&self) -> String {
        self.attrs
            .rename
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }
}

/// Iterate all `#[equatable(...)]` attributes once and apply a callback.
fn parse_equatable<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("equatable")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    meta.value()?
        .parse::<LitStr>()
        .map_err(|err| syn::Error::new(err.span(), format!("{key} must be a string")))
}

fn non_empty(lit: &LitStr, key: &str) -> syn::Result<String> {
    let value = lit.value();
    if value.trim().is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            format!("{key} must not be empty"),
        ));
    }
    Ok(value)
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_equatable(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            Some("rename") => {
                let s = lit_str(meta, "rename")?;
                out.rename = Some(non_empty(&s, "rename")?);
                Ok(())
            }
            Some("rename_all") => {
                let s = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameAll::parse(&s)?);
                Ok(())
            }
            _ => Err(meta.error(
                "unsupported equatable attribute; expected `crate`, `rename`, or `rename_all`",
            )),
        }
    })?;
    Ok(out)
}

/// Returns the field-level `rename` override, if any.
pub(crate) fn parse_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    parse_equatable(attrs, |meta| {
        if meta.path.is_ident("rename") {
            let s = lit_str(meta, "rename")?;
            rename = Some(non_empty(&s, "rename")?);
            Ok(())
        } else {
            Err(meta.error("unsupported equatable field attribute; expected `rename`"))
        }
    })?;
    Ok(rename)
}

fn field_names(fields: &Fields, rename_all: Option<RenameAll>) -> syn::Result<Vec<String>> {
    let mut names = Vec::with_capacity(fields.len());
    for field in fields {
        let rename = parse_field_rename(&field.attrs)?;
        let name = match (&field.ident, rename) {
            (Some(_), Some(explicit)) => explicit,
            (Some(ident), None) => {
                let raw = ident.unraw().to_string();
                rename_all.map_or_else(|| raw.clone(), |rule| rule.apply(&raw))
            }
            (None, Some(_)) => {
                return Err(syn::Error::new_spanned(
                    field,
                    "rename is only supported on named fields",
                ));
            }
            (None, None) => String::new(),
        };
        names.push(name);
    }
    Ok(names)
}

/// Gathers information from the user-provided struct.
///
/// Named, tuple, and unit structs are accepted; enums and unions are
/// rejected because they have no single field list to compare.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ReflectInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => field_names(&data.fields, attrs.rename_all)?,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Reflect can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Reflect can only be derived for structs",
            ));
        }
    };
    Ok(ReflectInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;
    use syn::parse_quote;

    fn parse_err(input: &DeriveInput) -> Result<String> {
        parse_input(input)
            .err()
            .map(|err| err.to_string())
            .ok_or_else(|| anyhow!("expected parse_input to fail"))
    }

    #[rstest]
    fn named_fields_keep_declaration_order() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Person {
                first_name: String,
                last_name: String,
                inches_tall: u32,
            }
        };
        let parsed = parse_input(&input)?;
        ensure!(
            parsed.fields == ["first_name", "last_name", "inches_tall"],
            "unexpected fields: {:?}",
            parsed.fields
        );
        ensure!(parsed.type_name() == "Person", "unexpected type name");
        Ok(())
    }

    #[rstest]
    fn raw_identifiers_are_unrawed() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct r#Token { r#type: u8 }
        };
        let parsed = parse_input(&input)?;
        ensure!(parsed.fields == ["type"], "unexpected fields: {:?}", parsed.fields);
        ensure!(parsed.type_name() == "Token", "unexpected type name");
        Ok(())
    }

    #[rstest]
    #[case::tuple(parse_quote! { struct Pair(u8, u8); }, vec!["", ""])]
    #[case::unit(parse_quote! { struct Marker; }, vec![])]
    #[case::empty_braces(parse_quote! { struct Empty {} }, vec![])]
    fn positional_and_unit_structs(
        #[case] input: DeriveInput,
        #[case] expected: Vec<&str>,
    ) -> Result<()> {
        let parsed = parse_input(&input)?;
        ensure!(parsed.fields == expected, "unexpected fields: {:?}", parsed.fields);
        Ok(())
    }

    #[rstest]
    fn rename_all_and_field_rename_combine() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[equatable(rename_all = "camelCase", rename = "Outer.Person")]
            struct Person {
                first_name: String,
                #[equatable(rename = "surname")]
                last_name: String,
            }
        };
        let parsed = parse_input(&input)?;
        ensure!(
            parsed.fields == ["firstName", "surname"],
            "unexpected fields: {:?}",
            parsed.fields
        );
        ensure!(parsed.type_name() == "Outer.Person", "rename not applied");
        Ok(())
    }

    #[rstest]
    fn crate_attribute_parses_path() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[equatable(crate = "gen_alias")]
            struct Point { x: i32 }
        };
        let parsed = parse_input(&input)?;
        ensure!(parsed.attrs.crate_path.is_some(), "crate path missing");
        Ok(())
    }

    #[rstest]
    #[case::enum_item(
        parse_quote! { enum Shape { Circle } },
        "Reflect can only be derived for structs"
    )]
    #[case::union_item(
        parse_quote! { union Bits { a: u8, b: i8 } },
        "Reflect can only be derived for structs"
    )]
    #[case::unknown_key(
        parse_quote! { #[equatable(skip)] struct Point { x: i32 } },
        "unsupported equatable attribute"
    )]
    #[case::unknown_field_key(
        parse_quote! { struct Point { #[equatable(skip)] x: i32 } },
        "unsupported equatable field attribute"
    )]
    #[case::tuple_rename(
        parse_quote! { struct Pair(#[equatable(rename = "first")] u8); },
        "rename is only supported on named fields"
    )]
    #[case::empty_rename(
        parse_quote! { #[equatable(rename = "")] struct Point { x: i32 } },
        "rename must not be empty"
    )]
    #[case::non_string(
        parse_quote! { #[equatable(rename_all = 3)] struct Point { x: i32 } },
        "rename_all must be a string"
    )]
    fn invalid_input_is_rejected(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
        let err = parse_err(&input)?;
        ensure!(err.contains(message), "unexpected error: {err}");
        Ok(())
    }
}
