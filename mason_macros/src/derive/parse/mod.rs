//! Parsing utilities for the `HasBuilder` derive macro.
//!
//! Attribute parsing is split by concern: `#[mason(...)]` keys are handled
//! here, forwarded `#[serde(...)]` attributes in [`serde_attrs`], and the
//! shape of the input struct in [`input`].

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr};

mod input;
mod literals;
mod serde_attrs;
mod type_utils;

pub(crate) use input::{FieldModel, StructModel, parse_input};
use literals::lit_str;

/// Inclusion policy fixed by `#[mason(include = "...")]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IncludePolicy {
    NonNull,
    NonAbsent,
    Always,
}

impl IncludePolicy {
    fn parse(value: &syn::LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "non_null" => Ok(Self::NonNull),
            "non_absent" => Ok(Self::NonAbsent),
            "always" => Ok(Self::Always),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unknown include policy '{other}'; expected one of \"non_null\", \
\"non_absent\", or \"always\""
                ),
            )),
        }
    }
}

/// Struct-level attributes recognised by `#[derive(HasBuilder)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Name of the generated builder.
    pub builder: Option<syn::Ident>,
    /// Inclusion policy fixed for this type; `None` follows the mapper.
    pub include: Option<IncludePolicy>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[mason(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `mason::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(HasBuilder)]`.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    /// Fallback `build()` uses when a non-`Option` field is absent.
    pub default: Option<Expr>,
}

/// Iterate all `#[mason(...)]` attributes once and apply a callback.
fn parse_mason<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("mason")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, scope: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown mason {scope} attribute '{key}'"))
}

/// Parse the `#[mason(...)]` attributes on the struct itself.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_mason(attrs, |meta| {
        if meta.path.is_ident("builder") {
            let name = lit_str(meta, "builder")?;
            out.builder = Some(name.parse::<syn::Ident>()?);
        } else if meta.path.is_ident("include") {
            out.include = Some(IncludePolicy::parse(&lit_str(meta, "include")?)?);
        } else if meta.path.is_ident("crate") {
            let path = lit_str(meta, "crate")?;
            out.crate_path = Some(path.parse::<syn::Path>()?);
        } else {
            return Err(unknown_key(meta, "struct"));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Parse the `#[mason(...)]` attributes on a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_mason(attrs, |meta| {
        if meta.path.is_ident("default") {
            out.default = Some(meta.value()?.parse::<Expr>()?);
            Ok(())
        } else {
            Err(unknown_key(meta, "field"))
        }
    })?;
    Ok(out)
}
