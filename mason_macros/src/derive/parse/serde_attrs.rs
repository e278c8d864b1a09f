//! Forwarding of `#[serde(...)]` attributes.
//!
//! The derive copies serde attributes from the value struct and its fields
//! onto the generated builder and the value's encoded view so renames and
//! aliases apply uniformly. A handful of keys are emitted by the derive
//! itself, or would stop the builder from decoding leniently, and are
//! rejected.

use syn::Attribute;

/// Field keys the derive emits itself, or that cannot apply to both the
/// builder's `Field<T>` and the value's borrowed view.
const MANAGED_FIELD_KEYS: &[&str] = &[
    "default",
    "skip",
    "skip_serializing",
    "skip_serializing_if",
    "with",
    "serialize_with",
    "deserialize_with",
];

/// Container keys that would make the builder reject unknown input, bypass
/// builder routing, or change the shape the borrowed view encodes.
const MANAGED_CONTAINER_KEYS: &[&str] = &[
    "deny_unknown_fields",
    "transparent",
    "from",
    "try_from",
    "into",
    "tag",
    "untagged",
    "content",
    "remote",
    "crate",
];

/// Collect the serde attributes of an item, preserving their order.
fn serde_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .cloned()
        .collect()
}

/// Collect a struct's serde attributes, rejecting keys the derive manages.
pub(super) fn container_serde_attrs(attrs: &[Attribute]) -> syn::Result<Vec<Attribute>> {
    checked_serde_attrs(attrs, MANAGED_CONTAINER_KEYS, "structs")
}

/// Collect a field's serde attributes, rejecting keys the derive manages.
pub(super) fn field_serde_attrs(attrs: &[Attribute]) -> syn::Result<Vec<Attribute>> {
    checked_serde_attrs(attrs, MANAGED_FIELD_KEYS, "fields")
}

fn checked_serde_attrs(
    attrs: &[Attribute],
    managed: &[&str],
    item: &str,
) -> syn::Result<Vec<Attribute>> {
    let forwarded = serde_attrs(attrs);
    for attr in &forwarded {
        attr.parse_nested_meta(|meta| {
            if let Some(key) = managed.iter().find(|key| meta.path.is_ident(key)) {
                return Err(meta.error(format!(
                    "#[serde({key})] is not supported on HasBuilder {item}"
                )));
            }
            skip_value(&meta)
        })?;
    }
    Ok(forwarded)
}

/// Consumes the value of a key that is forwarded verbatim.
fn skip_value(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}
