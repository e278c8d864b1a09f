//! Input parsing for the `HasBuilder` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so expansion can fail fast with useful errors.

use quote::format_ident;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident, Type, Visibility};

use super::serde_attrs::{container_serde_attrs, field_serde_attrs};
use super::type_utils::option_inner;
use super::{StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A value struct as seen by the generators.
pub(crate) struct StructModel {
    pub ident: Ident,
    pub vis: Visibility,
    pub builder: Ident,
    pub attrs: StructAttrs,
    pub serde_attrs: Vec<Attribute>,
    pub fields: Vec<FieldModel>,
}

/// One field of the value struct.
pub(crate) struct FieldModel {
    pub ident: Ident,
    /// Declared type on the value struct.
    pub ty: Type,
    /// Type stored in the builder's `Field<T>`.
    pub inner: Type,
    /// Whether the value stores the field as `Option<inner>`.
    pub optional: bool,
    pub default: Option<Expr>,
    pub serde_attrs: Vec<Attribute>,
}

impl FieldModel {
    /// Field name without a raw-identifier prefix, for derived method names.
    pub(crate) fn base_name(&self) -> Ident {
        self.ident.unraw()
    }

    pub(crate) fn setter(&self) -> Ident {
        format_ident!("set_{}", self.base_name())
    }

    pub(crate) fn null_setter(&self) -> Ident {
        format_ident!("set_{}_null", self.base_name())
    }

    pub(crate) fn clearer(&self) -> Ident {
        format_ident!("clear_{}", self.base_name())
    }

    pub(crate) fn field_getter(&self) -> Ident {
        format_ident!("{}_field", self.base_name())
    }
}

/// Gathers information from the user-provided struct.
///
/// Generic structs are rejected: a builder binding is resolved per concrete
/// type, and every value type must name exactly one builder.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<StructModel> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "HasBuilder cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "HasBuilder requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "HasBuilder can only be derived for structs",
            ));
        }
    };

    let attrs = parse_struct_attrs(&input.attrs)?;
    let builder = attrs
        .builder
        .clone()
        .unwrap_or_else(|| format_ident!("{}Builder", ident));
    let fields = named.iter().map(parse_field).collect::<syn::Result<Vec<_>>>()?;
    Ok(StructModel {
        ident,
        vis: input.vis.clone(),
        builder,
        attrs,
        serde_attrs: container_serde_attrs(&input.attrs)?,
        fields,
    })
}

fn parse_field(field: &syn::Field) -> syn::Result<FieldModel> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "HasBuilder requires named fields"))?;
    if ident.unraw() == "new" {
        return Err(syn::Error::new_spanned(
            &ident,
            "a field named `new` collides with the generated builder constructor",
        ));
    }
    let field_attrs = parse_field_attrs(&field.attrs)?;
    let (inner, optional) = option_inner(&field.ty)
        .map_or_else(|| (field.ty.clone(), false), |inner| (inner.clone(), true));
    if optional && field_attrs.default.is_some() {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "#[mason(default = ...)] only applies to non-Option fields",
        ));
    }
    Ok(FieldModel {
        ident,
        ty: field.ty.clone(),
        inner,
        optional,
        default: field_attrs.default,
        serde_attrs: field_serde_attrs(&field.attrs)?,
    })
}
