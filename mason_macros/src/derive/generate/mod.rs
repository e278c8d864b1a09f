//! Token generation for the `HasBuilder` derive macro.
//!
//! Each submodule emits one self-contained group of items so the pieces can
//! be tested in isolation: the builder struct and its setters, the trait
//! impls binding value and builder, and the value's accessors and serde
//! plumbing.

mod builder;
mod traits;
mod value;

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path::CratePath;
use super::parse::{IncludePolicy, StructModel};

/// Emit every item the derive produces for `model`.
pub(crate) fn generate(model: &StructModel, krate: &CratePath) -> TokenStream {
    let builder = builder::generate_builder(model, krate);
    let traits = traits::generate_trait_impls(model, krate);
    let value = value::generate_value_support(model, krate);
    quote! {
        #builder
        #traits
        #value
    }
}

/// `skip_serializing_if` predicate for builder fields, or `None` when every
/// field is written.
fn builder_skip_predicate(include: Option<IncludePolicy>, krate: &CratePath) -> Option<String> {
    match include {
        None => Some(krate.item_path("Field::is_omitted")),
        Some(IncludePolicy::NonNull) => Some(krate.item_path("Field::is_absent")),
        Some(IncludePolicy::NonAbsent) => Some(krate.item_path("Field::is_missing")),
        Some(IncludePolicy::Always) => None,
    }
}

/// `skip_serializing_if` predicate for the value's `Option` fields.
fn value_skip_predicate(include: Option<IncludePolicy>, krate: &CratePath) -> Option<String> {
    match include {
        None => Some(krate.item_path("field::omit_none")),
        Some(IncludePolicy::NonNull | IncludePolicy::NonAbsent) => {
            Some(krate.item_path("field::is_none"))
        }
        Some(IncludePolicy::Always) => None,
    }
}
