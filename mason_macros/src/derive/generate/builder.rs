//! Builder struct generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::builder_skip_predicate;
use crate::derive::crate_path::CratePath;
use crate::derive::parse::{FieldModel, StructModel};

/// Emit the builder struct and its inherent methods.
pub(super) fn generate_builder(model: &StructModel, krate: &CratePath) -> TokenStream {
    let StructModel {
        ident,
        vis,
        builder,
        serde_attrs,
        fields,
        ..
    } = model;
    let k = &krate.tokens;
    let serde_crate = krate.item_path("serde");
    let skip = builder_skip_predicate(model.attrs.include, krate)
        .map(|predicate| quote! { , skip_serializing_if = #predicate });
    let doc = format!("Builder for [`{ident}`].");

    let field_defs = fields.iter().map(|field| {
        let FieldModel {
            ident: name,
            inner,
            serde_attrs: field_serde,
            ..
        } = field;
        quote! {
            #( #field_serde )*
            #[serde(default #skip)]
            #name: #k::Field<#inner>
        }
    });
    let methods = fields.iter().map(|field| field_methods(field, krate));

    quote! {
        #[doc = #doc]
        #[derive(
            ::core::clone::Clone,
            ::core::fmt::Debug,
            ::core::default::Default,
            ::core::cmp::PartialEq,
            #k::serde::Serialize,
            #k::serde::Deserialize,
        )]
        #[serde(crate = #serde_crate)]
        #( #serde_attrs )*
        #vis struct #builder {
            #( #field_defs, )*
        }

        #[allow(dead_code, reason = "accessors are generated for every field")]
        impl #builder {
            /// Create a builder with every field missing.
            #[must_use]
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #( #methods )*
        }
    }
}

fn field_methods(field: &FieldModel, krate: &CratePath) -> TokenStream {
    let k = &krate.tokens;
    let FieldModel {
        ident: name, inner, ..
    } = field;
    let base = field.base_name().to_string();
    let field_getter = field.field_getter();
    let setter = field.setter();
    let null_setter = field.null_setter();
    let clearer = field.clearer();
    let get_doc = format!("Returns `{base}` if it holds a value.");
    let field_doc = format!("Returns the tri-state storage of `{base}`.");
    let set_doc = format!("Set `{base}`.");
    let null_doc = format!("Set `{base}` to an explicit null.");
    let clear_doc = format!("Reset `{base}` to missing.");

    quote! {
        #[doc = #get_doc]
        #[must_use]
        pub fn #name(&self) -> ::core::option::Option<&#inner> {
            self.#name.as_option()
        }

        #[doc = #field_doc]
        #[must_use]
        pub const fn #field_getter(&self) -> &#k::Field<#inner> {
            &self.#name
        }

        #[doc = #set_doc]
        pub fn #setter(&mut self, value: impl ::core::convert::Into<#inner>) -> &mut Self {
            self.#name.set(value.into());
            self
        }

        #[doc = #null_doc]
        pub fn #null_setter(&mut self) -> &mut Self {
            self.#name.set_null();
            self
        }

        #[doc = #clear_doc]
        pub fn #clearer(&mut self) -> &mut Self {
            self.#name.clear();
            self
        }
    }
}
